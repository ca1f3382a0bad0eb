//! Repair of string-typed `averagePreparationTime` values

use crate::db;
use crate::error::Result;
use crate::model::DEFAULT_PREP_TIME_MINUTES;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::Database;

pub struct PrepTimeFix {
    pub id: Bson,
    pub canteen_name: String,
    /// The malformed string that was overwritten.
    pub original: String,
}

/// Overwrite every string-typed `averagePreparationTime` with the default of
/// 15 minutes. The original string is never parsed. Idempotent: corrected
/// fields are numeric and no longer match the `$type` filter.
pub async fn normalize_prep_times(database: &Database) -> Result<Vec<PrepTimeFix>> {
    let canteens = db::canteens(database);

    let mut fixes = Vec::new();
    let mut cursor = canteens
        .find(doc! { "averagePreparationTime": { "$type": "string" } })
        .await?;
    while let Some(canteen) = cursor.try_next().await? {
        let original = canteen.prep_time_raw_string().unwrap_or_default().to_string();
        let canteen_name = canteen.display_name().to_string();
        canteens
            .update_one(
                doc! { "_id": canteen.id.clone() },
                doc! { "$set": { "averagePreparationTime": DEFAULT_PREP_TIME_MINUTES } },
            )
            .await?;
        fixes.push(PrepTimeFix {
            id: canteen.id,
            canteen_name,
            original,
        });
    }
    Ok(fixes)
}
