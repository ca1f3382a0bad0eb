//! Repair of dangling canteen references and visibility flags

use crate::db;
use crate::error::Result;
use crate::model::{alternate_form, is_empty_ref, Canteen};
use mongodb::bson::{doc, Bson};
use mongodb::{Collection, Database};

pub struct RepairSummary {
    /// Non-empty distinct `canteenId` values examined.
    pub inspected: usize,
    /// Identifiers for which a placeholder canteen was inserted.
    pub created: Vec<Bson>,
    /// Documents modified by the bulk visibility update.
    pub visibility_modified: u64,
}

/// Two-step lookup: exact `_id` match first, then a retry with the alternate
/// identifier form (hex string vs. `ObjectId`). An identifier with no
/// alternate form simply skips the second step.
pub async fn find_canteen(
    canteens: &Collection<Canteen>,
    id: &Bson,
) -> Result<Option<Canteen>> {
    if let Some(canteen) = canteens.find_one(doc! { "_id": id.clone() }).await? {
        return Ok(Some(canteen));
    }
    if let Some(alt) = alternate_form(id) {
        return Ok(canteens.find_one(doc! { "_id": alt }).await?);
    }
    Ok(None)
}

/// Repair dangling references, then normalize visibility.
///
/// For every distinct non-empty `canteenId` on menu items with no canteen
/// found by [`find_canteen`], a placeholder canteen is inserted under the
/// original identifier. Afterwards an unconditional bulk update sets
/// status = APPROVED, active = true, verified = true on every canteen.
///
/// Idempotent: a second run finds every identifier on lookup and the bulk
/// update modifies nothing. Mutations are applied document by document with
/// no rollback on a mid-scan crash.
pub async fn repair_references(database: &Database) -> Result<RepairSummary> {
    let canteens = db::canteens(database);

    let referenced = db::menu_items(database)
        .distinct("canteenId", doc! {})
        .await?;

    let mut inspected = 0;
    let mut created = Vec::new();
    for id in referenced.into_iter().filter(|id| !is_empty_ref(id)) {
        inspected += 1;
        if find_canteen(&canteens, &id).await?.is_none() {
            canteens.insert_one(Canteen::placeholder(id.clone())).await?;
            created.push(id);
        }
    }

    let result = canteens
        .update_many(
            doc! {},
            doc! { "$set": { "status": "APPROVED", "active": true, "verified": true } },
        )
        .await?;

    Ok(RepairSummary {
        inspected,
        created,
        visibility_modified: result.modified_count,
    })
}
