//! Read-only audit of canteen references

use crate::db;
use crate::error::Result;
use crate::model::{is_empty_ref, Canteen};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::Database;

pub struct AuditReport {
    pub canteens: Vec<Canteen>,
    /// Distinct `canteenId` values found on menu items, empties included.
    pub referenced: Vec<Bson>,
    /// Referenced identifiers with no matching canteen record.
    pub dangling: Vec<Bson>,
}

/// Scan both collections and report dangling `canteenId` references.
/// Detection only; nothing is written.
pub async fn audit_references(database: &Database) -> Result<AuditReport> {
    let mut canteens = Vec::new();
    let mut cursor = db::canteens(database).find(doc! {}).await?;
    while let Some(canteen) = cursor.try_next().await? {
        canteens.push(canteen);
    }

    let referenced = db::menu_items(database)
        .distinct("canteenId", doc! {})
        .await?;

    let known: Vec<Bson> = canteens.iter().map(|c| c.id.clone()).collect();
    let dangling = dangling_references(&referenced, &known);

    Ok(AuditReport {
        canteens,
        referenced,
        dangling,
    })
}

/// Referenced identifiers absent from the canteen primary-key set. Membership
/// is tested by exact BSON equality; empty and null references are skipped.
pub fn dangling_references(referenced: &[Bson], known: &[Bson]) -> Vec<Bson> {
    referenced
        .iter()
        .filter(|id| !is_empty_ref(id))
        .filter(|id| !known.contains(id))
        .cloned()
        .collect()
}
