//! Database module for MongoDB connection and collection handles

pub mod connection;

pub use connection::connect;

use crate::model::Canteen;
use mongodb::bson::Document;
use mongodb::{Collection, Database};

pub const CANTEENS: &str = "canteens";
pub const MENU_ITEMS: &str = "menu_items";

pub fn canteens(db: &Database) -> Collection<Canteen> {
    db.collection(CANTEENS)
}

/// Menu items are only read for their `canteenId` field, so no record type.
pub fn menu_items(db: &Database) -> Collection<Document> {
    db.collection(MENU_ITEMS)
}
