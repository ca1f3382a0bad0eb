//! Repair dangling canteen references and visibility flags
//!
//! Run with: cargo run --bin fix_db
//!
//! Inserts a placeholder canteen for every menu-item `canteenId` with no
//! matching canteen record, then bulk-sets every canteen to
//! APPROVED / active / verified. Mutates the database; take a backup first.

use campuseats_dbtools::config::Config;
use campuseats_dbtools::db;
use campuseats_dbtools::model::id_label;
use campuseats_dbtools::reconcile::repair_references;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("📡 Connecting to database...");
    let database = db::connect(&config).await?;
    println!("✅ Connected to database: {}", database.name());

    println!("\n--- Inspecting Full Canteen Documents ---");
    let raw: mongodb::Collection<Document> = database.collection(db::CANTEENS);
    let mut cursor = raw.find(doc! {}).await?;
    while let Some(mut document) = cursor.try_next().await? {
        // Print the identifier in string form, matching the report format.
        if let Some(id) = document.get("_id").cloned() {
            document.insert("_id", id_label(&id));
        }
        println!("{}", serde_json::to_string_pretty(&document)?);
    }

    println!("\n--- Fixing Data Gaps ---");
    let summary = repair_references(&database).await?;

    for id in &summary.created {
        println!("Created missing canteen for ID: {}", id_label(id));
    }
    if summary.created.is_empty() {
        println!(
            "✅ All {} referenced canteen IDs already exist.",
            summary.inspected
        );
    }

    println!(
        "Updated {} canteens to be visible (APPROVED and active)",
        summary.visibility_modified
    );

    Ok(())
}
