//! Audit canteen references in the CampusEats database
//!
//! Run with: cargo run --bin check_db

use campuseats_dbtools::config::Config;
use campuseats_dbtools::db;
use campuseats_dbtools::model::id_label;
use campuseats_dbtools::reconcile::audit_references;

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

    let report = audit_references(&database).await?;

    println!("\n--- Current Canteens ---");
    for canteen in &report.canteens {
        println!(
            "ID: {}, Name: {}, Status: {}, Active: {}",
            id_label(&canteen.id),
            canteen.display_name(),
            canteen
                .status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "<none>".to_string()),
            canteen
                .active
                .map(|a| a.to_string())
                .unwrap_or_else(|| "<none>".to_string()),
        );
    }

    println!("\n--- Unique Canteen IDs in Menu Items ---");
    let labels: Vec<String> = report.referenced.iter().map(id_label).collect();
    println!(
        "Found {} unique canteen IDs in menu items: {:?}",
        labels.len(),
        labels
    );

    for id in &report.dangling {
        println!(
            "⚠️  Warning: Canteen ID {} exists in menu items but NOT in canteens collection!",
            id_label(id)
        );
    }
    if report.dangling.is_empty() {
        println!("✅ No dangling canteen references found.");
    }

    Ok(())
}
