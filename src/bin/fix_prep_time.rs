//! Repair string-typed averagePreparationTime values
//!
//! Run with: cargo run --bin fix_prep_time

use campuseats_dbtools::config::Config;
use campuseats_dbtools::db;
use campuseats_dbtools::model::DEFAULT_PREP_TIME_MINUTES;
use campuseats_dbtools::reconcile::normalize_prep_times;

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

    println!("\n--- Fixing all invalid averagePreparationTime values ---");
    let fixes = normalize_prep_times(&database).await?;
    for fix in &fixes {
        println!(
            "Fixing canteen {} - value '{}' to {}",
            fix.canteen_name, fix.original, DEFAULT_PREP_TIME_MINUTES
        );
    }
    println!("\n✅ Normalized {} canteen record(s).", fixes.len());

    Ok(())
}
