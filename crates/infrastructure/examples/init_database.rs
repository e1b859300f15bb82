//! Creates the telemetry tables in the configured database and exits.
//!
//! ```bash
//! TELEMETRY__DATABASE__URL="sqlite://vehicle_data.db?mode=rwc" cargo run --example init_database
//! ```

use infrastructure::{AppConfig, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    let config = AppConfig::load("config")?;

    println!("Connecting to {}...", config.database.url);
    let db = database::connect(&config.database).await?;

    // connect() already ran it; a second pass proves idempotency on this file
    database::create_schema(&db).await?;

    println!("✅ Schema ready.");

    Ok(())
}
