use dotenvy::dotenv;
use resale_ledger::{
    bot,
    config::{database, seed},
    core::{product, repository::ProductRepository},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and create tables
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 4. Seed sample products into an empty table
    let seed_path = seed::get_seed_path();
    match seed::load_seed_config(&seed_path) {
        Ok(config) => {
            product::seed_if_empty(&db, &config.products)
                .await
                .inspect(|count| info!("Seeded {} products from {}", count, seed_path))
                .inspect_err(|e| error!("Failed to seed products: {}", e))?;
        }
        Err(e) => warn!("Skipping seed data: {}", e),
    }

    // 5. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, ProductRepository::new(db)).await
}
