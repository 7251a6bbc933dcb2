//! Database configuration module for `ResaleLedger`.
//!
//! Handles the `SQLite` connection and creates the `products` table from the
//! entity definition with `Schema::create_table_from_entity`, so the schema
//! always matches the Rust struct.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the local database file
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/resale_ledger.sqlite?mode=rwc";

/// Gets the database URL from `DATABASE_URL` or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// The file a `sqlite://` URL points at, if any.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url.strip_prefix("sqlite://")?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.starts_with(':') {
        return None;
    }
    Some(Path::new(path))
}

/// Connects to the database named by `DATABASE_URL` (or the default file),
/// creating the parent directory of a `SQLite` file first.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    if let Some(parent) = sqlite_file_path(&database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    debug!("Connecting to database at {}", database_url);
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `products` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    info!("Product table ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::product::Model as ProductModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let rows: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path(DEFAULT_DATABASE_URL),
            Some(Path::new("data/resale_ledger.sqlite"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
