//! Sample inventory loading from a TOML seed file.
//!
//! The products listed in the seed file are inserted on first run, when the
//! `products` table is still empty. Prices are written as strings so they
//! parse into exact decimals.

use crate::core::product::PLACEHOLDER_IMAGE;
use crate::entities::ProductStatus;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Default seed file location
pub const DEFAULT_SEED_PATH: &str = "config.toml";

/// The whole seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Products to insert
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// One product entry in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Defaults to the placeholder image
    #[serde(default = "default_image_url")]
    pub image_url: String,
    /// Brand
    pub brand: Option<String>,
    /// Model line
    pub model: Option<String>,
    /// Size
    pub size: Option<String>,
    /// Defaults to `"new"`
    #[serde(default = "default_condition")]
    pub condition: String,
    /// Lifecycle status in storage form (`"in_stock"`, `"sold"`, ...)
    pub status: ProductStatus,
    /// Price paid per unit, as a string like `"170.00"`
    pub purchase_price: Decimal,
    /// Asking price
    pub selling_price: Option<Decimal>,
    /// Realized price; present exactly for sold entries
    pub sold_price: Option<Decimal>,
    /// Units held
    pub stock: i32,
    /// `YYYY-MM-DD`
    pub purchase_date: NaiveDate,
    /// `YYYY-MM-DD`
    pub sold_date: Option<NaiveDate>,
    /// Sale channel
    pub platform: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

fn default_image_url() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_condition() -> String {
    "new".to_string()
}

/// Resolves the seed file path from `SEED_CONFIG`, falling back to `config.toml`.
#[must_use]
pub fn get_seed_path() -> String {
    std::env::var("SEED_CONFIG").unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string())
}

/// Parses seed products from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or a field has the wrong type.
pub fn parse_seed_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Loads seed products from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed products from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed_config(&contents)
}
