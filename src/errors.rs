//! Unified error type for `ResaleLedger`.
//!
//! Storage failures are propagated unchanged; validation failures carry the
//! offending value so the bot layer can explain what went wrong.

use poise::serenity_prelude as serenity;
use rust_decimal::Decimal;
use thiserror::Error;

/// All errors produced by the library and the bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying database read or write failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// No product exists with the given id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Requested product id
        id: i64,
    },

    /// A money amount was negative or otherwise unusable
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A stock count was negative
    #[error("Invalid stock: {stock}")]
    InvalidStock {
        /// The rejected stock count
        stock: i32,
    },

    /// Sold price and status disagree, or a status change is not allowed
    #[error("Invalid sale: {message}")]
    InvalidSale {
        /// Human-readable description of the problem
        message: String,
    },

    /// The product has already been sold
    #[error("Product {id} is already sold")]
    AlreadySold {
        /// Product id
        id: i64,
    },

    /// Environment variable missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// I/O failure (database directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Discord/serenity failure
    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for Error {
    fn from(value: serenity::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
