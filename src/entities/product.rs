//! Product entity - one item bought for resale.
//!
//! A product records what was paid for it, what it is listed for, what it sold
//! for and where. The lifecycle status is a closed enum; money columns are
//! fixed-precision decimals with two fractional digits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a product
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Bought and held, not yet offered anywhere
    #[sea_orm(string_value = "in_stock")]
    InStock,
    /// Offered on a platform at `selling_price`
    #[sea_orm(string_value = "listed")]
    Listed,
    /// Sold at `sold_price` on `sold_date`
    #[sea_orm(string_value = "sold")]
    Sold,
    /// Sale agreed but not completed
    #[sea_orm(string_value = "pending")]
    Pending,
}

impl ProductStatus {
    /// Storage value, e.g. `"in_stock"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::Listed => "listed",
            Self::Sold => "sold",
            Self::Pending => "pending",
        }
    }

    /// Parses a storage value. Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "in_stock" => Some(Self::InStock),
            "listed" => Some(Self::Listed),
            "sold" => Some(Self::Sold),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display image reference
    pub image_url: String,
    /// Name of the product (e.g., "Air Jordan 1 Retro High OG")
    pub name: String,
    /// Maker, grouped as "Unknown" in reports when absent
    pub brand: Option<String>,
    /// Model line (e.g., "Yeezy 350 V2")
    #[sea_orm(column_name = "model")]
    pub model_name: Option<String>,
    /// Free-form size (e.g., "10.5", "L")
    pub size: Option<String>,
    /// Item condition, `"new"` unless stated otherwise
    pub condition: String,
    /// Where the product is in its lifecycle
    pub status: ProductStatus,
    /// Price paid per unit
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub purchase_price: Decimal,
    /// Asking price when listed
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub selling_price: Option<Decimal>,
    /// Realized price, present only once sold
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub sold_price: Option<Decimal>,
    /// Number of identical units currently held
    pub stock: i32,
    /// When the product was bought
    pub purchase_date: DateTime,
    /// When the sale completed
    pub sold_date: Option<DateTime>,
    /// Sale channel (e.g., "StockX", "eBay")
    pub platform: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// True when the product has the given status
    #[must_use]
    pub fn is(&self, status: ProductStatus) -> bool {
        self.status == status
    }

    /// Sold price, or zero when absent
    #[must_use]
    pub fn sold_price_or_zero(&self) -> Decimal {
        self.sold_price.unwrap_or(Decimal::ZERO)
    }

    /// Asking price, or zero when absent
    #[must_use]
    pub fn selling_price_or_zero(&self) -> Decimal {
        self.selling_price.unwrap_or(Decimal::ZERO)
    }

    /// Realized profit: sold price (0 when absent) minus purchase price
    #[must_use]
    pub fn realized_profit(&self) -> Decimal {
        self.sold_price_or_zero() - self.purchase_price
    }

    /// Purchase price times units held, saturating at `Decimal::MAX`
    #[must_use]
    pub fn stock_cost(&self) -> Decimal {
        self.purchase_price
            .checked_mul(Decimal::from(self.stock))
            .unwrap_or(Decimal::MAX)
    }
}
