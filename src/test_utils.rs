//! Shared test utilities for `ResaleLedger`.
//!
//! This module provides helpers for setting up test databases, inserting
//! products with sensible defaults, and building in-memory product rows for
//! the pure aggregation tests.

use crate::{
    core::product::{NewProduct, PLACEHOLDER_IMAGE, create_product},
    entities::{ProductStatus, product::Model},
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Midnight on the given day.
///
/// # Panics
/// Panics on an invalid calendar date.
#[allow(clippy::unwrap_used)]
pub fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Inserts a product in the given status with sensible defaults.
///
/// # Defaults
/// * purchase price: 10.00
/// * stock: 1 (0 when sold)
/// * selling price: 15.00 when listed or pending
/// * sold price: 15.00 when sold, sold on 2024-02-01
/// * purchase date: 2024-01-01
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    status: ProductStatus,
) -> Result<Model> {
    create_product(db, NewProductBuilder::new(name).status(status).build()).await
}

/// Inserts a product built with [`NewProductBuilder`].
pub async fn create_custom_product(db: &DatabaseConnection, new: NewProduct) -> Result<Model> {
    create_product(db, new).await
}

/// Chainable builder over [`NewProduct`] for tests.
#[derive(Debug, Clone)]
pub struct NewProductBuilder {
    inner: NewProduct,
}

impl NewProductBuilder {
    /// Starts an in-stock product bought for 10.00 on 2024-01-01.
    pub fn new(name: &str) -> Self {
        Self {
            inner: NewProduct::new(name, Decimal::new(1000, 2), datetime(2024, 1, 1)),
        }
    }

    /// Sets the status and fills in the price fields that status needs.
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.inner.status = status;
        match status {
            ProductStatus::Sold => {
                self.inner.sold_price = Some(Decimal::new(1500, 2));
                self.inner.sold_date = Some(datetime(2024, 2, 1));
                self.inner.stock = 0;
            }
            ProductStatus::Listed | ProductStatus::Pending => {
                self.inner.selling_price = Some(Decimal::new(1500, 2));
            }
            ProductStatus::InStock => {}
        }
        self
    }

    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.inner.purchase_price = price;
        self
    }

    pub fn selling_price(mut self, price: Decimal) -> Self {
        self.inner.selling_price = Some(price);
        self
    }

    pub fn sold_price(mut self, price: Decimal) -> Self {
        self.inner.sold_price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.inner.stock = stock;
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.inner.brand = Some(brand.to_string());
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.inner.platform = Some(platform.to_string());
        self
    }

    pub fn build(self) -> NewProduct {
        self.inner
    }
}

/// An in-memory product row for the aggregation tests. Prices are in cents.
pub fn item(id: i64, status: ProductStatus, purchase_cents: i64, stock: i32) -> Model {
    Model {
        id,
        image_url: PLACEHOLDER_IMAGE.to_string(),
        name: format!("Item {id}"),
        brand: None,
        model_name: None,
        size: None,
        condition: "new".to_string(),
        status,
        purchase_price: Decimal::new(purchase_cents, 2),
        selling_price: None,
        sold_price: None,
        stock,
        purchase_date: datetime(2024, 1, 1),
        sold_date: None,
        platform: None,
        notes: None,
    }
}

/// A sold in-memory product row. Prices are in cents.
pub fn sold_item(id: i64, purchase_cents: i64, sold_cents: i64) -> Model {
    Model {
        sold_price: Some(Decimal::new(sold_cents, 2)),
        sold_date: Some(datetime(2024, 2, 1)),
        ..item(id, ProductStatus::Sold, purchase_cents, 0)
    }
}
