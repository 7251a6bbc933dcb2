//! Product lifecycle operations - recording purchases, listings and sales.
//!
//! These are the only functions that write to the `products` table. Every
//! write validates money and stock first so the reporting side can rely on
//! non-negative prices and a sold price that is present exactly when the
//! product is sold.

use crate::{
    config::seed::ProductSeed,
    entities::{Product, ProductStatus, product},
    errors::{Error, Result},
};
use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::{debug, info, instrument};

/// Image used when none is supplied
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Largest amount a `Decimal(10, 2)` money column holds: 99,999,999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Input for recording a new purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Display name, trimmed on insert; must not be blank
    pub name: String,
    /// Image reference, [`PLACEHOLDER_IMAGE`] by default
    pub image_url: String,
    /// Maker; blank values are stored as `None`
    pub brand: Option<String>,
    /// Model line
    pub model_name: Option<String>,
    /// Size label
    pub size: Option<String>,
    /// Falls back to `"new"` when `None`
    pub condition: Option<String>,
    /// Initial status; only `sold` may carry a sold price
    pub status: ProductStatus,
    /// Price paid per unit, between zero and [`MAX_AMOUNT`]
    pub purchase_price: Decimal,
    /// Asking price
    pub selling_price: Option<Decimal>,
    /// Realized price; required exactly when `status` is `sold`
    pub sold_price: Option<Decimal>,
    /// Units held, never negative
    pub stock: i32,
    /// When it was bought
    pub purchase_date: NaiveDateTime,
    /// When it sold, for products recorded as already sold
    pub sold_date: Option<NaiveDateTime>,
    /// Sale channel
    pub platform: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl NewProduct {
    /// A single in-stock unit with no optional details.
    #[must_use]
    pub fn new(name: impl Into<String>, purchase_price: Decimal, purchase_date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            brand: None,
            model_name: None,
            size: None,
            condition: None,
            status: ProductStatus::InStock,
            purchase_price,
            selling_price: None,
            sold_price: None,
            stock: 1,
            purchase_date,
            sold_date: None,
            platform: None,
            notes: None,
        }
    }
}

impl From<ProductSeed> for NewProduct {
    fn from(seed: ProductSeed) -> Self {
        Self {
            name: seed.name,
            image_url: seed.image_url,
            brand: seed.brand,
            model_name: seed.model,
            size: seed.size,
            condition: Some(seed.condition),
            status: seed.status,
            purchase_price: seed.purchase_price,
            selling_price: seed.selling_price,
            sold_price: seed.sold_price,
            stock: seed.stock,
            purchase_date: seed.purchase_date.and_time(NaiveTime::MIN),
            sold_date: seed.sold_date.map(|d| d.and_time(NaiveTime::MIN)),
            platform: seed.platform,
            notes: seed.notes,
        }
    }
}

/// True for amounts a money column can store: zero up to [`MAX_AMOUNT`].
#[must_use]
pub fn is_storable_amount(amount: Decimal) -> bool {
    (!amount.is_sign_negative() || amount.is_zero()) && amount <= MAX_AMOUNT
}

fn ensure_amount(amount: Decimal) -> Result<()> {
    if !is_storable_amount(amount) {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_new_product(new: &NewProduct) -> Result<()> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    ensure_amount(new.purchase_price)?;
    if let Some(price) = new.selling_price {
        ensure_amount(price)?;
    }
    if let Some(price) = new.sold_price {
        ensure_amount(price)?;
    }

    if new.stock < 0 {
        return Err(Error::InvalidStock { stock: new.stock });
    }

    match (new.status, new.sold_price) {
        (ProductStatus::Sold, None) => Err(Error::InvalidSale {
            message: "a sold product needs a sold price".to_string(),
        }),
        (status, Some(_)) if status != ProductStatus::Sold => Err(Error::InvalidSale {
            message: format!("a product that is {status} cannot have a sold price"),
        }),
        _ => Ok(()),
    }
}

fn active_model_for(new: NewProduct) -> product::ActiveModel {
    product::ActiveModel {
        image_url: Set(new.image_url),
        name: Set(new.name.trim().to_string()),
        brand: Set(blank_to_none(new.brand)),
        model_name: Set(blank_to_none(new.model_name)),
        size: Set(blank_to_none(new.size)),
        condition: Set(blank_to_none(new.condition).unwrap_or_else(|| "new".to_string())),
        status: Set(new.status),
        purchase_price: Set(new.purchase_price),
        selling_price: Set(new.selling_price),
        sold_price: Set(new.sold_price),
        stock: Set(new.stock),
        purchase_date: Set(new.purchase_date),
        sold_date: Set(new.sold_date),
        platform: Set(blank_to_none(new.platform)),
        notes: Set(blank_to_none(new.notes)),
        ..Default::default()
    }
}

/// Records a newly purchased product.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - Any price is negative or above [`MAX_AMOUNT`]
/// - The stock is negative
/// - The sold price is missing for a sold product, or present for any other status
/// - The database insert fails
#[instrument(skip(db, new), fields(name = %new.name))]
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model> {
    validate_new_product(&new)?;

    let created = active_model_for(new).insert(db).await?;
    debug!("Created product {}", created.id);
    Ok(created)
}

async fn find_existing(db: &DatabaseConnection, id: i64) -> Result<product::Model> {
    Product::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id })
}

/// Offers a product for sale at `selling_price`, optionally on a platform.
///
/// Works for in-stock, listed (price update) and pending products; the status
/// becomes `listed`.
///
/// # Errors
/// Returns an error if the price is negative or above [`MAX_AMOUNT`], the
/// product does not exist or is already sold, or the update fails.
pub async fn list_for_sale(
    db: &DatabaseConnection,
    id: i64,
    selling_price: Decimal,
    platform: Option<String>,
) -> Result<product::Model> {
    ensure_amount(selling_price)?;

    let existing = find_existing(db, id).await?;
    if existing.is(ProductStatus::Sold) {
        return Err(Error::AlreadySold { id });
    }

    let platform = blank_to_none(platform).or_else(|| existing.platform.clone());
    let mut active: product::ActiveModel = existing.into();
    active.status = Set(ProductStatus::Listed);
    active.selling_price = Set(Some(selling_price));
    active.platform = Set(platform);

    active.update(db).await.map_err(Into::into)
}

/// Marks an in-stock or listed product as pending sale.
///
/// # Errors
/// Returns an error if the product does not exist or is already sold.
pub async fn mark_pending(db: &DatabaseConnection, id: i64) -> Result<product::Model> {
    let existing = find_existing(db, id).await?;
    if existing.is(ProductStatus::Sold) {
        return Err(Error::AlreadySold { id });
    }

    let mut active: product::ActiveModel = existing.into();
    active.status = Set(ProductStatus::Pending);
    active.update(db).await.map_err(Into::into)
}

/// Records the sale of one unit.
///
/// Sets the sold price and date, switches the status to `sold` and reduces the
/// stock by one (never below zero).
///
/// # Errors
/// Returns an error if the price is negative or above [`MAX_AMOUNT`], the
/// product does not exist or is already sold, or the update fails.
#[instrument(skip(db))]
pub async fn mark_sold(
    db: &DatabaseConnection,
    id: i64,
    sold_price: Decimal,
    platform: Option<String>,
    sold_at: NaiveDateTime,
) -> Result<product::Model> {
    ensure_amount(sold_price)?;

    let existing = find_existing(db, id).await?;
    if existing.is(ProductStatus::Sold) {
        return Err(Error::AlreadySold { id });
    }

    let stock = (existing.stock - 1).max(0);
    let platform = blank_to_none(platform).or_else(|| existing.platform.clone());
    let mut active: product::ActiveModel = existing.into();
    active.status = Set(ProductStatus::Sold);
    active.sold_price = Set(Some(sold_price));
    active.sold_date = Set(Some(sold_at));
    active.platform = Set(platform);
    active.stock = Set(stock);

    let sold = active.update(db).await?;
    info!("Product {} sold for {}", sold.id, sold_price);
    Ok(sold)
}

/// Permanently removes a product.
///
/// # Errors
/// Returns `Error::ProductNotFound` if no row was deleted.
pub async fn delete_product(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Product::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id });
    }
    info!("Deleted product {}", id);
    Ok(())
}

/// Inserts every seed product in a single transaction.
///
/// # Errors
/// Returns the first validation or database error; nothing is inserted then.
#[instrument(skip(db, seeds))]
pub async fn seed_products(db: &DatabaseConnection, seeds: &[ProductSeed]) -> Result<usize> {
    for seed in seeds {
        validate_new_product(&NewProduct::from(seed.clone()))?;
    }

    let txn = db.begin().await?;
    for seed in seeds {
        active_model_for(NewProduct::from(seed.clone()))
            .insert(&txn)
            .await?;
    }
    txn.commit().await?;

    info!("Seeded {} products", seeds.len());
    Ok(seeds.len())
}

/// Seeds the table only when it has no rows yet. Returns the number inserted.
///
/// # Errors
/// Propagates validation and database errors from [`seed_products`].
pub async fn seed_if_empty(db: &DatabaseConnection, seeds: &[ProductSeed]) -> Result<usize> {
    let existing = Product::find().count(db).await?;
    if existing > 0 {
        debug!("Skipping seed, {} products already stored", existing);
        return Ok(0);
    }
    seed_products(db, seeds).await
}
