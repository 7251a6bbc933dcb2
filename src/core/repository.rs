//! Product repository access.
//!
//! `ProductRepository` is built once at startup around a database connection
//! and handed to whatever needs product rows. It never writes; lifecycle
//! changes live in [`crate::core::product`].

use crate::{
    entities::{Product, product},
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::{debug, instrument};

/// Rows shown per page when browsing without a search term
pub const PAGE_SIZE: u64 = 5;

/// Upper bound on rows returned for a name search
pub const SEARCH_LIMIT: u64 = 1000;

/// One page of products plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    /// Products on this page (or every search match)
    pub items: Vec<product::Model>,
    /// Offset of the next page, `None` when this is the last one
    pub next_offset: Option<u64>,
    /// Whole-table row count when browsing; number of matches when searching
    pub total_count: u64,
}

/// Read access to the `products` table.
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Wraps an established connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying connection, for write operations.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Fetches products for a listing view.
    ///
    /// With a non-empty `search`, returns up to [`SEARCH_LIMIT`] products whose
    /// name contains the term, ignoring ASCII case only (`SQLite`'s `lower()`
    /// leaves other letters alone, so the term is folded the same way);
    /// `offset` is ignored and
    /// `next_offset` is `None`. Without a search, returns at most
    /// [`PAGE_SIZE`] products starting at `offset`, over-fetching one row to
    /// detect a following page, and counts the whole table separately.
    ///
    /// # Errors
    /// Propagates any database failure.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self, search: &str, offset: u64) -> Result<ProductPage> {
        let term = search.trim();
        if !term.is_empty() {
            let pattern = format!("%{}%", term.to_ascii_lowercase());
            let items = Product::find()
                .filter(Expr::expr(Func::lower(Expr::col(product::Column::Name))).like(pattern))
                .order_by_asc(product::Column::Id)
                .limit(SEARCH_LIMIT)
                .all(&self.db)
                .await?;
            debug!("Search matched {} products", items.len());
            let total_count = items.len() as u64;
            return Ok(ProductPage {
                items: items.into_iter().map(normalize_money).collect(),
                next_offset: None,
                total_count,
            });
        }

        let mut items = Product::find()
            .order_by_asc(product::Column::Id)
            .offset(offset)
            .limit(PAGE_SIZE + 1)
            .all(&self.db)
            .await?;

        let next_offset = if items.len() as u64 > PAGE_SIZE {
            items.truncate(usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX));
            Some(offset + PAGE_SIZE)
        } else {
            None
        };

        let total_count = self.count().await?;

        Ok(ProductPage {
            items: items.into_iter().map(normalize_money).collect(),
            next_offset,
            total_count,
        })
    }

    /// Every product in the table, in id order. Aggregators run over this.
    ///
    /// # Errors
    /// Propagates any database failure.
    pub async fn fetch_all(&self) -> Result<Vec<product::Model>> {
        let items = Product::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(items.into_iter().map(normalize_money).collect())
    }

    /// Total number of product rows.
    ///
    /// # Errors
    /// Propagates any database failure.
    pub async fn count(&self) -> Result<u64> {
        Product::find().count(&self.db).await.map_err(Into::into)
    }

    /// Looks a product up by id.
    ///
    /// # Errors
    /// Propagates any database failure.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<product::Model>> {
        let found = Product::find_by_id(id).one(&self.db).await?;
        Ok(found.map(normalize_money))
    }

    /// Distinct non-empty brand names, alphabetically.
    ///
    /// # Errors
    /// Propagates any database failure.
    pub async fn distinct_brands(&self) -> Result<Vec<String>> {
        let brands: Vec<Option<String>> = Product::find()
            .select_only()
            .column(product::Column::Brand)
            .distinct()
            .order_by_asc(product::Column::Brand)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(non_empty(brands))
    }

    /// Distinct non-empty platform names, alphabetically.
    ///
    /// # Errors
    /// Propagates any database failure.
    pub async fn distinct_platforms(&self) -> Result<Vec<String>> {
        let platforms: Vec<Option<String>> = Product::find()
            .select_only()
            .column(product::Column::Platform)
            .distinct()
            .order_by_asc(product::Column::Platform)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(non_empty(platforms))
    }
}

fn non_empty(values: Vec<Option<String>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Rounds money columns to the cent; `SQLite` hands decimals back through floats.
fn normalize_money(mut model: product::Model) -> product::Model {
    model.purchase_price = cents(model.purchase_price);
    model.selling_price = model.selling_price.map(cents);
    model.sold_price = model.sold_price.map(cents);
    model
}

fn cents(value: Decimal) -> Decimal {
    value.round_dp(2)
}
