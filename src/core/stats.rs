//! Dashboard statistics over the whole product collection.
//!
//! Missing optional prices count as zero. Nothing is rounded here; the bot
//! formats to two decimals when rendering.

use crate::entities::{ProductStatus, product};
use rust_decimal::Decimal;

/// Global totals shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Purchase price times stock over in-stock and listed products
    pub total_inventory_value: Decimal,
    /// Realized profit over sold products; may be negative
    pub total_profit: Decimal,
    /// Number of sold products
    pub total_sold_items: u64,
    /// Units (not lines) held in stock
    pub total_in_stock: i64,
    /// Purchase price times stock over every product
    pub total_investment: Decimal,
    /// Asking prices of pending products
    pub total_pending_value: Decimal,
}

/// Computes the dashboard totals in a single pass.
#[must_use]
pub fn dashboard_stats(products: &[product::Model]) -> DashboardStats {
    products
        .iter()
        .fold(DashboardStats::default(), |mut stats, item| {
            stats.total_investment += item.stock_cost();
            match item.status {
                ProductStatus::InStock => {
                    stats.total_inventory_value += item.stock_cost();
                    stats.total_in_stock += i64::from(item.stock);
                }
                ProductStatus::Listed => {
                    stats.total_inventory_value += item.stock_cost();
                }
                ProductStatus::Sold => {
                    stats.total_profit += item.realized_profit();
                    stats.total_sold_items += 1;
                }
                ProductStatus::Pending => {
                    stats.total_pending_value += item.selling_price_or_zero();
                }
            }
            stats
        })
}
