//! Profit and loss classification of sold products.

use crate::{
    core::stats::DashboardStats,
    entities::{ProductStatus, product},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Profit page figures. The item lists are complete; the bot truncates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitReport {
    /// Sold products with a strictly positive profit
    pub profitable_items: Vec<product::Model>,
    /// Sold products with a strictly negative profit
    pub loss_items: Vec<product::Model>,
    /// Total profit per sold product, 0 with no sales
    pub average_profit: Decimal,
    /// Total profit as a percentage of total investment, 0 with no investment
    pub profit_margin: f64,
    /// Asking price minus cost over listed products; may be negative
    pub potential_profit: Decimal,
}

/// Partitions sold products by profit and derives margins from `stats`.
///
/// Breakeven sales land in neither list.
#[must_use]
pub fn profit_report(products: &[product::Model], stats: &DashboardStats) -> ProfitReport {
    let (profitable_items, loss_items): (Vec<_>, Vec<_>) = products
        .iter()
        .filter(|p| p.is(ProductStatus::Sold) && !p.realized_profit().is_zero())
        .cloned()
        .partition(|p| p.realized_profit() > Decimal::ZERO);

    let average_profit = if stats.total_sold_items == 0 {
        Decimal::ZERO
    } else {
        stats.total_profit / Decimal::from(stats.total_sold_items)
    };

    let profit_margin = if stats.total_investment.is_zero() {
        0.0
    } else {
        (stats.total_profit / stats.total_investment * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    };

    let potential_profit = products
        .iter()
        .filter(|p| p.is(ProductStatus::Listed))
        .map(|p| p.selling_price_or_zero() - p.purchase_price)
        .sum();

    ProfitReport {
        profitable_items,
        loss_items,
        average_profit,
        profit_margin,
        potential_profit,
    }
}
