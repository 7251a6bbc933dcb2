//! Sales history figures.

use crate::entities::{ProductStatus, product};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Recent sales shown by the sales command
pub const RECENT_SALES: usize = 5;

/// Summary of every sold product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummary {
    /// Number of sold products
    pub sold_count: u64,
    /// Sum of sold prices
    pub revenue: Decimal,
    /// Sum of purchase prices of the sold products
    pub cost: Decimal,
    /// Revenue minus cost
    pub net_profit: Decimal,
    /// Net profit per sale, 0 with no sales
    pub average_profit: Decimal,
    /// Most recent sales first; undated sales last
    pub recent_sales: Vec<product::Model>,
}

fn newest_first(a: &product::Model, b: &product::Model) -> Ordering {
    match (a.sold_date, b.sold_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Summarises sold products, keeping the `recent_limit` newest sales.
#[must_use]
pub fn sales_summary(products: &[product::Model], recent_limit: usize) -> SalesSummary {
    let mut sold: Vec<product::Model> = products
        .iter()
        .filter(|p| p.is(ProductStatus::Sold))
        .cloned()
        .collect();

    let revenue: Decimal = sold.iter().map(product::Model::sold_price_or_zero).sum();
    let cost: Decimal = sold.iter().map(|p| p.purchase_price).sum();
    let net_profit = revenue - cost;
    let sold_count = sold.len() as u64;
    let average_profit = if sold_count == 0 {
        Decimal::ZERO
    } else {
        net_profit / Decimal::from(sold_count)
    };

    sold.sort_by(newest_first);
    sold.truncate(recent_limit);

    SalesSummary {
        sold_count,
        revenue,
        cost,
        net_profit,
        average_profit,
        recent_sales: sold,
    }
}
