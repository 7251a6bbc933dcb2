//! Inventory page figures and status tabs.

use crate::entities::{ProductStatus, product};

/// Line counts for the inventory page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// In-stock plus listed lines
    pub total_items: u64,
    /// Lines held but not offered
    pub in_stock: u64,
    /// Lines offered for sale
    pub listed: u64,
}

/// Counts held lines (not units); sold and pending products are left out.
#[must_use]
pub fn inventory_summary(products: &[product::Model]) -> InventorySummary {
    let mut summary = InventorySummary::default();
    for item in products {
        match item.status {
            ProductStatus::InStock => summary.in_stock += 1,
            ProductStatus::Listed => summary.listed += 1,
            ProductStatus::Sold | ProductStatus::Pending => continue,
        }
        summary.total_items += 1;
    }
    summary
}

/// Products in the given status tab; `None` is the "all" tab.
#[must_use]
pub fn filter_by_status(
    products: &[product::Model],
    status: Option<ProductStatus>,
) -> Vec<&product::Model> {
    products
        .iter()
        .filter(|p| status.is_none_or(|s| p.is(s)))
        .collect()
}
