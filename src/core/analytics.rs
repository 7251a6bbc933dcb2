//! Brand and platform analytics.
//!
//! Groupings keep the order in which keys are first met so that ranking with
//! a stable sort breaks ties by that order.

use crate::entities::{ProductStatus, product};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::collections::HashMap;

/// Group key for products without a brand or platform
pub const UNKNOWN_KEY: &str = "Unknown";

/// Brands shown in the analytics ranking
pub const TOP_BRANDS: usize = 5;

/// Platforms shown in the analytics ranking
pub const TOP_PLATFORMS: usize = 3;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Per-brand figures. `count` covers every product of the brand; revenue and
/// profit only its sold products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandStats {
    /// Brand as stored, or [`UNKNOWN_KEY`]
    pub brand: String,
    /// Products of this brand, any status
    pub count: u64,
    /// Sum of sold prices
    pub revenue: Decimal,
    /// Sum of realized profit
    pub profit: Decimal,
}

/// Per-platform figures over sold products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformStats {
    /// Platform as stored, or [`UNKNOWN_KEY`]
    pub platform: String,
    /// Sales made on the platform
    pub count: u64,
    /// Sum of sold prices
    pub revenue: Decimal,
}

impl PlatformStats {
    /// Revenue per sale, zero with no sales.
    #[must_use]
    pub fn average_sale(&self) -> Decimal {
        if self.count == 0 {
            Decimal::ZERO
        } else {
            self.revenue / Decimal::from(self.count)
        }
    }
}

/// Which sold products count in the average hold time divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoldTimeDivisor {
    /// Every sold product, including those missing a date (they add 0 days)
    #[default]
    AllSold,
    /// Only sold products with both a purchase and a sold date
    DatedOnly,
}

/// Product counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusDistribution {
    /// Held, not offered
    pub in_stock: u64,
    /// Offered for sale
    pub listed: u64,
    /// Sold
    pub sold: u64,
    /// Awaiting completion
    pub pending: u64,
}

/// Everything the analytics page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    /// Top brands by profit
    pub top_brands: Vec<BrandStats>,
    /// Top platforms by revenue
    pub top_platforms: Vec<PlatformStats>,
    /// Mean days between purchase and sale
    pub average_hold_days: f64,
    /// Percentage of products sold
    pub sell_through_rate: f64,
    /// Number of distinct brand groups, `Unknown` included
    pub total_brands: usize,
    /// Products currently listed
    pub active_listings: u64,
    /// Product counts per status
    pub status_distribution: StatusDistribution,
}

/// The stored string itself; only a missing or empty value becomes [`UNKNOWN_KEY`].
fn group_key(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_KEY)
        .to_string()
}

/// Groups every product by brand, in first-seen order.
#[must_use]
pub fn brand_breakdown(products: &[product::Model]) -> Vec<BrandStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<BrandStats> = Vec::new();

    for item in products {
        let key = group_key(item.brand.as_deref());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(BrandStats {
                brand: key,
                count: 0,
                revenue: Decimal::ZERO,
                profit: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        if item.is(ProductStatus::Sold) {
            group.revenue += item.sold_price_or_zero();
            group.profit += item.realized_profit();
        }
    }

    groups
}

/// The `limit` most profitable brands; ties keep first-seen order.
#[must_use]
pub fn top_brands(products: &[product::Model], limit: usize) -> Vec<BrandStats> {
    let mut brands = brand_breakdown(products);
    brands.sort_by(|a, b| b.profit.cmp(&a.profit));
    brands.truncate(limit);
    brands
}

/// Groups sold products by platform, in first-seen order.
#[must_use]
pub fn platform_breakdown(products: &[product::Model]) -> Vec<PlatformStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<PlatformStats> = Vec::new();

    for item in products.iter().filter(|p| p.is(ProductStatus::Sold)) {
        let key = group_key(item.platform.as_deref());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(PlatformStats {
                platform: key,
                count: 0,
                revenue: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        group.revenue += item.sold_price_or_zero();
    }

    groups
}

/// The `limit` highest-revenue platforms; ties keep first-seen order.
#[must_use]
pub fn top_platforms(products: &[product::Model], limit: usize) -> Vec<PlatformStats> {
    let mut platforms = platform_breakdown(products);
    platforms.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    platforms.truncate(limit);
    platforms
}

/// Mean hold time of sold products in fractional days.
///
/// Each product with a sold date contributes the exact millisecond difference
/// from its purchase date divided by 86,400,000. Returns 0 when the divisor
/// selected by `divisor` is zero.
#[must_use]
pub fn average_hold_days(products: &[product::Model], divisor: HoldTimeDivisor) -> f64 {
    let mut total_days = 0.0;
    let mut sold = 0_u32;
    let mut dated = 0_u32;

    for item in products.iter().filter(|p| p.is(ProductStatus::Sold)) {
        sold += 1;
        if let Some(sold_date) = item.sold_date {
            let millis = (sold_date - item.purchase_date).num_milliseconds();
            // Cast safety: hold times are far below 2^53 milliseconds.
            #[allow(clippy::cast_precision_loss)]
            let days = millis as f64 / MILLIS_PER_DAY;
            total_days += days;
            dated += 1;
        }
    }

    let count = match divisor {
        HoldTimeDivisor::AllSold => sold,
        HoldTimeDivisor::DatedOnly => dated,
    };

    if count == 0 {
        return 0.0;
    }
    total_days / f64::from(count)
}

/// Percentage of products that are sold, 0 for an empty collection.
#[must_use]
pub fn sell_through_rate(products: &[product::Model]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let sold = products
        .iter()
        .filter(|p| p.is(ProductStatus::Sold))
        .count();
    let rate = Decimal::from(sold) / Decimal::from(products.len()) * Decimal::ONE_HUNDRED;
    rate.to_f64().unwrap_or(0.0)
}

/// Counts products per status.
#[must_use]
pub fn status_distribution(products: &[product::Model]) -> StatusDistribution {
    products
        .iter()
        .fold(StatusDistribution::default(), |mut dist, item| {
            match item.status {
                ProductStatus::InStock => dist.in_stock += 1,
                ProductStatus::Listed => dist.listed += 1,
                ProductStatus::Sold => dist.sold += 1,
                ProductStatus::Pending => dist.pending += 1,
            }
            dist
        })
}

/// Builds the analytics page figures with the default hold time divisor.
#[must_use]
pub fn analytics_report(products: &[product::Model]) -> AnalyticsReport {
    let status_distribution = status_distribution(products);
    AnalyticsReport {
        top_brands: top_brands(products, TOP_BRANDS),
        top_platforms: top_platforms(products, TOP_PLATFORMS),
        average_hold_days: average_hold_days(products, HoldTimeDivisor::default()),
        sell_through_rate: sell_through_rate(products),
        total_brands: brand_breakdown(products).len(),
        active_listings: status_distribution.listed,
        status_distribution,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use chrono::Duration;

    fn branded(mut model: product::Model, brand: Option<&str>) -> product::Model {
        model.brand = brand.map(str::to_string);
        model
    }

    fn on_platform(mut model: product::Model, platform: Option<&str>) -> product::Model {
        model.platform = platform.map(str::to_string);
        model
    }

    #[test]
    fn test_nike_adidas_brand_ranking() {
        let nike = branded(sold_item(1, 17000, 28500), Some("Nike"));
        let mut adidas = branded(item(2, ProductStatus::Listed, 23000, 1), Some("Adidas"));
        adidas.selling_price = Some(Decimal::new(40000, 2));

        let ranking = top_brands(&[nike, adidas], TOP_BRANDS);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].brand, "Nike");
        assert_eq!(ranking[0].profit, Decimal::new(11500, 2));
        assert_eq!(ranking[1].brand, "Adidas");
        assert_eq!(ranking[1].profit, Decimal::ZERO);
        assert_eq!(ranking[1].count, 1);
    }

    #[test]
    fn test_missing_and_blank_brand_group_as_unknown() {
        let groups = brand_breakdown(&[
            branded(item(1, ProductStatus::InStock, 100, 1), None),
            branded(item(2, ProductStatus::InStock, 100, 1), Some("")),
        ]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].brand, UNKNOWN_KEY);
        assert_eq!(groups[0].count, 2);
    }

    #[test]
    fn test_brand_keys_are_not_trimmed() {
        let groups = brand_breakdown(&[
            branded(item(1, ProductStatus::InStock, 100, 1), Some("Nike")),
            branded(item(2, ProductStatus::InStock, 100, 1), Some("Nike ")),
            branded(item(3, ProductStatus::InStock, 100, 1), Some("  ")),
        ]);

        let keys: Vec<(&str, u64)> = groups.iter().map(|g| (g.brand.as_str(), g.count)).collect();
        assert_eq!(keys, vec![("Nike", 1), ("Nike ", 1), ("  ", 1)]);
    }

    #[test]
    fn test_brand_totals_cover_every_item() {
        let products = vec![
            branded(sold_item(1, 100, 300), Some("Nike")),
            branded(sold_item(2, 200, 150), Some("Adidas")),
            branded(item(3, ProductStatus::InStock, 100, 2), Some("Nike")),
            branded(item(4, ProductStatus::Pending, 100, 1), None),
            branded(sold_item(5, 50, 75), None),
        ];

        let groups = brand_breakdown(&products);

        let count: u64 = groups.iter().map(|g| g.count).sum();
        let revenue: Decimal = groups.iter().map(|g| g.revenue).sum();
        let sold_revenue: Decimal = products
            .iter()
            .filter(|p| p.is(ProductStatus::Sold))
            .map(product::Model::sold_price_or_zero)
            .sum();
        assert_eq!(count, 5);
        assert_eq!(revenue, sold_revenue);
    }

    #[test]
    fn test_brand_ties_keep_encounter_order() {
        let products: Vec<_> = ["Puma", "Asics", "Vans", "Reebok", "Fila", "Nike"]
            .iter()
            .zip(1..)
            .map(|(brand, id)| branded(sold_item(id, 100, 200), Some(*brand)))
            .collect();

        let ranking = top_brands(&products, TOP_BRANDS);

        let names: Vec<_> = ranking.iter().map(|b| b.brand.as_str()).collect();
        assert_eq!(names, vec!["Puma", "Asics", "Vans", "Reebok", "Fila"]);
    }

    #[test]
    fn test_platforms_only_count_sold_items() {
        let products = vec![
            on_platform(sold_item(1, 100, 26500), Some("StockX")),
            on_platform(sold_item(2, 100, 60000), Some("Grailed")),
            on_platform(sold_item(3, 100, 10000), Some("StockX")),
            on_platform(item(4, ProductStatus::Listed, 100, 1), Some("GOAT")),
            on_platform(sold_item(5, 100, 5000), None),
            on_platform(sold_item(6, 100, 1000), Some("eBay")),
        ];

        let ranking = top_platforms(&products, TOP_PLATFORMS);

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].platform, "Grailed");
        assert_eq!(ranking[1].platform, "StockX");
        assert_eq!(ranking[1].count, 2);
        assert_eq!(ranking[1].revenue, Decimal::new(36500, 2));
        assert_eq!(ranking[1].average_sale(), Decimal::new(18250, 2));
        assert_eq!(ranking[2].platform, UNKNOWN_KEY);
    }

    #[test]
    fn test_average_hold_days() {
        let mut fast = sold_item(1, 100, 200);
        fast.sold_date = Some(fast.purchase_date + Duration::days(10));
        let mut slow = sold_item(2, 100, 200);
        slow.sold_date = Some(slow.purchase_date + Duration::hours(20 * 24 + 12));

        let avg = average_hold_days(&[fast, slow], HoldTimeDivisor::AllSold);
        assert_eq!(avg, 15.25);
    }

    #[test]
    fn test_average_hold_days_divisor_choice() {
        let mut dated = sold_item(1, 100, 200);
        dated.sold_date = Some(dated.purchase_date + Duration::days(10));
        let mut undated = sold_item(2, 100, 200);
        undated.sold_date = None;
        let products = [dated, undated];

        assert_eq!(average_hold_days(&products, HoldTimeDivisor::AllSold), 5.0);
        assert_eq!(average_hold_days(&products, HoldTimeDivisor::DatedOnly), 10.0);
    }

    #[test]
    fn test_average_hold_days_without_sales() {
        let products = [item(1, ProductStatus::InStock, 100, 1)];
        assert_eq!(average_hold_days(&products, HoldTimeDivisor::AllSold), 0.0);
        assert_eq!(average_hold_days(&[], HoldTimeDivisor::DatedOnly), 0.0);
    }

    #[test]
    fn test_sell_through_rate() {
        assert_eq!(sell_through_rate(&[]), 0.0);
        assert_eq!(
            sell_through_rate(&[sold_item(1, 100, 200), sold_item(2, 100, 200)]),
            100.0
        );
        assert_eq!(
            sell_through_rate(&[
                sold_item(1, 100, 200),
                item(2, ProductStatus::InStock, 100, 1),
                item(3, ProductStatus::Listed, 100, 1),
                item(4, ProductStatus::Pending, 100, 1),
            ]),
            25.0
        );
    }

    #[test]
    fn test_analytics_report() {
        let products = vec![
            branded(sold_item(1, 100, 200), Some("Nike")),
            branded(item(2, ProductStatus::Listed, 100, 1), Some("Adidas")),
            branded(item(3, ProductStatus::Listed, 100, 1), None),
            branded(item(4, ProductStatus::InStock, 100, 1), Some("Nike")),
        ];

        let report = analytics_report(&products);

        assert_eq!(report.total_brands, 3);
        assert_eq!(report.active_listings, 2);
        assert_eq!(report.sell_through_rate, 25.0);
        assert_eq!(
            report.status_distribution,
            StatusDistribution {
                in_stock: 1,
                listed: 2,
                sold: 1,
                pending: 0,
            }
        );
        assert_eq!(report.top_brands[0].brand, "Nike");
    }
}
