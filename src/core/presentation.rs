//! Per-item display values: profit, status badges and number formatting.
//!
//! These functions are framework-agnostic; the bot layer turns their output
//! into embed fields and colors.

use crate::entities::{ProductStatus, product};
use rust_decimal::Decimal;

/// Discord's cap on an embed field value
pub const EMBED_FIELD_LIMIT: usize = 1024;

/// Room kept for the "…and N more" line
const OVERFLOW_RESERVE: usize = 24;

/// Profit shown next to a single product.
///
/// Realized profit when a sold price is present, otherwise projected profit
/// from the asking price, otherwise zero.
#[must_use]
pub fn item_profit(item: &product::Model) -> Decimal {
    match (item.sold_price, item.selling_price) {
        (Some(sold), _) => sold - item.purchase_price,
        (None, Some(asking)) => asking - item.purchase_price,
        (None, None) => Decimal::ZERO,
    }
}

/// Display category for a product status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// In stock
    Blue,
    /// Listed
    Yellow,
    /// Sold
    Green,
    /// Pending
    Purple,
    /// Anything unrecognised
    Neutral,
}

impl StatusBadge {
    /// Maps an untrusted status string to a badge, falling back to `Neutral`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        ProductStatus::parse(raw).map_or(Self::Neutral, status_badge)
    }

    /// Embed color as `0xRRGGBB`.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Blue => 0x003B_82F6,
            Self::Yellow => 0x00EA_B308,
            Self::Green => 0x0022_C55E,
            Self::Purple => 0x00A8_55F7,
            Self::Neutral => 0x006B_7280,
        }
    }

    /// Emoji marker used in lists.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Blue => "🔵",
            Self::Yellow => "🟡",
            Self::Green => "🟢",
            Self::Purple => "🟣",
            Self::Neutral => "⚪",
        }
    }
}

/// Badge for a known status.
#[must_use]
pub const fn status_badge(status: ProductStatus) -> StatusBadge {
    match status {
        ProductStatus::InStock => StatusBadge::Blue,
        ProductStatus::Listed => StatusBadge::Yellow,
        ProductStatus::Sold => StatusBadge::Green,
        ProductStatus::Pending => StatusBadge::Purple,
    }
}

/// Human label, e.g. `in stock`.
#[must_use]
pub fn status_label(status: ProductStatus) -> String {
    status.as_str().replace('_', " ")
}

/// Formats money with an explicit sign, like `+$115.00` or `-$20.00`.
#[must_use]
pub fn format_signed_amount(amount: Decimal) -> String {
    let cents = amount.round_dp(2);
    if cents.is_sign_negative() && !cents.is_zero() {
        format!("-${:.2}", cents.abs())
    } else {
        format!("+${:.2}", cents.abs())
    }
}

/// Formats money without a sign for totals, like `$1,234.50`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}

/// Percentage with one decimal, like `28.8%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// One-line summary of a product for embed lists.
#[must_use]
pub fn format_product_line(item: &product::Model) -> String {
    let badge = status_badge(item.status);
    let brand = item
        .brand
        .as_deref()
        .map(|b| format!(" ({b})"))
        .unwrap_or_default();
    format!(
        "{} #{} **{}**{} | {} | {}",
        badge.emoji(),
        item.id,
        item.name,
        brand,
        status_label(item.status),
        format_signed_amount(item_profit(item)),
    )
}

/// Length as Discord counts it (UTF-16 code units).
fn field_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Joins list lines into one embed field value of at most [`EMBED_FIELD_LIMIT`].
///
/// Lines that do not fit are dropped from the end and replaced by a single
/// "…and N more" line. An empty list renders as `placeholder`.
#[must_use]
pub fn fit_field_lines(lines: &[String], placeholder: &str) -> String {
    if lines.is_empty() {
        return placeholder.to_string();
    }

    let joined = lines.join("\n");
    if field_len(&joined) <= EMBED_FIELD_LIMIT {
        return joined;
    }

    let budget = EMBED_FIELD_LIMIT - OVERFLOW_RESERVE;
    let mut value = String::new();
    let mut used = 0;
    let mut shown = 0;
    for line in lines {
        let separator = usize::from(shown > 0);
        let cost = separator + field_len(line);
        if used + cost > budget {
            break;
        }
        if shown > 0 {
            value.push('\n');
        }
        value.push_str(line);
        used += cost;
        shown += 1;
    }

    if shown > 0 {
        value.push('\n');
    }
    value.push_str(&format!("…and {} more", lines.len() - shown));
    value
}

/// Cuts free text to fit one embed field value, ending with `…` when cut.
#[must_use]
pub fn clip_field(text: &str) -> String {
    if field_len(text) <= EMBED_FIELD_LIMIT {
        return text.to_string();
    }
    let mut clipped = String::new();
    let mut used = 0;
    for ch in text.chars() {
        if used + ch.len_utf16() > EMBED_FIELD_LIMIT - 1 {
            break;
        }
        clipped.push(ch);
        used += ch.len_utf16();
    }
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_item_profit_prefers_sold_price() {
        let mut sold = sold_item(1, 17000, 28500);
        sold.selling_price = Some(Decimal::new(30000, 2));
        assert_eq!(item_profit(&sold), Decimal::new(11500, 2));
    }

    #[test]
    fn test_item_profit_falls_back_to_asking_price() {
        let mut listed = item(1, ProductStatus::Listed, 23000, 1);
        listed.selling_price = Some(Decimal::new(40000, 2));
        assert_eq!(item_profit(&listed), Decimal::new(17000, 2));

        let bare = item(2, ProductStatus::InStock, 23000, 1);
        assert_eq!(item_profit(&bare), Decimal::ZERO);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge(ProductStatus::InStock), StatusBadge::Blue);
        assert_eq!(status_badge(ProductStatus::Listed), StatusBadge::Yellow);
        assert_eq!(status_badge(ProductStatus::Sold), StatusBadge::Green);
        assert_eq!(status_badge(ProductStatus::Pending), StatusBadge::Purple);
    }

    #[test]
    fn test_badge_from_raw_defaults_to_neutral() {
        assert_eq!(StatusBadge::from_raw("sold"), StatusBadge::Green);
        assert_eq!(StatusBadge::from_raw("archived"), StatusBadge::Neutral);
        assert_eq!(StatusBadge::from_raw(""), StatusBadge::Neutral);
        assert_eq!(StatusBadge::Neutral.color(), 0x006B_7280);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(ProductStatus::InStock), "in stock");
        assert_eq!(status_label(ProductStatus::Pending), "pending");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount(Decimal::new(11500, 2)), "+$115.00");
        assert_eq!(format_signed_amount(Decimal::new(-2000, 2)), "-$20.00");
        assert_eq!(format_signed_amount(Decimal::ZERO), "+$0.00");
        assert_eq!(format_signed_amount(Decimal::new(-1, 3)), "+$0.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(123_450, 2)), "$1,234.50");
        assert_eq!(format_amount(Decimal::new(99, 0)), "$99.00");
        assert_eq!(format_amount(Decimal::new(-1_000_000, 0)), "-$1,000,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(28.75), "28.8%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_product_line() {
        let mut sold = sold_item(7, 17000, 28500);
        sold.name = "Air Jordan 1".to_string();
        sold.brand = Some("Nike".to_string());
        assert_eq!(
            format_product_line(&sold),
            "🟢 #7 **Air Jordan 1** (Nike) | sold | +$115.00"
        );
    }

    #[test]
    fn test_fit_field_lines_keeps_short_lists() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(fit_field_lines(&lines, "None."), "a\nb");
        assert_eq!(fit_field_lines(&[], "None."), "None.");
    }

    #[test]
    fn test_fit_field_lines_caps_long_lists() {
        let lines: Vec<String> = (1..=30)
            .map(|id| {
                let mut jordan = item(id, ProductStatus::Listed, 17000, 1);
                jordan.name = format!("Air Jordan 1 Retro High OG Chicago Lost and Found {id}");
                jordan.brand = Some("Nike".to_string());
                jordan.selling_price = Some(Decimal::new(35000, 2));
                format_product_line(&jordan)
            })
            .collect();
        assert!(lines.join("\n").encode_utf16().count() > EMBED_FIELD_LIMIT);

        let value = fit_field_lines(&lines, "No products found.");

        assert!(value.encode_utf16().count() <= EMBED_FIELD_LIMIT);
        let shown = value.lines().count() - 1;
        assert!(shown > 0);
        assert!(value.starts_with(&lines[0]));
        assert!(value.ends_with(&format!("…and {} more", 30 - shown)));
    }

    #[test]
    fn test_fit_field_lines_with_one_oversized_line() {
        let lines = vec!["x".repeat(2000)];
        assert_eq!(fit_field_lines(&lines, "None."), "…and 1 more");
    }

    #[test]
    fn test_clip_field() {
        assert_eq!(clip_field("short note"), "short note");

        let clipped = clip_field(&"é".repeat(1500));
        assert_eq!(clipped.encode_utf16().count(), EMBED_FIELD_LIMIT);
        assert!(clipped.ends_with('…'));
    }
}
