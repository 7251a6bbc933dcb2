//! Product Discord commands - `/product` and its subcommands.
//!
//! These commands record purchases and move products through their
//! lifecycle (listed, pending, sold). Prices are taken as text and parsed
//! into exact decimals.

use crate::core::product::is_storable_amount;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a user-entered price like `265`, `265.00` or `$265.00`.
///
/// Returns `None` for anything that is not an amount between zero and
/// 99,999,999.99.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    Decimal::from_str(&digits)
        .ok()
        .map(|d| d.round_dp(2))
        .filter(|d| is_storable_amount(*d))
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::parse_price;
    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            presentation::{
                clip_field, format_amount, format_signed_amount, item_profit, status_badge,
                status_label,
            },
            product::{self, NewProduct},
        },
        errors::{Error, Result},
    };
    use chrono::Utc;
    use poise::serenity_prelude as serenity;

    async fn reply_invalid_price(ctx: poise::Context<'_, BotData, Error>, raw: &str) -> Result<()> {
        ctx.say(format!(
            "❌ '{raw}' is not a valid price. Use an amount from 0 to 99,999,999.99, like 265.00."
        ))
        .await?;
        Ok(())
    }

    /// Parent command for recording purchases and sales.
    #[poise::command(
        slash_command,
        rename = "product",
        subcommands(
            "product_add",
            "product_list",
            "product_pending",
            "product_sell",
            "product_delete",
            "product_show"
        )
    )]
    pub async fn product_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Product command. Available subcommands:\n\
            `/product add` - Record a purchase\n\
            `/product list` - List an item for sale or change its price\n\
            `/product pending` - Mark an item as pending sale\n\
            `/product sell` - Record a sale\n\
            `/product delete` - Remove an item\n\
            `/product show` - Show one item";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Records a newly purchased item as in stock.
    #[poise::command(slash_command, rename = "add")]
    pub async fn product_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item name (e.g., 'Air Jordan 1 Retro High OG')"] name: String,
        #[description = "Price paid per unit (e.g., 170.00)"] purchase_price: String,
        #[description = "Brand"]
        #[autocomplete = "autocomplete::autocomplete_brand"]
        brand: Option<String>,
        #[description = "Model"] model: Option<String>,
        #[description = "Size"] size: Option<String>,
        #[description = "Condition. Defaults to 'new'."] condition: Option<String>,
        #[description = "Units bought. Defaults to 1."]
        #[min = 0]
        stock: Option<i32>,
        #[description = "Where it will be sold"]
        #[autocomplete = "autocomplete::autocomplete_platform"]
        platform: Option<String>,
        #[description = "Notes"] notes: Option<String>,
    ) -> Result<()> {
        let Some(price) = parse_price(&purchase_price) else {
            return reply_invalid_price(ctx, &purchase_price).await;
        };

        let mut new = NewProduct::new(name, price, Utc::now().naive_utc());
        new.brand = brand;
        new.model_name = model;
        new.size = size;
        new.condition = condition;
        new.stock = stock.unwrap_or(1);
        new.platform = platform;
        new.notes = notes;

        let db = ctx.data().repository.connection();
        match product::create_product(db, new).await {
            Ok(created) => {
                ctx.say(format!(
                    "✅ Added #{} **{}** ({} x{}).",
                    created.id,
                    created.name,
                    format_amount(created.purchase_price),
                    created.stock
                ))
                .await?;
            }
            Err(e @ (Error::Config { .. } | Error::InvalidAmount { .. } | Error::InvalidStock { .. })) => {
                ctx.say(format!("❌ {e}")).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Lists an item for sale, or changes the asking price of a listed item.
    #[poise::command(slash_command, rename = "list")]
    pub async fn product_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] id: i64,
        #[description = "Asking price (e.g., 350.00)"] price: String,
        #[description = "Where it is listed"]
        #[autocomplete = "autocomplete::autocomplete_platform"]
        platform: Option<String>,
    ) -> Result<()> {
        let Some(price) = parse_price(&price) else {
            return reply_invalid_price(ctx, &price).await;
        };

        let db = ctx.data().repository.connection();
        let listed = product::list_for_sale(db, id, price, platform).await?;

        let where_listed = listed
            .platform
            .as_deref()
            .map(|p| format!(" on {p}"))
            .unwrap_or_default();
        ctx.say(format!(
            "✅ #{} **{}** listed for {}{} (projected {}).",
            listed.id,
            listed.name,
            format_amount(price),
            where_listed,
            format_signed_amount(item_profit(&listed))
        ))
        .await?;
        Ok(())
    }

    /// Marks an item as pending sale.
    #[poise::command(slash_command, rename = "pending")]
    pub async fn product_pending(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] id: i64,
    ) -> Result<()> {
        let db = ctx.data().repository.connection();
        let pending = product::mark_pending(db, id).await?;
        ctx.say(format!("✅ #{} **{}** is now pending.", pending.id, pending.name))
            .await?;
        Ok(())
    }

    /// Records the sale of one unit.
    #[poise::command(slash_command, rename = "sell")]
    pub async fn product_sell(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] id: i64,
        #[description = "Price it sold for (e.g., 265.00)"] price: String,
        #[description = "Where it sold"]
        #[autocomplete = "autocomplete::autocomplete_platform"]
        platform: Option<String>,
    ) -> Result<()> {
        let Some(price) = parse_price(&price) else {
            return reply_invalid_price(ctx, &price).await;
        };

        let db = ctx.data().repository.connection();
        let sold = product::mark_sold(db, id, price, platform, Utc::now().naive_utc()).await?;

        ctx.say(format!(
            "✅ Sold #{} **{}** for {} ({}).",
            sold.id,
            sold.name,
            format_amount(price),
            format_signed_amount(item_profit(&sold))
        ))
        .await?;
        Ok(())
    }

    /// Permanently removes an item.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn product_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] id: i64,
    ) -> Result<()> {
        let db = ctx.data().repository.connection();
        product::delete_product(db, id).await?;
        ctx.say(format!("✅ Item #{id} has been deleted.")).await?;
        Ok(())
    }

    /// Shows every detail of one item.
    #[poise::command(slash_command, rename = "show")]
    pub async fn product_show(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item id"] id: i64,
    ) -> Result<()> {
        let Some(item) = ctx.data().repository.get_by_id(id).await? else {
            ctx.say(format!("❌ Item #{id} not found.")).await?;
            return Ok(());
        };

        let optional = |value: Option<&str>| value.unwrap_or("-").to_string();
        let badge = status_badge(item.status);

        let mut fields = vec![
            ("Status".to_string(), format!("{} {}", badge.emoji(), status_label(item.status)), true),
            ("Brand".to_string(), optional(item.brand.as_deref()), true),
            ("Model".to_string(), optional(item.model_name.as_deref()), true),
            ("Size".to_string(), optional(item.size.as_deref()), true),
            ("Condition".to_string(), item.condition.clone(), true),
            ("Stock".to_string(), item.stock.to_string(), true),
            ("Purchase Price".to_string(), format_amount(item.purchase_price), true),
            (
                "Purchased".to_string(),
                item.purchase_date.format("%Y-%m-%d").to_string(),
                true,
            ),
            ("Platform".to_string(), optional(item.platform.as_deref()), true),
        ];
        if let Some(asking) = item.selling_price {
            fields.push(("Asking Price".to_string(), format_amount(asking), true));
        }
        if let Some(sold_price) = item.sold_price {
            fields.push(("Sold Price".to_string(), format_amount(sold_price), true));
        }
        if let Some(sold_date) = item.sold_date {
            fields.push(("Sold".to_string(), sold_date.format("%Y-%m-%d").to_string(), true));
        }
        fields.push(("Profit".to_string(), format_signed_amount(item_profit(&item)), true));
        if let Some(notes) = item.notes.as_deref() {
            fields.push(("Notes".to_string(), clip_field(notes), false));
        }

        let embed = serenity::CreateEmbed::default()
            .title(format!("#{} {}", item.id, item.name))
            .color(badge.color())
            .fields(fields);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
