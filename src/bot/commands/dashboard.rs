//! Report commands - one per dashboard page.
//!
//! Each command reads the product collection through the shared repository,
//! runs the pure aggregators from `core`, and renders the result as an embed.
//! Reports always aggregate over the full collection, never a single page.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            analytics, inventory,
            presentation::{
                self, StatusBadge, fit_field_lines, format_amount, format_percent,
                format_product_line, format_signed_amount,
            },
            profit, repository::PAGE_SIZE, sales, stats,
        },
        entities::ProductStatus,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::debug;

    /// Items shown in the profitable and loss lists
    const PROFIT_LIST_LIMIT: usize = 5;

    /// Dashboard status tab.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum StatusTab {
        #[name = "In stock"]
        InStock,
        #[name = "Listed"]
        Listed,
        #[name = "Sold"]
        Sold,
        #[name = "Pending"]
        Pending,
    }

    impl From<StatusTab> for ProductStatus {
        fn from(tab: StatusTab) -> Self {
            match tab {
                StatusTab::InStock => Self::InStock,
                StatusTab::Listed => Self::Listed,
                StatusTab::Sold => Self::Sold,
                StatusTab::Pending => Self::Pending,
            }
        }
    }

    /// Shows the dashboard totals and a page of products.
    ///
    /// With a search term, every matching product is shown instead of a page.
    #[poise::command(slash_command)]
    pub async fn dashboard(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only show products in this status"] status: Option<StatusTab>,
        #[description = "Filter products by name"] search: Option<String>,
        #[description = "Page number, starting at 1"]
        #[min = 1]
        page: Option<u64>,
    ) -> Result<()> {
        let repository = &ctx.data().repository;

        let all = repository.fetch_all().await?;
        let totals = stats::dashboard_stats(&all);

        let page_number = page.unwrap_or(1).max(1);
        let offset = (page_number - 1) * PAGE_SIZE;
        let search = search.unwrap_or_default();
        let listing = repository.fetch_products(&search, offset).await?;
        debug!(
            "Dashboard page {} has {} of {} products",
            page_number,
            listing.items.len(),
            listing.total_count
        );

        let lines: Vec<String> =
            inventory::filter_by_status(&listing.items, status.map(ProductStatus::from))
                .into_iter()
                .map(format_product_line)
                .collect();

        let footer = if search.trim().is_empty() {
            let more = listing
                .next_offset
                .map_or(String::new(), |_| format!(" | /dashboard page:{}", page_number + 1));
            format!("Page {page_number} | {} products{more}", listing.total_count)
        } else {
            format!("{} matches for \"{}\"", listing.total_count, search.trim())
        };

        let embed = serenity::CreateEmbed::default()
            .title("**Resale Dashboard**")
            .color(0x0058_65F2)
            .fields(vec![
                (
                    "Total Investment".to_string(),
                    format_amount(totals.total_investment),
                    true,
                ),
                (
                    "Inventory Value".to_string(),
                    format_amount(totals.total_inventory_value),
                    true,
                ),
                (
                    "Total Profit".to_string(),
                    format_signed_amount(totals.total_profit),
                    true,
                ),
                (
                    "Items Sold".to_string(),
                    totals.total_sold_items.to_string(),
                    true,
                ),
                (
                    "Units In Stock".to_string(),
                    totals.total_in_stock.to_string(),
                    true,
                ),
                (
                    "Pending Value".to_string(),
                    format_amount(totals.total_pending_value),
                    true,
                ),
                (
                    "Products".to_string(),
                    fit_field_lines(&lines, "No products found."),
                    false,
                ),
            ])
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows items currently held, in stock or listed.
    #[poise::command(slash_command)]
    pub async fn inventory(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let products = ctx.data().repository.fetch_all().await?;
        let summary = inventory::inventory_summary(&products);

        let held: Vec<String> = products
            .iter()
            .filter(|p| p.is(ProductStatus::InStock) || p.is(ProductStatus::Listed))
            .take(15)
            .map(|p| {
                let asking = p
                    .selling_price
                    .map_or_else(|| "not listed".to_string(), format_amount);
                format!(
                    "{} | cost {} x{} | {}",
                    format_product_line(p),
                    format_amount(p.purchase_price),
                    p.stock,
                    asking
                )
            })
            .collect();

        let embed = serenity::CreateEmbed::default()
            .title("**Inventory**")
            .color(StatusBadge::Blue.color())
            .fields(vec![
                ("Total Items".to_string(), summary.total_items.to_string(), true),
                ("In Stock".to_string(), summary.in_stock.to_string(), true),
                ("Listed".to_string(), summary.listed.to_string(), true),
                (
                    "Items".to_string(),
                    fit_field_lines(&held, "Nothing in inventory."),
                    false,
                ),
            ]);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows sales history and the most recent sales.
    #[poise::command(slash_command)]
    pub async fn sold(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let products = ctx.data().repository.fetch_all().await?;
        let summary = sales::sales_summary(&products, sales::RECENT_SALES);

        let recent: Vec<String> = summary
            .recent_sales
            .iter()
            .map(|p| {
                let date = p
                    .sold_date
                    .map_or_else(|| "undated".to_string(), |d| d.format("%Y-%m-%d").to_string());
                let platform = p.platform.as_deref().unwrap_or("-");
                format!("{} | {} | {}", format_product_line(p), platform, date)
            })
            .collect();

        let embed = serenity::CreateEmbed::default()
            .title("**Sales History**")
            .color(StatusBadge::Green.color())
            .fields(vec![
                ("Items Sold".to_string(), summary.sold_count.to_string(), true),
                ("Revenue".to_string(), format_amount(summary.revenue), true),
                ("Cost".to_string(), format_amount(summary.cost), true),
                (
                    "Net Profit".to_string(),
                    format_signed_amount(summary.net_profit),
                    true,
                ),
                (
                    "Average Profit".to_string(),
                    format_signed_amount(summary.average_profit),
                    true,
                ),
                (
                    "Recent Sales".to_string(),
                    fit_field_lines(&recent, "No sales yet."),
                    false,
                ),
            ]);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows profitable and loss-making sales with margins.
    #[poise::command(slash_command)]
    pub async fn profit(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let products = ctx.data().repository.fetch_all().await?;
        let totals = stats::dashboard_stats(&products);
        let report = profit::profit_report(&products, &totals);

        let describe = |items: &[crate::entities::ProductModel]| -> Vec<String> {
            items
                .iter()
                .take(PROFIT_LIST_LIMIT)
                .map(|p| {
                    format!(
                        "#{} **{}** | {}",
                        p.id,
                        p.name,
                        format_signed_amount(presentation::item_profit(p))
                    )
                })
                .collect()
        };

        let embed = serenity::CreateEmbed::default()
            .title("**Profit Analysis**")
            .color(StatusBadge::Purple.color())
            .fields(vec![
                (
                    "Total Profit".to_string(),
                    format_signed_amount(totals.total_profit),
                    true,
                ),
                (
                    "Average Profit".to_string(),
                    format_signed_amount(report.average_profit),
                    true,
                ),
                (
                    "Profit Margin".to_string(),
                    format_percent(report.profit_margin),
                    true,
                ),
                (
                    "Potential Profit".to_string(),
                    format_signed_amount(report.potential_profit),
                    true,
                ),
                (
                    format!("Profitable Items ({})", report.profitable_items.len()),
                    fit_field_lines(&describe(&report.profitable_items), "None yet."),
                    false,
                ),
                (
                    format!("Loss Items ({})", report.loss_items.len()),
                    fit_field_lines(&describe(&report.loss_items), "None."),
                    false,
                ),
            ]);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows top brands, top platforms, hold time and sell-through rate.
    #[poise::command(slash_command)]
    pub async fn analytics(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let products = ctx.data().repository.fetch_all().await?;
        let report = analytics::analytics_report(&products);

        let brands: Vec<String> = report
            .top_brands
            .iter()
            .enumerate()
            .map(|(rank, b)| {
                format!(
                    "{}. **{}** | {} items | revenue {} | profit {}",
                    rank + 1,
                    b.brand,
                    b.count,
                    format_amount(b.revenue),
                    format_signed_amount(b.profit)
                )
            })
            .collect();

        let platforms: Vec<String> = report
            .top_platforms
            .iter()
            .enumerate()
            .map(|(rank, p)| {
                format!(
                    "{}. **{}** | {} sales | revenue {} | avg {}",
                    rank + 1,
                    p.platform,
                    p.count,
                    format_amount(p.revenue),
                    format_amount(p.average_sale())
                )
            })
            .collect();

        let dist = report.status_distribution;
        let distribution = format!(
            "{} in stock: {}\n{} listed: {}\n{} sold: {}\n{} pending: {}",
            StatusBadge::Blue.emoji(),
            dist.in_stock,
            StatusBadge::Yellow.emoji(),
            dist.listed,
            StatusBadge::Green.emoji(),
            dist.sold,
            StatusBadge::Purple.emoji(),
            dist.pending
        );

        let embed = serenity::CreateEmbed::default()
            .title("**Analytics**")
            .color(StatusBadge::Yellow.color())
            .fields(vec![
                (
                    "Avg Hold Time".to_string(),
                    format!("{:.1} days", report.average_hold_days),
                    true,
                ),
                (
                    "Sell-through Rate".to_string(),
                    format_percent(report.sell_through_rate),
                    true,
                ),
                ("Brands".to_string(), report.total_brands.to_string(), true),
                (
                    "Active Listings".to_string(),
                    report.active_listings.to_string(),
                    true,
                ),
                (
                    "Top Brands".to_string(),
                    fit_field_lines(&brands, "No data."),
                    false,
                ),
                (
                    "Top Platforms".to_string(),
                    fit_field_lines(&platforms, "No sales yet."),
                    false,
                ),
                ("Status Distribution".to_string(), distribution, false),
            ]);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
