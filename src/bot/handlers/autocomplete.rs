//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from values already stored in the `products` table so
//! brands and platforms stay consistently spelled.

use crate::{bot::BotData, errors::Error};
use tracing::warn;

/// Discord's limit on autocomplete choices
const MAX_SUGGESTIONS: usize = 25;

/// Keeps the values containing `partial` (case-insensitive), up to the Discord limit.
#[must_use]
pub fn matching_suggestions(values: Vec<String>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    values
        .into_iter()
        .filter(|v| v.to_lowercase().contains(&partial_lower))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests brands already used by stored products.
pub async fn autocomplete_brand(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    match ctx.data().repository.distinct_brands().await {
        Ok(brands) => matching_suggestions(brands, partial),
        Err(e) => {
            warn!("Brand autocomplete failed: {}", e);
            Vec::new()
        }
    }
}

/// Suggests sale platforms already used by stored products.
pub async fn autocomplete_platform(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    match ctx.data().repository.distinct_platforms().await {
        Ok(platforms) => matching_suggestions(platforms, partial),
        Err(e) => {
            warn!("Platform autocomplete failed: {}", e);
            Vec::new()
        }
    }
}
