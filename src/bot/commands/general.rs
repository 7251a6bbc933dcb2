//! General Discord commands - ping and help.
//! These commands don't touch the database.

/// Text shown by `/help`
pub const HELP_TEXT: &str = "**ResaleLedger Help**\n\
Track what you buy, list and sell.\n\n\
**Reports**\n\
• `/dashboard [status] [search] [page]` - Totals plus a page of products.\n\
• `/inventory` - Items in stock and listed.\n\
• `/sold` - Sales history and recent sales.\n\
• `/profit` - Profitable and loss-making sales, margin, potential profit.\n\
• `/analytics` - Top brands and platforms, hold time, sell-through.\n\n\
**Product Commands**\n\
• `/product add <name> <purchase_price> [brand] [model] [size] [condition] [stock] [platform] [notes]` - Record a purchase.\n\
• `/product list <id> <price> [platform]` - List an item for sale.\n\
• `/product pending <id>` - Mark an item as pending sale.\n\
• `/product sell <id> <price> [platform]` - Record a sale.\n\
• `/product delete <id>` - Remove an item.\n\
• `/product show <id>` - Show every detail of one item.\n\n\
**Utility Commands**\n\
• `/ping` - Checks if the bot is responsive.\n\
• `/help` - Shows this help message.";

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::HELP_TEXT;
    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(HELP_TEXT).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
