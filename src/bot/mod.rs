//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `ResaleLedger`: the report
//! commands, product lifecycle commands, autocomplete handlers, and the
//! framework setup that owns the shared [`BotData`].

/// Discord command implementations (dashboard pages, product, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    core::repository::ProductRepository,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Product access, constructed once at startup
    pub repository: ProductRepository,
}

impl BotData {
    /// Creates a new `BotData` around the repository.
    #[must_use]
    pub const fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every slash command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::dashboard(),
        commands::inventory(),
        commands::sold(),
        commands::profit(),
        commands::analytics(),
        commands::product_manage(),
    ]
}

/// Builds the poise framework and runs the Discord client until it stops.
///
/// # Errors
/// Returns `Error::Discord` if the client cannot be created or the gateway
/// connection fails.
#[instrument(skip(token, repository))]
pub async fn run_bot(token: String, repository: ProductRepository) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(repository))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    Ok(())
}

pub use commands::*;
pub use handlers::*;
