//! Discord bot setup and event routing.

use log::{debug, error, info};
use poise::{
    Framework, FrameworkError, FrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::chat::{handle_button, handle_message, topic_commands};
use crate::config::Config;
use crate::dispatch::Responder;
use crate::error::{BotError, Result};
use crate::keepalive;
use crate::keywords::{KeywordStore, builtin_keywords};

/// Shared state handed to every handler.
pub struct Data {
    responder: Responder,
}

impl Data {
    #[must_use]
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    #[must_use]
    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

fn load_keywords(config: &Config) -> Result<KeywordStore> {
    match &config.keywords_file {
        Some(path) => KeywordStore::from_json_file(path),
        None => {
            debug!("No KEYWORDS_FILE set, using built-in keywords");
            builtin_keywords()
        }
    }
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    let store = load_keywords(&config)?;
    info!("Loaded {} keywords", store.len());
    let responder = Responder::new(store, config.matching)?;

    if config.keepalive_enabled {
        keepalive::start(config.port).await;
    }

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: topic_commands(),
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                debug!("Registering commands globally");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully");
                Ok(Data::new(responder))
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    match event {
        FullEvent::Message { new_message } => {
            let bot_user_id = ctx.cache.current_user().id;
            handle_message(ctx, new_message, data, bot_user_id).await
        }
        FullEvent::InteractionCreate { interaction } => match interaction.as_message_component() {
            Some(component) => handle_button(ctx, component, data).await,
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {}", ctx.command().name, error);
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to send error message: {e}");
            }
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
