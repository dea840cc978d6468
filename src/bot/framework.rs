use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, GatewayIntents};
use sqlx::PgPool;
use tracing::{error, info};

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::commands;
use crate::config::Settings;
use crate::handlers::event_handler::event_handler;
use crate::services::cooldown;

pub async fn run(settings: Settings, pool: PgPool) -> Result<(), Error> {
    let data = Arc::new(Data::new(pool, settings.clone()));

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.command_prefix.clone()),
                case_insensitive_commands: true,
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command {} failed: {:?}", ctx.command().name, error);
                            let _ = ctx.say("Something went wrong, please try again later.").await;
                        }
                        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
                            let _ = ctx.say(format!("Invalid argument: {}", error)).await;
                        }
                        poise::FrameworkError::UnknownCommand { .. } => {
                            // Other bots share the prefix; stay quiet
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            ..Default::default()
        })
        .setup(|_ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as {}", ready.user.name);
                info!(
                    "Registered {} prefix commands with prefix '{}'",
                    framework.options().commands.len(),
                    data.settings.command_prefix
                );

                cooldown::spawn_cooldown_purger(data.cooldowns.clone());
                info!(
                    "Started cooldown purger ({:?} backend)",
                    data.settings.cooldown_backend
                );

                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&settings.discord_token, intents)
        .framework(framework)
        .await
        .map_err(Error::Serenity)?;

    info!("Starting Discord client...");
    client.start().await.map_err(Error::Serenity)
}
