use chrono::Utc;

use crate::bot::data::Context;
use crate::bot::error::Error;
use crate::commands::stats_commands;
use crate::services::messenger::DiscordMessenger;
use crate::services::tipstats::Invocation;

/// Display the biggest tips in this server
#[poise::command(prefix_command)]
pub async fn toptips(ctx: Context<'_>) -> Result<(), Error> {
    let poise::Context::Prefix(prefix) = ctx else {
        return Ok(());
    };

    let messenger = DiscordMessenger::new(ctx.serenity_context().http.clone());
    let data = ctx.data();

    stats_commands(data, &messenger)
        .toptips(&Invocation::from_message(prefix.msg), Utc::now())
        .await
}
