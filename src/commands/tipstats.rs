use crate::bot::data::Context;
use crate::bot::error::Error;
use crate::commands::stats_commands;
use crate::services::messenger::DiscordMessenger;
use crate::services::tipstats::Invocation;

/// Display your personal tipping stats for this server
#[poise::command(prefix_command)]
pub async fn tipstats(ctx: Context<'_>) -> Result<(), Error> {
    let poise::Context::Prefix(prefix) = ctx else {
        return Ok(());
    };

    let messenger = DiscordMessenger::new(ctx.serenity_context().http.clone());
    let data = ctx.data();

    stats_commands(data, &messenger)
        .tipstats(&Invocation::from_message(prefix.msg))
        .await
}
