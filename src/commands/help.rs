use crate::bot::data::Context;
use crate::bot::error::Error;
use crate::constants::commands::{self, CommandInfo, ALL_COMMANDS};
use crate::constants::embeds;

/// Show the available commands
#[poise::command(prefix_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to show details for"] command: Option<String>,
) -> Result<(), Error> {
    let prefix = &ctx.data().settings.command_prefix;
    let banano = ctx.data().settings.branding.banano;

    let embed = match command.as_deref().map(commands::find) {
        Some(Some(info)) => embeds::branded_embed(banano)
            .title(format!("{}{}", prefix, info.name()))
            .description(command_details(info, prefix)),
        Some(None) => embeds::branded_embed(banano)
            .title("Unknown Command")
            .description(format!(
                "I don't know that command. Send `{}help` to see what I can do.",
                prefix
            )),
        None => embeds::branded_embed(banano)
            .title("Commands")
            .description(command_overview(ALL_COMMANDS, prefix)),
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// One line per command: trigger list and overview
pub fn command_overview(infos: &[CommandInfo], prefix: &str) -> String {
    infos
        .iter()
        .map(|info| format!("{} - {}", format_triggers(info, prefix), info.overview))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full description of one command
pub fn command_details(info: &CommandInfo, prefix: &str) -> String {
    embeds::section(&format_triggers(info, prefix), info.details)
}

fn format_triggers(info: &CommandInfo, prefix: &str) -> String {
    info.triggers
        .iter()
        .map(|t| format!("`{}{}`", prefix, t))
        .collect::<Vec<_>>()
        .join(", ")
}
