pub mod help;
pub mod tipstats;
pub mod toptips;

use std::sync::Arc;

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::constants::commands::{CommandInfo, HELP_INFO, TIPSTATS_INFO, TOPTIPS_INFO};
use crate::services::messenger::Messenger;
use crate::services::tipstats::StatsCommands;

/// All commands with their configured triggers applied
pub fn all() -> Vec<poise::Command<Arc<Data>, Error>> {
    vec![
        with_triggers(tipstats::tipstats(), &TIPSTATS_INFO),
        with_triggers(toptips::toptips(), &TOPTIPS_INFO),
        with_triggers(help::help(), &HELP_INFO),
    ]
}

fn with_triggers(
    mut command: poise::Command<Arc<Data>, Error>,
    info: &CommandInfo,
) -> poise::Command<Arc<Data>, Error> {
    command.name = info.name().to_string();
    command.aliases = info.aliases().map(String::from).collect();
    command.description = Some(info.overview.to_string());
    command.help_text = Some(info.details.to_string());
    command
}

/// Wire the stats flows to the bot's shared state
pub(crate) fn stats_commands<'a>(data: &'a Data, messenger: &'a dyn Messenger) -> StatsCommands<'a> {
    StatsCommands {
        store: data.store.as_ref(),
        cooldowns: data.cooldowns.as_ref(),
        messenger,
        branding: &data.settings.branding,
        command_prefix: &data.settings.command_prefix,
    }
}
