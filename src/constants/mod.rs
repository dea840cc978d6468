pub mod commands;
pub mod cooldowns;
pub mod embeds;
