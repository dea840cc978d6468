use std::env;

use crate::constants::embeds::{BANANO_SYMBOL, NANO_SYMBOL};

/// Where command cooldown markers are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownBackend {
    Memory,
    Postgres,
}

impl CooldownBackend {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(CooldownBackend::Memory),
            "postgres" | "postgresql" => Ok(CooldownBackend::Postgres),
            other => Err(format!("Unknown COOLDOWN_BACKEND '{}'", other)),
        }
    }
}

/// Currency branding used when rendering amounts and embeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub banano: bool,
    pub currency_symbol: String,
}

impl Branding {
    pub fn new(banano: bool, currency_symbol: Option<String>) -> Self {
        let default_symbol = if banano { BANANO_SYMBOL } else { NANO_SYMBOL };
        let currency_symbol = currency_symbol.unwrap_or_else(|| default_symbol.to_string());

        Self {
            banano,
            currency_symbol,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub discord_token: String,
    pub database_url: String,
    /// Prefix for text commands, also quoted in the registration prompt
    pub command_prefix: String,
    pub branding: Branding,
    pub cooldown_backend: CooldownBackend,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| "DISCORD_TOKEN environment variable not set")?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable not set")?;

        let command_prefix = env::var("COMMAND_PREFIX")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "!".to_string());

        let banano = env::var("BANANO")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        let currency_symbol = env::var("CURRENCY_SYMBOL").ok().filter(|s| !s.is_empty());

        let cooldown_backend = match env::var("COOLDOWN_BACKEND") {
            Ok(value) => CooldownBackend::parse(&value)?,
            Err(_) => CooldownBackend::Memory,
        };

        Ok(Self {
            discord_token,
            database_url,
            command_prefix,
            branding: Branding::new(banano, currency_symbol),
            cooldown_backend,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
