/// User-facing documentation for a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    /// Words that invoke the command; the first one is its name
    pub triggers: &'static [&'static str],
    pub overview: &'static str,
    pub details: &'static str,
}

impl CommandInfo {
    pub fn name(&self) -> &'static str {
        self.triggers.first().copied().unwrap_or_default()
    }

    /// Triggers other than the command name
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.triggers.iter().skip(1).copied()
    }

    pub fn matches(&self, word: &str) -> bool {
        self.triggers.iter().any(|t| t.eq_ignore_ascii_case(word))
    }
}

pub const TIPSTATS_INFO: CommandInfo = CommandInfo {
    triggers: &["tipstats"],
    overview: "Display your personal tipping stats for a specific server.",
    details: "This will display your personal tipping statistics from the server you send the command from. This command can't be used in DM",
};

pub const TOPTIPS_INFO: CommandInfo = CommandInfo {
    triggers: &["toptips"],
    overview: "Display biggest tips for a specific server.",
    details: "This will display the biggest tip of all time, of the current month, and of the day for the current server. This command can't be used in DM",
};

pub const HELP_INFO: CommandInfo = CommandInfo {
    triggers: &["help"],
    overview: "Show the available commands.",
    details: "Lists every command with a short overview. Pass a command name to see its details.",
};

/// All documented commands, in the order `help` lists them
pub const ALL_COMMANDS: &[CommandInfo] = &[TIPSTATS_INFO, TOPTIPS_INFO, HELP_INFO];

/// Find the documentation for a trigger word
pub fn find(word: &str) -> Option<&'static CommandInfo> {
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    ALL_COMMANDS.iter().find(|info| info.matches(word))
}
