use serenity::all::{Colour, CreateEmbed};

// ============================================================================
// Branding
// ============================================================================

/// Banano yellow
pub const BANANO_COLOR: Colour = Colour::new(0xFBDD11);

/// Nano uses Discord's dark blue
pub const NANO_COLOR: Colour = Colour::DARK_BLUE;

pub const BANANO_ICON_URL: &str =
    "https://github.com/bbedward/Graham_Nano_Tip_Bot/raw/master/assets/banano_logo.png";

pub const NANO_ICON_URL: &str =
    "https://github.com/bbedward/Graham_Nano_Tip_Bot/raw/master/assets/nano_logo.png";

pub const BANANO_SYMBOL: &str = "BAN";

pub const NANO_SYMBOL: &str = "Ӿ";

/// Embed colour for the configured currency
pub fn brand_color(banano: bool) -> Colour {
    if banano {
        BANANO_COLOR
    } else {
        NANO_COLOR
    }
}

/// Author icon for the configured currency
pub fn brand_icon(banano: bool) -> &'static str {
    if banano {
        BANANO_ICON_URL
    } else {
        NANO_ICON_URL
    }
}

// ============================================================================
// Reactions
// ============================================================================

/// Added to a command message that was rejected
pub const REJECTED_EMOJI: char = '\u{274C}';

/// Added to a command message that hit its cooldown
pub const COOLDOWN_EMOJI: char = '\u{23F2}';

// ============================================================================
// Embed Builders
// ============================================================================

/// Create an embed in the configured currency's colour
pub fn branded_embed(banano: bool) -> CreateEmbed {
    CreateEmbed::new().color(brand_color(banano))
}

/// Format a section with a header and content
pub fn section(header: &str, content: &str) -> String {
    format!("**{}**\n{}", header, content)
}

/// Wrap text in a code block
pub fn code_block(content: &str) -> String {
    format!("```{}```", content)
}
