mod settings;

pub use settings::{Branding, CooldownBackend, Settings};
