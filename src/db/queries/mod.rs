pub mod cooldown;
pub mod stats;
pub mod user;
