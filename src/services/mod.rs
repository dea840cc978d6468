pub mod cooldown;
pub mod messenger;
pub mod store;
pub mod tipstats;
