mod stats;
mod user;

pub use stats::{Stats, TopTip, TopTipWindow};
pub use user::User;
