use serenity::all::UserId;

/// Format a user mention
pub fn mention_user(user_id: UserId) -> String {
    format!("<@{}>", user_id)
}

/// Format a currency amount, keeping one decimal place on whole numbers (`3.0`, `12.5`)
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

/// Format an amount followed by the currency symbol
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{} {}", format_amount(amount), symbol)
}
