//! Display formatting for prices, discounts and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency sign appended to every amount.
pub const CURRENCY_SIGN: &str = "₽";

/// `1299` -> `"1299 ₽"`.
#[must_use]
pub fn format_price(amount: u64) -> String {
    format!("{amount} {CURRENCY_SIGN}")
}

/// `35` -> `"-35%"`.
#[must_use]
pub fn format_discount(percent: u8) -> String {
    format!("-{percent}%")
}

/// One decimal place, e.g. `4.2`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Header badge text for the cart button; hidden when the cart is empty.
#[must_use]
pub fn cart_badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}
