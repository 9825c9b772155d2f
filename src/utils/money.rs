//! Monetary arithmetic and Indian currency formatting

use bigdecimal::{BigDecimal, RoundingMode, Signed, Zero};

use crate::types::{Discount, DiscountKind};

/// Default currency symbol for rendered amounts
pub const RUPEE_SYMBOL: &str = "₹";

/// `base * rate_percent / 100`
pub fn percent_of(base: &BigDecimal, rate_percent: &BigDecimal) -> BigDecimal {
    (base * rate_percent) / BigDecimal::from(100)
}

/// Resolve a discount against the base it applies to.
///
/// Flat amounts are returned as entered, even when they exceed `base`.
pub fn resolve_discount(base: &BigDecimal, discount: &Discount) -> BigDecimal {
    match discount.kind {
        DiscountKind::Percentage => percent_of(base, &discount.value),
        DiscountKind::Amount => discount.value.clone(),
    }
}

/// Round to `scale` decimal places, halves away from zero
pub fn round_half_away(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfUp)
}

/// Plain two-decimal rendering without grouping or symbol, e.g. `-1234.50`
pub fn plain_amount(amount: &BigDecimal) -> String {
    let (negative, integer, fraction) = split_paise(amount);
    format!("{}{}.{}", if negative { "-" } else { "" }, integer, fraction)
}

/// Format with the rupee symbol and Indian digit grouping: `₹1,23,456.78`.
///
/// A missing amount formats as zero.
pub fn format_currency(amount: Option<&BigDecimal>) -> String {
    format_currency_with(RUPEE_SYMBOL, amount)
}

/// [`format_currency`] with a caller-chosen symbol
pub fn format_currency_with(symbol: &str, amount: Option<&BigDecimal>) -> String {
    let zero = BigDecimal::zero();
    let (negative, integer, fraction) = split_paise(amount.unwrap_or(&zero));
    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        group_indian(&integer),
        fraction
    )
}

/// Format with an explicit sign, as the round-off line is shown: `+₹0.40`
pub fn format_signed(symbol: &str, amount: &BigDecimal) -> String {
    let rounded = round_half_away(amount, 2);
    if rounded.is_negative() {
        format_currency_with(symbol, Some(&rounded))
    } else {
        format!("+{}", format_currency_with(symbol, Some(&rounded)))
    }
}

/// Split into sign, integer digits and two paise digits after rounding
fn split_paise(amount: &BigDecimal) -> (bool, String, String) {
    let rounded = round_half_away(amount, 2);
    let negative = rounded.is_negative();
    let (digits, _) = rounded.abs().as_bigint_and_exponent();
    let digits = format!("{:0>3}", digits.to_string());
    let (integer, fraction) = digits.split_at(digits.len() - 2);
    (negative, integer.to_string(), fraction.to_string())
}

/// Lakh/crore grouping: last three digits, then pairs
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
