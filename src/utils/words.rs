//! Amount in words using the Indian numbering system (crore, lakh)

use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};

use crate::utils::money::round_half_away;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;

/// Convert an amount to words for the "amount chargeable in words" line.
///
/// `150000` becomes `"One Lakh Fifty Thousand Rupees"` and `12.5` becomes
/// `"Twelve Rupees and Fifty Paise"`. Paise are rounded to two places.
///
/// The sign follows the rounded amount, so `-0.4` reads
/// `"Minus Zero Rupees and Forty Paise"` while `-0.001` reads `"Zero Rupees"`.
/// There is no unit above crore: the crore count is itself spelled out, so
/// `10^21` reads `"One Crore Crore Crore Rupees"`.
pub fn amount_in_words(amount: &BigDecimal) -> String {
    let rounded = round_half_away(amount, 2);
    let magnitude = rounded.abs();
    let rupees = magnitude.with_scale(0);
    let paise = ((&magnitude - &rupees) * BigDecimal::from(100))
        .to_u64()
        .unwrap_or(0);

    let mut words = if rupees.is_zero() {
        "Zero".to_string()
    } else {
        integer_in_words(&rupees)
    };
    words.push_str(" Rupees");

    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&below_hundred(paise));
        words.push_str(" Paise");
    }

    if rounded.is_negative() {
        format!("Minus {}", words)
    } else {
        words
    }
}

/// Words for a positive whole number; the crore count recurses
fn integer_in_words(value: &BigDecimal) -> String {
    let crore_unit = BigDecimal::from(CRORE);
    let crores = (value / &crore_unit).with_scale(0);
    let below_crore = (value - &crores * &crore_unit).to_u64().unwrap_or(0);

    let mut parts = Vec::new();
    if !crores.is_zero() {
        parts.push(format!("{} Crore", integer_in_words(&crores)));
    }

    let lakhs = below_crore / 100_000;
    let thousands = (below_crore / 1_000) % 100;
    let hundreds = (below_crore / 100) % 10;
    let rest = below_crore % 100;

    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakhs)));
    }
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousands)));
    }
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }

    parts.join(" ")
}

fn below_hundred(value: u64) -> String {
    let value = value as usize;
    if value < 20 {
        return ONES[value].to_string();
    }
    match value % 10 {
        0 => TENS[value / 10].to_string(),
        ones => format!("{} {}", TENS[value / 10], ONES[ones]),
    }
}
