//! Line-item normalization: base, discount, taxable, tax and line total

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::types::LineItem;
use crate::utils::money::{percent_of, resolve_discount};

/// Derived amounts for one line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLineItem {
    /// `quantity * unit_price`
    pub base_amount: BigDecimal,
    /// Item discount resolved against the base amount
    pub discount_amount: BigDecimal,
    /// `base_amount - discount_amount`; negative when a flat discount exceeds the base
    pub taxable_amount: BigDecimal,
    /// `taxable_amount * tax_rate_percent / 100`
    pub tax_amount: BigDecimal,
    /// `taxable_amount + tax_amount`
    pub line_total: BigDecimal,
}

/// Compute the derived amounts of a line item.
///
/// A blank quantity or unit price counts as zero.
pub fn normalize(item: &LineItem) -> NormalizedLineItem {
    let quantity = BigDecimal::from(item.quantity.unwrap_or(0));
    let unit_price = item.unit_price.clone().unwrap_or_else(BigDecimal::zero);

    let base_amount = quantity * unit_price;
    let discount_amount = resolve_discount(&base_amount, &item.discount);
    let taxable_amount = &base_amount - &discount_amount;
    let tax_amount = percent_of(&taxable_amount, &item.tax_rate_percent);
    let line_total = &taxable_amount + &tax_amount;

    NormalizedLineItem {
        base_amount,
        discount_amount,
        taxable_amount,
        tax_amount,
        line_total,
    }
}

impl LineItem {
    /// Derived amounts for this item
    pub fn normalized(&self) -> NormalizedLineItem {
        normalize(self)
    }
}
