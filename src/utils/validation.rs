//! Validation utilities

use bigdecimal::{BigDecimal, Signed};

use crate::invoice::line_item::normalize;
use crate::invoice::totals::compute_totals;
use crate::tax::gst::{check_uniform_rates, GstRate};
use crate::traits::*;
use crate::types::*;

/// Validate that a quantity is present and positive
pub fn validate_quantity(index: usize, quantity: Option<u32>) -> InvoiceResult<()> {
    match quantity {
        None => Err(InvoiceError::InvalidQuantity {
            index,
            reason: "quantity is required".to_string(),
        }),
        Some(0) => Err(InvoiceError::InvalidQuantity {
            index,
            reason: "quantity must be positive".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Validate that a unit price is present and not negative
pub fn validate_unit_price(index: usize, unit_price: Option<&BigDecimal>) -> InvoiceResult<()> {
    match unit_price {
        None => Err(InvoiceError::InvalidUnitPrice {
            index,
            reason: "unit price is required".to_string(),
        }),
        Some(price) if price.is_negative() => Err(InvoiceError::InvalidUnitPrice {
            index,
            reason: format!("unit price cannot be negative, got {}", price),
        }),
        Some(_) => Ok(()),
    }
}

/// Validate that a discount or charge amount is not negative
pub fn validate_non_negative(target: &str, value: &BigDecimal) -> InvoiceResult<()> {
    if value.is_negative() {
        return Err(InvoiceError::NegativeAmount {
            target: target.to_string(),
            value: value.clone(),
        });
    }
    Ok(())
}

/// Validate that an item's discount is not negative and does not exceed its base amount
pub fn validate_item_discount(index: usize, item: &LineItem) -> InvoiceResult<()> {
    validate_non_negative(&format!("item {} discount", index), &item.discount.value)?;

    let line = normalize(item);
    if line.discount_amount > line.base_amount {
        return Err(InvoiceError::DiscountExceedsBase {
            target: format!("item {}", index),
            discount: line.discount_amount,
            base: line.base_amount,
        });
    }
    Ok(())
}

/// Validate the global and extra discounts against what is left to discount.
///
/// Negative discounts and charges are rejected before any bound is checked.
pub fn validate_invoice_discounts(
    items: &[LineItem],
    adjustments: &GlobalAdjustments,
) -> InvoiceResult<()> {
    validate_non_negative("global discount", &adjustments.global_discount.value)?;
    validate_non_negative("extra discount", &adjustments.extra_discount)?;
    for charge in &adjustments.additional_charges {
        validate_non_negative(&format!("charge '{}'", charge.name), &charge.amount)?;
    }

    let totals = compute_totals(items, adjustments);

    let remaining = &totals.subtotal - &totals.item_discounts_total;
    if totals.global_discount_amount > remaining {
        return Err(InvoiceError::DiscountExceedsBase {
            target: "global discount".to_string(),
            discount: totals.global_discount_amount,
            base: remaining,
        });
    }

    let before_extra = &totals.discounted_subtotal + &totals.tax_amount
        + &totals.additional_charges_total;
    if totals.extra_discount > before_extra {
        return Err(InvoiceError::DiscountExceedsBase {
            target: "extra discount".to_string(),
            discount: totals.extra_discount,
            base: before_extra,
        });
    }

    Ok(())
}

/// Strict validator: the default checks plus discount bounds, rate
/// consistency and uniform rates per HSN/SAC code
pub struct StrictDraftValidator;

impl DraftValidator for StrictDraftValidator {
    fn validate_items(&self, items: &[LineItem]) -> InvoiceResult<()> {
        DefaultDraftValidator.validate_items(items)?;

        for (index, item) in items.iter().enumerate() {
            validate_item_discount(index, item)?;
            GstRate::intra_state(item.tax_rate_percent.clone()).validate()?;
        }

        check_uniform_rates(items)
    }

    fn validate_adjustments(
        &self,
        items: &[LineItem],
        adjustments: &GlobalAdjustments,
    ) -> InvoiceResult<()> {
        validate_invoice_discounts(items, adjustments)
    }
}
