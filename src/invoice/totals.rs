//! Charge and deduction aggregation, and round-off

use bigdecimal::{BigDecimal, Zero};

use crate::invoice::line_item::{normalize, NormalizedLineItem};
use crate::types::{GlobalAdjustments, LineItem, TotalsResult};
use crate::utils::money::{resolve_discount, round_half_away};

/// Compute the totals of an invoice draft.
///
/// The steps run in a fixed order because each base depends on the last:
/// subtotal, item discounts, global discount on the subtotal, item tax,
/// additional charges, extra discount, then TDS, TDS under GST and TCS.
/// Deduction amounts are taken as supplied; their rates are not consulted.
pub fn compute_totals(items: &[LineItem], adjustments: &GlobalAdjustments) -> TotalsResult {
    let lines: Vec<NormalizedLineItem> = items.iter().map(normalize).collect();

    let subtotal: BigDecimal = lines.iter().map(|line| &line.base_amount).sum();
    let item_discounts_total: BigDecimal = lines.iter().map(|line| &line.discount_amount).sum();
    let global_discount_amount = resolve_discount(&subtotal, &adjustments.global_discount);
    let discounted_subtotal = &subtotal - &item_discounts_total - &global_discount_amount;

    // Item tax is computed on each item's own taxable amount; the global
    // discount does not reduce it.
    let tax_amount: BigDecimal = lines.iter().map(|line| &line.tax_amount).sum();

    let additional_charges_total: BigDecimal = adjustments
        .additional_charges
        .iter()
        .map(|charge| &charge.amount)
        .sum();
    let extra_discount = adjustments.extra_discount.clone();

    let pre_deduction_total =
        &discounted_subtotal + &tax_amount + &additional_charges_total - &extra_discount;

    let tds_amount = adjustments
        .source_tax
        .tds()
        .map(|tds| tds.applied_amount())
        .unwrap_or_else(BigDecimal::zero);
    let tds_under_gst_amount = adjustments.tds_under_gst.applied_amount();
    let tcs_amount = adjustments
        .source_tax
        .tcs()
        .map(|tcs| tcs.applied_amount())
        .unwrap_or_else(BigDecimal::zero);

    let pre_round_total = &pre_deduction_total - &tds_amount - &tds_under_gst_amount + &tcs_amount;
    let (final_total, round_off_amount) = resolve_round_off(&pre_round_total, adjustments.round_off);

    let total_discount = &item_discounts_total + &global_discount_amount + &extra_discount;

    TotalsResult {
        subtotal,
        item_discounts_total,
        global_discount_amount,
        total_discount,
        discounted_subtotal,
        tax_amount,
        additional_charges_total,
        extra_discount,
        pre_deduction_total,
        tds_amount,
        tds_under_gst_amount,
        tcs_amount,
        pre_round_total,
        round_off_amount,
        final_total,
    }
}

/// Resolve the final total and the signed round-off amount.
///
/// With `round_off` the total goes to the nearest rupee, halves away from zero.
pub fn resolve_round_off(pre_round_total: &BigDecimal, round_off: bool) -> (BigDecimal, BigDecimal) {
    if !round_off {
        return (pre_round_total.clone(), BigDecimal::zero());
    }

    let final_total = round_half_away(pre_round_total, 0);
    let round_off_amount = &final_total - pre_round_total;
    (final_total, round_off_amount)
}
