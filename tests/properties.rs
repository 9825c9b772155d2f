//! Property-based tests for totals, round-off and the tax summary

use bigdecimal::{BigDecimal, Signed};
use proptest::prelude::*;
use sheetbill_core::{
    compute_tax_breakdown, compute_tax_breakdown_for, compute_totals, Charge, Deduction,
    Discount, GlobalAdjustments, LineItem, SourceTax, SupplyType,
};
use std::str::FromStr;

fn paise(value: i64) -> BigDecimal {
    BigDecimal::new(value.into(), 2)
}

fn discount() -> impl Strategy<Value = Discount> {
    (any::<bool>(), 0i64..5_000).prop_map(|(flat, value)| {
        if flat {
            Discount::amount(paise(value))
        } else {
            Discount::percentage(paise(value))
        }
    })
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (
        1u32..50,
        0i64..10_000_000,
        prop::sample::select(vec![0i64, 5, 12, 18, 28]),
        discount(),
        prop::sample::select(vec!["1234", "9983", "4820"]),
    )
        .prop_map(|(quantity, price, rate, discount, code)| {
            LineItem::new(
                format!("Item {}", code),
                Some(quantity),
                paise(price),
                BigDecimal::from(rate),
                code.to_string(),
            )
            .with_discount(discount)
        })
}

fn source_tax() -> impl Strategy<Value = SourceTax> {
    (0u8..3, 0i64..100_000).prop_map(|(choice, amount)| match choice {
        0 => SourceTax::None,
        1 => SourceTax::Tds(Deduction::with_amount(paise(amount))),
        _ => SourceTax::Tcs(Deduction::with_amount(paise(amount))),
    })
}

fn adjustments() -> impl Strategy<Value = GlobalAdjustments> {
    (
        discount(),
        prop::collection::vec(0i64..100_000, 0..3),
        0i64..10_000,
        source_tax(),
        0i64..10_000,
        any::<bool>(),
    )
        .prop_map(
            |(global_discount, charges, extra, source_tax, tds_under_gst, round_off)| {
                GlobalAdjustments {
                    global_discount,
                    additional_charges: charges
                        .into_iter()
                        .enumerate()
                        .map(|(i, amount)| Charge::new(format!("Charge {}", i), paise(amount)))
                        .collect(),
                    extra_discount: paise(extra),
                    source_tax,
                    tds_under_gst: Deduction::with_amount(paise(tds_under_gst)),
                    round_off,
                }
            },
        )
}

proptest! {
    #[test]
    fn totals_are_idempotent(
        items in prop::collection::vec(line_item(), 0..8),
        adjustments in adjustments(),
    ) {
        let first = compute_totals(&items, &adjustments);
        let second = compute_totals(&items, &adjustments);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tax_matches_per_item_recomputation(
        items in prop::collection::vec(line_item(), 0..8),
        adjustments in adjustments(),
    ) {
        let totals = compute_totals(&items, &adjustments);
        let expected: BigDecimal = items
            .iter()
            .map(|item| {
                let quantity = BigDecimal::from(item.quantity.unwrap_or(0));
                let base = quantity * item.unit_price.clone().unwrap_or_default();
                let discount = sheetbill_core::resolve_discount(&base, &item.discount);
                (base - discount) * &item.tax_rate_percent / BigDecimal::from(100)
            })
            .sum();
        prop_assert_eq!(totals.tax_amount, expected);
    }

    #[test]
    fn round_off_is_bounded(
        items in prop::collection::vec(line_item(), 0..8),
        adjustments in adjustments(),
    ) {
        let totals = compute_totals(&items, &adjustments);
        if adjustments.round_off {
            prop_assert_eq!(totals.final_total.with_scale(0), totals.final_total.clone());
            prop_assert!(totals.round_off_amount.abs() <= BigDecimal::from_str("0.5").unwrap());
            prop_assert_eq!(
                &totals.final_total - &totals.pre_round_total,
                totals.round_off_amount
            );
        } else {
            prop_assert_eq!(&totals.final_total, &totals.pre_round_total);
            prop_assert_eq!(totals.round_off_amount, BigDecimal::from(0));
        }
    }

    #[test]
    fn tax_breakdown_conserves_totals(
        items in prop::collection::vec(line_item(), 0..8),
        inter_state in any::<bool>(),
    ) {
        let totals = compute_totals(&items, &GlobalAdjustments::default());
        let supply = if inter_state { SupplyType::InterState } else { SupplyType::IntraState };
        let breakdown = compute_tax_breakdown_for(&items, supply);

        let taxable: BigDecimal = breakdown.rows.iter().map(|row| &row.taxable_value).sum();
        let tax: BigDecimal = breakdown.rows.iter().map(|row| &row.total_tax_amount).sum();

        prop_assert_eq!(&taxable, &(&totals.subtotal - &totals.item_discounts_total));
        prop_assert_eq!(&tax, &totals.tax_amount);
        prop_assert_eq!(&breakdown.total_row.taxable_value, &taxable);
        prop_assert_eq!(&breakdown.total_row.total_tax_amount, &totals.tax_amount);
    }

    #[test]
    fn central_and_state_halves_match(items in prop::collection::vec(line_item(), 1..8)) {
        let breakdown = compute_tax_breakdown(&items);
        for row in &breakdown.rows {
            prop_assert_eq!(&row.central_tax_amount, &row.state_tax_amount);
            prop_assert!(!row.integrated_tax_amount.is_negative());
        }
    }
}
