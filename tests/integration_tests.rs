//! Integration tests for sheetbill-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sheetbill_core::{
    amount_in_words, compute_tax_breakdown, compute_totals,
    utils::StrictDraftValidator,
    Charge, Deduction, DeductionBasis, Discount, DocumentKind, DraftValidator,
    GlobalAdjustments, InvoiceCalculator, InvoiceError, InvoiceRecord, InvoiceSettings, LineItem,
    SourceTax, SupplyType,
};
use std::str::FromStr;

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn item(code: &str, quantity: u32, unit_price: &str, tax_rate: &str) -> LineItem {
    LineItem::new(
        format!("Item {}", code),
        Some(quantity),
        dec(unit_price),
        dec(tax_rate),
        code.to_string(),
    )
}

#[test]
fn test_single_item_end_to_end() {
    let items = vec![item("1234", 2, "500", "18").with_discount(Discount::percentage(dec("10")))];

    let line = items[0].normalized();
    assert_eq!(line.base_amount, dec("1000"));
    assert_eq!(line.discount_amount, dec("100"));
    assert_eq!(line.taxable_amount, dec("900"));
    assert_eq!(line.tax_amount, dec("162"));
    assert_eq!(line.line_total, dec("1062"));

    let totals = compute_totals(&items, &GlobalAdjustments::default());
    assert_eq!(totals.final_total, dec("1062"));
    assert_eq!(totals.round_off_amount, dec("0"));
}

#[test]
fn test_same_hsn_breakdown() {
    let items = vec![item("1234", 1, "900", "18"), item("1234", 1, "600", "18")];
    let breakdown = compute_tax_breakdown(&items);

    assert_eq!(breakdown.rows.len(), 1);
    let row = &breakdown.rows[0];
    assert_eq!(row.taxable_value, dec("1500"));
    assert_eq!(row.central_tax_rate_percent, dec("9"));
    assert_eq!(row.central_tax_amount, dec("135"));
    assert_eq!(row.state_tax_amount, dec("135"));
    assert_eq!(row.total_tax_amount, dec("270"));
}

#[test]
fn test_tds_subtracted_after_charges_and_extra_discount() {
    let items = vec![item("1234", 1, "1000", "18")];
    let adjustments = GlobalAdjustments {
        additional_charges: vec![Charge::new("Freight", dec("50"))],
        extra_discount: dec("20"),
        source_tax: SourceTax::Tds(Deduction::with_amount(dec("100"))),
        ..GlobalAdjustments::default()
    };
    let totals = compute_totals(&items, &adjustments);

    assert_eq!(totals.discounted_subtotal, dec("1000"));
    // 1000 + 180 + 50 - 20 - 100
    assert_eq!(totals.pre_round_total, dec("1110"));
}

#[test]
fn test_full_invoice_with_every_adjustment() {
    let items = vec![
        item("9983", 3, "1250.50", "18").with_discount(Discount::amount(dec("51.50"))),
        item("4820", 12, "85", "12").with_discount(Discount::percentage(dec("5"))),
        item("9983", 1, "999.99", "18"),
    ];
    let adjustments = GlobalAdjustments {
        global_discount: Discount::percentage(dec("2")),
        additional_charges: vec![
            Charge::new("Freight", dec("250")),
            Charge::new("Packing", dec("75.25")),
        ],
        extra_discount: dec("10"),
        source_tax: SourceTax::Tcs(Deduction::with_amount(dec("5.37"))),
        tds_under_gst: Deduction::with_amount(dec("12")),
        round_off: true,
    };
    let totals = compute_totals(&items, &adjustments);

    // base: 3751.50 + 1020 + 999.99
    assert_eq!(totals.subtotal, dec("5771.49"));
    // items: 51.50 + 51
    assert_eq!(totals.item_discounts_total, dec("102.50"));
    assert_eq!(totals.global_discount_amount, dec("115.4298"));
    assert_eq!(totals.discounted_subtotal, dec("5553.5602"));
    // tax: 3700 * 18% + 969 * 12% + 999.99 * 18%
    assert_eq!(totals.tax_amount, dec("962.27820"));
    assert_eq!(totals.additional_charges_total, dec("325.25"));
    assert_eq!(totals.pre_deduction_total, dec("6831.0884"));
    assert_eq!(totals.pre_round_total, dec("6824.4584"));
    assert_eq!(totals.final_total, dec("6824"));
    assert_eq!(totals.round_off_amount, dec("-0.4584"));
    assert_eq!(totals.total_discount, dec("227.9298"));

    let breakdown = compute_tax_breakdown(&items);
    assert_eq!(breakdown.rows.len(), 2);
    assert_eq!(breakdown.total_row.total_tax_amount, totals.tax_amount);
}

#[test]
fn test_calculator_summary_inter_state_with_round_off() {
    let settings = InvoiceSettings::from_json(
        r#"{"supply_type": "inter_state", "round_off": true, "strict_validation": true}"#,
    )
    .unwrap();
    let calculator = InvoiceCalculator::new(settings);

    let items = vec![item("8471", 1, "45999.60", "18")];
    let adjustments = calculator.settings().default_adjustments();
    let summary = calculator.summary(&items, &adjustments).unwrap();

    // 45999.60 * 1.18 = 54279.528
    assert_eq!(summary.totals.pre_round_total, dec("54279.528"));
    assert_eq!(summary.totals.final_total, dec("54280"));
    assert_eq!(summary.formatted_total, "₹54,280.00");
    assert_eq!(summary.formatted_round_off, "+₹0.47");
    assert_eq!(
        summary.amount_in_words,
        "Fifty Four Thousand Two Hundred Eighty Rupees"
    );
    assert_eq!(summary.tax_breakdown.rows[0].integrated_tax_rate_percent, dec("18"));
    assert_eq!(summary.tax_breakdown.rows[0].central_tax_amount, dec("0"));
}

#[test]
fn test_form_toggles_to_resolved_totals() {
    let calculator = InvoiceCalculator::default();
    let items = vec![item("998314", 1, "50000", "18")];

    let tds = Deduction::with_rate(dec("2"), DeductionBasis::NetTaxable);
    let tcs = Deduction::disabled();
    let adjustments = GlobalAdjustments {
        source_tax: SourceTax::from_flags(tds, tcs).unwrap(),
        ..GlobalAdjustments::default()
    };

    let resolved = calculator.resolve_deductions(&items, &adjustments);
    let totals = calculator.totals(&items, &resolved);

    assert_eq!(totals.tds_amount, dec("1000"));
    assert_eq!(totals.final_total, dec("58000"));
}

#[test]
fn test_conflicting_toggles_are_rejected() {
    let result = SourceTax::from_flags(
        Deduction::with_rate(dec("1"), DeductionBasis::NetTaxable),
        Deduction::with_rate(dec("0.1"), DeductionBasis::GrandTotal),
    );
    assert!(matches!(result, Err(InvoiceError::ConflictingDeductions)));
}

#[test]
fn test_strict_validator_on_draft() {
    let items = vec![item("1234", 1, "100", "18").with_discount(Discount::amount(dec("101")))];
    let result = StrictDraftValidator.validate(&items, &GlobalAdjustments::default());
    assert!(matches!(result, Err(InvoiceError::DiscountExceedsBase { .. })));
}

#[test]
fn test_quotation_record_row() {
    let items = vec![item("1234", 4, "250", "5")];
    let record = InvoiceRecord::new(
        "QT-007".to_string(),
        DocumentKind::Quotation,
        NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
        "Patel Hardware".to_string(),
        items,
        GlobalAdjustments::default(),
    );
    let row = record.to_row().unwrap();

    assert_eq!(row[2], "Quotation");
    assert_eq!(row[11], "1050.00");
    assert_eq!(amount_in_words(&record.totals.final_total), "One Thousand Fifty Rupees");
}

#[test]
fn test_amount_in_words_samples() {
    assert_eq!(amount_in_words(&dec("0")), "Zero Rupees");
    assert_eq!(amount_in_words(&dec("100")), "One Hundred Rupees");
    assert_eq!(amount_in_words(&dec("150000")), "One Lakh Fifty Thousand Rupees");
}

#[test]
fn test_supply_type_default_is_intra_state() {
    assert_eq!(SupplyType::default(), SupplyType::IntraState);
}

#[test]
fn test_strict_validator_rejects_negative_adjustments() {
    let items = vec![item("1234", 1, "100", "18")];

    // Unvalidated totals quietly add a negative discount back in
    let inflated = GlobalAdjustments {
        global_discount: Discount::amount(dec("-500")),
        ..GlobalAdjustments::default()
    };
    assert_eq!(compute_totals(&items, &inflated).final_total, dec("618"));

    let drafts = [
        inflated,
        GlobalAdjustments {
            extra_discount: dec("-500"),
            ..GlobalAdjustments::default()
        },
        GlobalAdjustments {
            additional_charges: vec![Charge::new("Rebate", dec("-50"))],
            ..GlobalAdjustments::default()
        },
    ];
    for adjustments in &drafts {
        let result = StrictDraftValidator.validate(&items, adjustments);
        assert!(matches!(result, Err(InvoiceError::NegativeAmount { .. })));
    }
}
