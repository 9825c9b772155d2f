//! Invoice totals walkthrough
//!
//! Run with `RUST_LOG=debug cargo run --example invoice_totals` to see the
//! calculator's tracing events.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sheetbill_core::{
    format_currency, Charge, Deduction, DeductionBasis, Discount, DocumentKind,
    GlobalAdjustments, InvoiceCalculator, InvoiceRecord, InvoiceSettings, LineItem, SourceTax,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = InvoiceSettings::from_json(r#"{"round_off": true}"#)?;
    let calculator = InvoiceCalculator::new(settings);

    let items = vec![
        LineItem::new(
            "Website maintenance (monthly)".to_string(),
            Some(3),
            BigDecimal::from(15000),
            BigDecimal::from(18),
            "998314".to_string(),
        )
        .with_discount(Discount::percentage(BigDecimal::from(5))),
        LineItem::new(
            "Printed brochures".to_string(),
            Some(500),
            BigDecimal::from_str("12.75")?,
            BigDecimal::from(12),
            "4911".to_string(),
        ),
    ];

    let mut adjustments = calculator.settings().default_adjustments();
    adjustments.additional_charges.push(Charge::new("Courier", BigDecimal::from(350)));
    adjustments.source_tax = SourceTax::from_flags(
        Deduction::with_rate(BigDecimal::from(2), DeductionBasis::NetTaxable),
        Deduction::disabled(),
    )?;
    let adjustments: GlobalAdjustments = calculator.resolve_deductions(&items, &adjustments);

    let summary = calculator.summary(&items, &adjustments)?;
    let totals = &summary.totals;

    println!("Line items:");
    for item in &items {
        let line = item.normalized();
        println!(
            "  {:<32} {:>14}  tax {:>12}",
            item.description,
            format_currency(Some(&line.taxable_amount)),
            format_currency(Some(&line.tax_amount))
        );
    }
    println!();
    println!("Subtotal:         {}", format_currency(Some(&totals.subtotal)));
    println!("Discount:         {}", format_currency(Some(&totals.total_discount)));
    println!("Tax:              {}", format_currency(Some(&totals.tax_amount)));
    println!("Charges:          {}", format_currency(Some(&totals.additional_charges_total)));
    println!("TDS:              {}", format_currency(Some(&totals.tds_amount)));
    println!("Round off:        {}", summary.formatted_round_off);
    println!("Total:            {}", summary.formatted_total);
    println!("In words:         {}", summary.amount_in_words);
    println!();

    println!("Tax summary:");
    for row in summary
        .tax_breakdown
        .rows
        .iter()
        .chain(std::iter::once(&summary.tax_breakdown.total_row))
    {
        println!(
            "  {:<8} {:>14}  CGST {:>12}  SGST {:>12}  Total {:>12}",
            row.hsn_or_sac_code,
            format_currency(Some(&row.taxable_value)),
            format_currency(Some(&row.central_tax_amount)),
            format_currency(Some(&row.state_tax_amount)),
            format_currency(Some(&row.total_tax_amount))
        );
    }

    let record = InvoiceRecord::new(
        "INV-2024-0117".to_string(),
        DocumentKind::Invoice,
        NaiveDate::from_ymd_opt(2024, 6, 14).ok_or("invalid date")?,
        "Mehta Exports Pvt Ltd".to_string(),
        items,
        adjustments,
    );
    println!();
    println!("Spreadsheet row: {:?}", record.to_row()?);

    Ok(())
}
