//! Invoice calculator: settings, validation and the full invoice summary

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::InvoiceSettings;
use crate::invoice::totals::compute_totals;
use crate::tax::gst::compute_tax_breakdown_for;
use crate::traits::*;
use crate::types::*;
use crate::utils::money::{format_currency_with, format_signed, percent_of, round_half_away};
use crate::utils::validation::StrictDraftValidator;
use crate::utils::words::amount_in_words;

/// Everything the invoice preview and print template display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub totals: TotalsResult,
    pub tax_breakdown: TaxBreakdown,
    /// Final total in words, e.g. "One Thousand Sixty Two Rupees"
    pub amount_in_words: String,
    /// Final total with symbol and Indian grouping
    pub formatted_total: String,
    /// Round-off with explicit sign
    pub formatted_round_off: String,
}

/// Invoice calculation engine
pub struct InvoiceCalculator {
    settings: InvoiceSettings,
    validator: Box<dyn DraftValidator>,
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new(InvoiceSettings::default())
    }
}

impl InvoiceCalculator {
    /// Create a calculator; `strict_validation` picks the strict validator
    pub fn new(settings: InvoiceSettings) -> Self {
        let validator: Box<dyn DraftValidator> = if settings.strict_validation {
            Box::new(StrictDraftValidator)
        } else {
            Box::new(DefaultDraftValidator)
        };
        Self::with_validator(settings, validator)
    }

    /// Create a calculator with a custom validator
    pub fn with_validator(settings: InvoiceSettings, validator: Box<dyn DraftValidator>) -> Self {
        Self {
            settings,
            validator,
        }
    }

    pub fn settings(&self) -> &InvoiceSettings {
        &self.settings
    }

    /// Validate a draft with the configured validator
    pub fn validate(&self, items: &[LineItem], adjustments: &GlobalAdjustments) -> InvoiceResult<()> {
        self.validator.validate(items, adjustments).inspect_err(|e| {
            warn!(error = %e, items = items.len(), "invoice draft rejected");
        })
    }

    /// Totals for a draft; never fails
    pub fn totals(&self, items: &[LineItem], adjustments: &GlobalAdjustments) -> TotalsResult {
        let totals = compute_totals(items, adjustments);
        debug!(
            items = items.len(),
            subtotal = %totals.subtotal,
            tax = %totals.tax_amount,
            final_total = %totals.final_total,
            "computed invoice totals"
        );
        totals
    }

    /// HSN/SAC-wise tax summary for the configured supply type
    pub fn tax_breakdown(&self, items: &[LineItem]) -> TaxBreakdown {
        let breakdown = compute_tax_breakdown_for(items, self.settings.supply_type);
        debug!(
            rows = breakdown.rows.len(),
            supply = ?self.settings.supply_type,
            total_tax = %breakdown.total_row.total_tax_amount,
            "computed tax breakdown"
        );
        breakdown
    }

    /// Validate the draft, then compute totals, tax summary and words
    pub fn summary(
        &self,
        items: &[LineItem],
        adjustments: &GlobalAdjustments,
    ) -> InvoiceResult<InvoiceSummary> {
        self.validate(items, adjustments)?;

        let totals = self.totals(items, adjustments);
        let tax_breakdown = self.tax_breakdown(items);
        let symbol = &self.settings.currency_symbol;

        Ok(InvoiceSummary {
            amount_in_words: amount_in_words(&totals.final_total),
            formatted_total: format_currency_with(symbol, Some(&totals.final_total)),
            formatted_round_off: format_signed(symbol, &totals.round_off_amount),
            totals,
            tax_breakdown,
        })
    }

    /// Fill in the amount of every enabled deduction from its rate.
    ///
    /// `NetTaxable` applies the rate to the subtotal, `GrandTotal` to the
    /// total before deductions. Amounts are rounded to paise. Disabled
    /// deductions are returned unchanged.
    pub fn resolve_deductions(
        &self,
        items: &[LineItem],
        adjustments: &GlobalAdjustments,
    ) -> GlobalAdjustments {
        let totals = compute_totals(items, adjustments);
        let resolve = |deduction: &Deduction| -> Deduction {
            if !deduction.enabled {
                return deduction.clone();
            }
            let base: &BigDecimal = match deduction.applied_on {
                DeductionBasis::NetTaxable => &totals.subtotal,
                DeductionBasis::GrandTotal => &totals.pre_deduction_total,
            };
            Deduction {
                amount: round_half_away(&percent_of(base, &deduction.rate_percent), 2),
                ..deduction.clone()
            }
        };

        let source_tax = match &adjustments.source_tax {
            SourceTax::None => SourceTax::None,
            SourceTax::Tds(tds) => SourceTax::Tds(resolve(tds)),
            SourceTax::Tcs(tcs) => SourceTax::Tcs(resolve(tcs)),
        };

        let resolved = GlobalAdjustments {
            source_tax,
            tds_under_gst: resolve(&adjustments.tds_under_gst),
            ..adjustments.clone()
        };
        debug!(
            tds = ?resolved.source_tax.tds().map(|d| d.amount.to_string()),
            tcs = ?resolved.source_tax.tcs().map(|d| d.amount.to_string()),
            tds_under_gst = %resolved.tds_under_gst.amount,
            "resolved deduction amounts"
        );
        resolved
    }
}
