//! GST rate split and the HSN/SAC-wise tax summary of a tax invoice

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::invoice::line_item::normalize;
use crate::types::{InvoiceError, InvoiceResult, LineItem, TaxBreakdown, TaxBreakdownRow};
use crate::utils::money::percent_of;

/// Code shown on the trailing total row of the tax summary
pub const TOTAL_ROW_CODE: &str = "TOTAL";

/// Place of supply relative to the seller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// Same state: CGST + SGST
    #[default]
    IntraState,
    /// Different state: IGST
    InterState,
}

/// GST rate structure for Indian taxation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRate {
    /// Total GST rate percentage (e.g., 18 for 18%)
    pub total_rate: BigDecimal,
    /// CGST rate percentage (Central GST)
    pub cgst_rate: BigDecimal,
    /// SGST rate percentage (State GST)
    pub sgst_rate: BigDecimal,
    /// IGST rate percentage (Integrated GST)
    pub igst_rate: BigDecimal,
}

impl GstRate {
    /// Intra-state split: half central, half state
    pub fn intra_state(total_rate: BigDecimal) -> Self {
        let half_rate = &total_rate / BigDecimal::from(2);
        Self {
            total_rate,
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
            igst_rate: BigDecimal::zero(),
        }
    }

    /// Inter-state: the whole rate is IGST
    pub fn inter_state(total_rate: BigDecimal) -> Self {
        Self {
            total_rate: total_rate.clone(),
            cgst_rate: BigDecimal::zero(),
            sgst_rate: BigDecimal::zero(),
            igst_rate: total_rate,
        }
    }

    pub fn for_supply(total_rate: BigDecimal, supply: SupplyType) -> Self {
        match supply {
            SupplyType::IntraState => Self::intra_state(total_rate),
            SupplyType::InterState => Self::inter_state(total_rate),
        }
    }

    /// Validate that the GST rate structure is consistent
    pub fn validate(&self) -> InvoiceResult<()> {
        let calculated_total = &self.cgst_rate + &self.sgst_rate + &self.igst_rate;

        if calculated_total != self.total_rate {
            return Err(InvoiceError::InvalidRate(format!(
                "GST components don't add up to total rate: {} != {}",
                calculated_total, self.total_rate
            )));
        }

        if self.total_rate < BigDecimal::zero() {
            return Err(InvoiceError::InvalidRate(format!(
                "GST rate cannot be negative: {}",
                self.total_rate
            )));
        }

        if self.igst_rate.is_zero() && self.cgst_rate != self.sgst_rate {
            return Err(InvoiceError::InvalidRate(
                "CGST and SGST rates must be equal for intra-state supply".to_string(),
            ));
        }

        if self.igst_rate > BigDecimal::zero()
            && (self.cgst_rate > BigDecimal::zero() || self.sgst_rate > BigDecimal::zero())
        {
            return Err(InvoiceError::InvalidRate(
                "Only IGST applies to inter-state supply".to_string(),
            ));
        }

        Ok(())
    }
}

/// Tax summary for intra-state supply (CGST + SGST)
pub fn compute_tax_breakdown(items: &[LineItem]) -> TaxBreakdown {
    compute_tax_breakdown_for(items, SupplyType::IntraState)
}

/// Tax summary grouped by HSN/SAC code and rate, in first-seen order.
///
/// Items sharing a code but not a rate land on separate rows.
pub fn compute_tax_breakdown_for(items: &[LineItem], supply: SupplyType) -> TaxBreakdown {
    let mut groups: Vec<(&str, &BigDecimal, BigDecimal)> = Vec::new();

    for item in items {
        let taxable = normalize(item).taxable_amount;
        let existing = groups.iter_mut().find(|(code, rate, _)| {
            *code == item.hsn_or_sac_code.as_str() && **rate == item.tax_rate_percent
        });
        match existing {
            Some((_, _, value)) => *value += taxable,
            None => groups.push((item.hsn_or_sac_code.as_str(), &item.tax_rate_percent, taxable)),
        }
    }

    let rows: Vec<TaxBreakdownRow> = groups
        .into_iter()
        .map(|(code, rate, taxable_value)| breakdown_row(code, rate, taxable_value, supply))
        .collect();

    let total_row = TaxBreakdownRow {
        hsn_or_sac_code: TOTAL_ROW_CODE.to_string(),
        tax_rate_percent: BigDecimal::zero(),
        taxable_value: rows.iter().map(|row| &row.taxable_value).sum(),
        central_tax_rate_percent: BigDecimal::zero(),
        central_tax_amount: rows.iter().map(|row| &row.central_tax_amount).sum(),
        state_tax_rate_percent: BigDecimal::zero(),
        state_tax_amount: rows.iter().map(|row| &row.state_tax_amount).sum(),
        integrated_tax_rate_percent: BigDecimal::zero(),
        integrated_tax_amount: rows.iter().map(|row| &row.integrated_tax_amount).sum(),
        total_tax_amount: rows.iter().map(|row| &row.total_tax_amount).sum(),
    };

    TaxBreakdown { rows, total_row }
}

fn breakdown_row(
    code: &str,
    rate: &BigDecimal,
    taxable_value: BigDecimal,
    supply: SupplyType,
) -> TaxBreakdownRow {
    let gst_rate = GstRate::for_supply(rate.clone(), supply);

    let central_tax_amount = percent_of(&taxable_value, &gst_rate.cgst_rate);
    let state_tax_amount = percent_of(&taxable_value, &gst_rate.sgst_rate);
    let integrated_tax_amount = percent_of(&taxable_value, &gst_rate.igst_rate);
    let total_tax_amount = &central_tax_amount + &state_tax_amount + &integrated_tax_amount;

    TaxBreakdownRow {
        hsn_or_sac_code: code.to_string(),
        tax_rate_percent: gst_rate.total_rate,
        taxable_value,
        central_tax_rate_percent: gst_rate.cgst_rate,
        central_tax_amount,
        state_tax_rate_percent: gst_rate.sgst_rate,
        state_tax_amount,
        integrated_tax_rate_percent: gst_rate.igst_rate,
        integrated_tax_amount,
        total_tax_amount,
    }
}

/// Reject drafts where one HSN/SAC code carries two different rates
pub fn check_uniform_rates(items: &[LineItem]) -> InvoiceResult<()> {
    let mut seen: HashMap<&str, &BigDecimal> = HashMap::new();

    for item in items {
        match seen.get(item.hsn_or_sac_code.as_str()) {
            Some(first) if **first != item.tax_rate_percent => {
                return Err(InvoiceError::MixedTaxRates {
                    code: item.hsn_or_sac_code.clone(),
                    first: (*first).clone(),
                    second: item.tax_rate_percent.clone(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(&item.hsn_or_sac_code, &item.tax_rate_percent);
            }
        }
    }

    Ok(())
}
