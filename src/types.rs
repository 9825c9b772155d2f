//! Core types and data structures for invoice calculation

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Value is a percentage of the base it discounts
    #[default]
    Percentage,
    /// Value is a flat currency amount
    Amount,
}

/// A discount specification, either percentage or flat amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    pub value: BigDecimal,
}

impl Discount {
    /// No discount
    pub fn none() -> Self {
        Self::percentage(BigDecimal::zero())
    }

    /// Percentage discount (e.g. 10 for 10%)
    pub fn percentage(value: BigDecimal) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            value,
        }
    }

    /// Flat amount discount
    pub fn amount(value: BigDecimal) -> Self {
        Self {
            kind: DiscountKind::Amount,
            value,
        }
    }

    /// Whether this discount has no effect on any base
    pub fn is_none(&self) -> bool {
        self.value.is_zero()
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::none()
    }
}

/// One invoice row as entered on the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item or service description
    #[serde(default)]
    pub description: String,
    /// Quantity; `None` while the field is blank
    pub quantity: Option<u32>,
    /// Unit price before tax; `None` while the field is blank
    pub unit_price: Option<BigDecimal>,
    /// Item-level discount
    #[serde(default)]
    pub discount: Discount,
    /// Combined GST rate in percent (e.g. 18)
    pub tax_rate_percent: BigDecimal,
    /// HSN or SAC classification code
    #[serde(default)]
    pub hsn_or_sac_code: String,
}

impl LineItem {
    /// Create a new line item as the "add item" action does.
    ///
    /// A blank quantity defaults to `1` here. Once the item exists, a quantity
    /// cleared back to `None` counts as `0` in every calculation.
    pub fn new(
        description: String,
        quantity: Option<u32>,
        unit_price: BigDecimal,
        tax_rate_percent: BigDecimal,
        hsn_or_sac_code: String,
    ) -> Self {
        Self {
            description,
            quantity: quantity.or(Some(1)),
            unit_price: Some(unit_price),
            discount: Discount::none(),
            tax_rate_percent,
            hsn_or_sac_code,
        }
    }

    /// Attach an item-level discount
    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }
}

/// A flat, untaxed charge added after tax (freight, packing, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub name: String,
    pub amount: BigDecimal,
}

impl Charge {
    pub fn new(name: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Base a withholding rate is applied to when its amount is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionBasis {
    /// The invoice subtotal
    #[default]
    NetTaxable,
    /// The grand total before any deduction
    GrandTotal,
}

/// A TDS, TDS-under-GST or TCS line.
///
/// Totals only read `enabled` and `amount`. `rate_percent` and `applied_on`
/// are inputs to [`crate::InvoiceCalculator::resolve_deductions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deduction {
    pub enabled: bool,
    pub rate_percent: BigDecimal,
    pub amount: BigDecimal,
    pub applied_on: DeductionBasis,
}

impl Deduction {
    /// A deduction that is switched off
    pub fn disabled() -> Self {
        Self::default()
    }

    /// An enabled deduction with a fixed, already computed amount
    pub fn with_amount(amount: BigDecimal) -> Self {
        Self {
            enabled: true,
            amount,
            ..Self::default()
        }
    }

    /// An enabled deduction whose amount is still to be resolved from a rate
    pub fn with_rate(rate_percent: BigDecimal, applied_on: DeductionBasis) -> Self {
        Self {
            enabled: true,
            rate_percent,
            applied_on,
            ..Self::default()
        }
    }

    /// Amount that participates in totals: zero unless enabled
    pub fn applied_amount(&self) -> BigDecimal {
        if self.enabled {
            self.amount.clone()
        } else {
            BigDecimal::zero()
        }
    }
}

/// Tax withheld by the buyer (TDS) or collected by the seller (TCS).
///
/// The two are mutually exclusive on an invoice, so they share one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTax {
    #[default]
    None,
    Tds(Deduction),
    Tcs(Deduction),
}

impl SourceTax {
    /// Build from the two independent form toggles.
    ///
    /// Fails with [`InvoiceError::ConflictingDeductions`] when both are on.
    pub fn from_flags(tds: Deduction, tcs: Deduction) -> InvoiceResult<Self> {
        match (tds.enabled, tcs.enabled) {
            (true, true) => Err(InvoiceError::ConflictingDeductions),
            (true, false) => Ok(SourceTax::Tds(tds)),
            (false, true) => Ok(SourceTax::Tcs(tcs)),
            (false, false) => Ok(SourceTax::None),
        }
    }

    pub fn tds(&self) -> Option<&Deduction> {
        match self {
            SourceTax::Tds(deduction) => Some(deduction),
            _ => None,
        }
    }

    pub fn tcs(&self) -> Option<&Deduction> {
        match self {
            SourceTax::Tcs(deduction) => Some(deduction),
            _ => None,
        }
    }
}

/// Invoice-wide adjustments applied on top of the line items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalAdjustments {
    /// Discount on the subtotal
    pub global_discount: Discount,
    /// Flat charges, in entry order
    pub additional_charges: Vec<Charge>,
    /// Flat discount taken after charges
    pub extra_discount: BigDecimal,
    /// TDS or TCS
    pub source_tax: SourceTax,
    /// TDS under GST, independent of the TDS/TCS choice
    pub tds_under_gst: Deduction,
    /// Round the final total to the nearest rupee
    pub round_off: bool,
}

/// Totals breakdown for one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsResult {
    /// Sum of base amounts before any discount
    pub subtotal: BigDecimal,
    /// Sum of item-level discounts
    pub item_discounts_total: BigDecimal,
    /// Global discount resolved against the subtotal
    pub global_discount_amount: BigDecimal,
    /// Item discounts + global discount + extra discount
    pub total_discount: BigDecimal,
    /// Subtotal less item and global discounts
    pub discounted_subtotal: BigDecimal,
    /// Sum of item tax amounts
    pub tax_amount: BigDecimal,
    pub additional_charges_total: BigDecimal,
    pub extra_discount: BigDecimal,
    /// Grand total before TDS/TCS
    pub pre_deduction_total: BigDecimal,
    pub tds_amount: BigDecimal,
    pub tds_under_gst_amount: BigDecimal,
    pub tcs_amount: BigDecimal,
    pub pre_round_total: BigDecimal,
    /// Signed: `final_total - pre_round_total`
    pub round_off_amount: BigDecimal,
    pub final_total: BigDecimal,
}

/// One row of the HSN/SAC-wise tax summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdownRow {
    pub hsn_or_sac_code: String,
    /// Combined rate of the group; zero on the total row
    pub tax_rate_percent: BigDecimal,
    pub taxable_value: BigDecimal,
    pub central_tax_rate_percent: BigDecimal,
    pub central_tax_amount: BigDecimal,
    pub state_tax_rate_percent: BigDecimal,
    pub state_tax_amount: BigDecimal,
    /// Set only for inter-state supply
    pub integrated_tax_rate_percent: BigDecimal,
    pub integrated_tax_amount: BigDecimal,
    pub total_tax_amount: BigDecimal,
}

/// HSN/SAC-wise tax summary with its trailing total row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub rows: Vec<TaxBreakdownRow>,
    pub total_row: TaxBreakdownRow,
}

/// Errors raised while validating or recording an invoice draft
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Invalid quantity on item {index}: {reason}")]
    InvalidQuantity { index: usize, reason: String },
    #[error("Invalid unit price on item {index}: {reason}")]
    InvalidUnitPrice { index: usize, reason: String },
    #[error("Discount exceeds base on {target}: discount {discount} > base {base}")]
    DiscountExceedsBase {
        target: String,
        discount: BigDecimal,
        base: BigDecimal,
    },
    #[error("Negative amount on {target}: {value}")]
    NegativeAmount { target: String, value: BigDecimal },
    #[error("TDS and TCS cannot both be enabled on one invoice")]
    ConflictingDeductions,
    #[error("HSN/SAC code '{code}' carries more than one tax rate: {first}% and {second}%")]
    MixedTaxRates {
        code: String,
        first: BigDecimal,
        second: BigDecimal,
    },
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
