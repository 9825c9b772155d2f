//! Validation seams for invoice drafts

use crate::types::*;
use crate::utils::validation::{validate_quantity, validate_unit_price};

/// Checks a draft before it is summarised or recorded.
///
/// Totals are computed from whatever the draft holds; validators are where the
/// form layer decides what it refuses to accept.
pub trait DraftValidator: Send + Sync {
    /// Validate every line item
    fn validate_items(&self, items: &[LineItem]) -> InvoiceResult<()>;

    /// Validate invoice-wide adjustments against the items they apply to
    fn validate_adjustments(
        &self,
        items: &[LineItem],
        adjustments: &GlobalAdjustments,
    ) -> InvoiceResult<()>;

    /// Validate the whole draft
    fn validate(&self, items: &[LineItem], adjustments: &GlobalAdjustments) -> InvoiceResult<()> {
        self.validate_items(items)?;
        self.validate_adjustments(items, adjustments)
    }
}

/// Default validator: quantities and unit prices only
pub struct DefaultDraftValidator;

impl DraftValidator for DefaultDraftValidator {
    fn validate_items(&self, items: &[LineItem]) -> InvoiceResult<()> {
        for (index, item) in items.iter().enumerate() {
            validate_quantity(index, item.quantity)?;
            validate_unit_price(index, item.unit_price.as_ref())?;
        }
        Ok(())
    }

    fn validate_adjustments(
        &self,
        _items: &[LineItem],
        _adjustments: &GlobalAdjustments,
    ) -> InvoiceResult<()> {
        // TDS/TCS exclusivity is carried by `SourceTax`
        Ok(())
    }
}
