//! Calculator settings

use serde::{Deserialize, Serialize};

use crate::tax::gst::SupplyType;
use crate::types::{GlobalAdjustments, InvoiceError, InvoiceResult};
use crate::utils::money::RUPEE_SYMBOL;

/// Business-level settings that shape every calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    /// Symbol prefixed to rendered amounts
    pub currency_symbol: String,
    /// Whether tax summaries use CGST/SGST or IGST
    pub supply_type: SupplyType,
    /// Round-off default for new drafts
    pub round_off: bool,
    /// Also reject discounts above their base and mixed rates per HSN code
    pub strict_validation: bool,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            currency_symbol: RUPEE_SYMBOL.to_string(),
            supply_type: SupplyType::IntraState,
            round_off: false,
            strict_validation: false,
        }
    }
}

impl InvoiceSettings {
    /// Load settings from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> InvoiceResult<Self> {
        serde_json::from_str(json).map_err(|e| InvoiceError::Config(e.to_string()))
    }

    /// Adjustments a fresh draft starts with
    pub fn default_adjustments(&self) -> GlobalAdjustments {
        GlobalAdjustments {
            round_off: self.round_off,
            ..GlobalAdjustments::default()
        }
    }
}
