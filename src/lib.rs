//! # SheetBill Core
//!
//! Invoice calculation for Indian small-business billing: line-item
//! discounts and tax, invoice-wide discounts and charges, TDS/TCS, round-off,
//! the HSN/SAC-wise GST summary and the amount in words.
//!
//! ## Features
//!
//! - **Totals**: fixed-order aggregation of item discounts, global discount,
//!   additional charges, extra discount, TDS, TDS under GST and TCS
//! - **Round-off**: nearest-rupee rounding with the signed difference kept
//! - **GST summary**: CGST/SGST (or IGST) per HSN/SAC code and rate
//! - **Amount in words**: Indian numbering with crore and lakh
//! - **Validation**: pluggable draft validators for the form layer
//!
//! ## Quick Start
//!
//! ```rust
//! use sheetbill_core::{compute_totals, Discount, GlobalAdjustments, LineItem};
//! use bigdecimal::BigDecimal;
//!
//! let items = vec![LineItem::new(
//!     "Consulting".to_string(),
//!     Some(2),
//!     BigDecimal::from(500),
//!     BigDecimal::from(18),
//!     "998311".to_string(),
//! )
//! .with_discount(Discount::percentage(BigDecimal::from(10)))];
//!
//! let totals = compute_totals(&items, &GlobalAdjustments::default());
//! assert_eq!(totals.final_total, BigDecimal::from(1062));
//! ```

pub mod config;
pub mod invoice;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use invoice::*;
pub use tax::gst::*;
pub use traits::*;
pub use types::*;
pub use utils::money::{format_currency, format_currency_with, resolve_discount};
pub use utils::words::amount_in_words;
