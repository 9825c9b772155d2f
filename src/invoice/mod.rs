//! Invoice module containing line-item normalization, totals and records

pub mod calculator;
pub mod line_item;
pub mod record;
pub mod totals;

pub use calculator::*;
pub use line_item::*;
pub use record::*;
pub use totals::*;
