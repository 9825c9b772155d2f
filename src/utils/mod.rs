//! Utility modules

pub mod money;
pub mod validation;
pub mod words;

pub use money::*;
pub use validation::*;
pub use words::*;
