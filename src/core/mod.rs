//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::{ConversionError, ConversionRequest, convert};
pub use rates::{RateProvider, RateTable};
