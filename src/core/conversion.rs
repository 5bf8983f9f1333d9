//! Two-hop currency conversion through the base currency of a rate table.

use crate::core::rates::RateTable;
use snafu::Snafu;
use tracing::debug;

/// Reasons a conversion result is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ConversionError {
    #[snafu(display("No exchange rates are available"))]
    NoRates,

    #[snafu(display("Source currency {code} is not supported"))]
    UnsupportedSource { code: String },

    #[snafu(display("Target currency {code} is not supported"))]
    UnsupportedTarget { code: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, source: &str, target: &str) -> Self {
        Self {
            amount,
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn convert(&self, rates: &RateTable) -> Result<f64, ConversionError> {
        convert(self.amount, &self.source, &self.target, rates)
    }
}

/// Converts `amount` of `source` into `target` via the table's base currency.
///
/// Amounts are not validated and the result is not rounded.
pub fn convert(
    amount: f64,
    source: &str,
    target: &str,
    rates: &RateTable,
) -> Result<f64, ConversionError> {
    if rates.is_empty() {
        return NoRatesSnafu.fail();
    }

    if source == target {
        debug!("No currency conversion needed ({source} -> {target})");
        return Ok(amount);
    }

    let amount_in_base = if rates.is_base(source) {
        amount
    } else {
        match rates.get(source) {
            Some(rate) => amount / rate,
            None => return UnsupportedSourceSnafu { code: source }.fail(),
        }
    };

    let result = if rates.is_base(target) {
        amount_in_base
    } else {
        match rates.get(target) {
            Some(rate) => amount_in_base * rate,
            None => return UnsupportedTargetSnafu { code: target }.fail(),
        }
    };

    debug!("Converted {amount} from {source} to {target} via {}: {result}", rates.base());
    Ok(result)
}
