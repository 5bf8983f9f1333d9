//! Exchange rate tables and the provider abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

pub const DEFAULT_BASE_CURRENCY: &str = "EUR";
pub const PREFERRED_CURRENCY: &str = "USD";

/// Units of each currency per one unit of the base currency.
///
/// The base currency is implicitly 1.0 and is usually absent from `rates`.
/// Every stored rate is finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    date: Option<NaiveDate>,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn new<I>(base: &str, date: Option<NaiveDate>, rates: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let rates = rates
            .into_iter()
            .filter(|(code, rate)| {
                let valid = rate.is_finite() && *rate > 0.0;
                if !valid {
                    warn!(currency = %code, rate = %rate, "Dropping invalid rate");
                }
                valid
            })
            .collect();

        Self {
            base: base.to_string(),
            date,
            rates,
        }
    }

    /// A table with no rates, used when fetching fails.
    pub fn empty(base: &str) -> Self {
        Self::new(base, None, BTreeMap::new())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_base(&self, code: &str) -> bool {
        self.base == code
    }

    /// Raw lookup into the fetched mapping; does not special-case the base.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    /// Selectable currencies: every rate key plus the base, sorted and unique.
    pub fn currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rates.keys().cloned().collect();
        if !self.rates.contains_key(&self.base) {
            codes.push(self.base.clone());
        }
        codes.sort();
        codes
    }

    /// `USD` when selectable, otherwise the first selectable currency.
    pub fn default_currency(&self) -> Option<String> {
        let codes = self.currencies();
        if codes.iter().any(|c| c == PREFERRED_CURRENCY) {
            return Some(PREFERRED_CURRENCY.to_string());
        }
        codes.into_iter().next()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, f64)]) -> RateTable {
        RateTable::new(
            "EUR",
            None,
            pairs.iter().map(|(c, r)| (c.to_string(), *r)),
        )
    }

    #[test]
    fn test_invalid_rates_are_dropped() {
        let rates = table(&[("USD", 1.1), ("XXX", 0.0), ("YYY", -2.0), ("NAN", f64::NAN)]);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates.get("USD"), Some(1.1));
        assert!(rates.get("XXX").is_none());
    }

    #[test]
    fn test_currencies_include_base_sorted() {
        let rates = table(&[("USD", 1.1), ("INR", 90.0), ("GBP", 0.85)]);
        assert_eq!(rates.currencies(), vec!["EUR", "GBP", "INR", "USD"]);
    }

    #[test]
    fn test_currencies_do_not_duplicate_base() {
        let rates = table(&[("EUR", 1.0), ("USD", 1.1)]);
        assert_eq!(rates.currencies(), vec!["EUR", "USD"]);
    }

    #[test]
    fn test_default_currency_prefers_usd() {
        let rates = table(&[("INR", 90.0), ("USD", 1.1)]);
        assert_eq!(rates.default_currency().as_deref(), Some("USD"));

        let rates = table(&[("INR", 90.0), ("GBP", 0.85)]);
        assert_eq!(rates.default_currency().as_deref(), Some("EUR"));
    }

    #[test]
    fn test_empty_table_still_offers_base() {
        let rates = RateTable::empty("EUR");
        assert!(rates.is_empty());
        assert_eq!(rates.currencies(), vec!["EUR"]);
        assert_eq!(rates.default_currency().as_deref(), Some("EUR"));
    }
}
