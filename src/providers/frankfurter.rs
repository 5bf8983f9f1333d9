use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::core::rates::{RateProvider, RateTable};

// RateProvider over the Frankfurter API. The service quotes against EUR unless
// asked otherwise; `fallback_base` only labels responses that omit `base`.
pub struct FrankfurterProvider {
    base_url: String,
    fallback_base: String,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str, fallback_base: &str) -> Self {
        FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_base: fallback_base.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    base: Option<String>,
    date: Option<String>,
    #[serde(default)]
    rates: serde_json::Value,
}

impl FrankfurterResponse {
    fn into_rate_table(self, fallback_base: &str) -> RateTable {
        let entries: HashMap<String, serde_json::Value> = match self.rates {
            serde_json::Value::Null => {
                warn!("Response has no rates field");
                HashMap::new()
            }
            value => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed rates field in response");
                HashMap::new()
            }),
        };

        // Non-numeric entries are skipped one by one so valid rates survive
        let rates = entries
            .into_iter()
            .filter_map(|(code, value)| match value.as_f64() {
                Some(rate) => Some((code, rate)),
                None => {
                    warn!(currency = %code, value = %value, "Dropping non-numeric rate");
                    None
                }
            });

        let date = self.date.as_deref().and_then(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .inspect_err(|e| debug!("Ignoring unparseable date {d}: {e}"))
                .ok()
        });

        let base = self.base.as_deref().unwrap_or(fallback_base);
        RateTable::new(base, date, rates)
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    #[instrument(name = "FrankfurterRatesFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_rates(&self) -> Result<RateTable> {
        let url = format!("{}/latest", self.base_url);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for exchange rates",
                response.status()
            ));
        }

        let text = response.text().await?;

        let data: FrankfurterResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for exchange rates: {}", e))?;

        let table = data.into_rate_table(&self.fallback_base);
        debug!(
            base = table.base(),
            count = table.len(),
            "Received exchange rates"
        );
        Ok(table)
    }
}
