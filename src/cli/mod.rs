//! Terminal front-ends for the converter and the widget demo

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
pub mod widgets;

use crate::core::{RateProvider, RateTable};
use tracing::error;

/// Fetches the rate table, turning a failure into an empty table for
/// `base_currency` plus the error line to show the user.
pub async fn fetch_rates_or_report(
    provider: &dyn RateProvider,
    base_currency: &str,
) -> (RateTable, Option<ui::Message>) {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = provider.fetch_rates().await;
    pb.finish_and_clear();

    match result {
        Ok(rates) => (rates, None),
        Err(e) => {
            error!(error = %e, "Failed to fetch exchange rates");
            (
                RateTable::empty(base_currency),
                Some(ui::Message::error(format!(
                    "Could not fetch exchange rates: {e}"
                ))),
            )
        }
    }
}

/// Fetches the rate table, printing any failure instead of propagating it.
pub async fn load_rates(provider: &dyn RateProvider, base_currency: &str) -> RateTable {
    let (rates, failure) = fetch_rates_or_report(provider, base_currency).await;
    if let Some(message) = failure {
        println!("{message}");
    }
    rates
}
