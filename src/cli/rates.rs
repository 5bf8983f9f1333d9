use super::ui;
use crate::core::{RateProvider, RateTable};
use anyhow::Result;
use comfy_table::Cell;

impl RateTable {
    pub fn display_as_table(&self) -> String {
        let base = self.base();
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Per 1 {base}")),
            ui::header_cell(&format!("1 unit in {base}")),
        ]);

        for (code, rate) in self.iter() {
            table.add_row(vec![
                Cell::new(code),
                ui::rate_cell(rate),
                ui::rate_cell(1.0 / rate),
            ]);
        }

        let as_of = self
            .date()
            .map_or("latest".to_string(), |d| format!("as of {d}"));
        let mut output = format!(
            "Exchange rates: {} {}\n\n",
            ui::style_text(base, ui::StyleType::Title),
            ui::style_text(&as_of, ui::StyleType::Subtle)
        );
        output.push_str(&table.to_string());
        output
    }
}

/// Lists every selectable currency, marking the default selection.
pub fn currency_list(rates: &RateTable) -> Vec<String> {
    let default = rates.default_currency();
    rates
        .currencies()
        .into_iter()
        .map(|code| {
            if default.as_deref() == Some(code.as_str()) {
                format!("{code} (default)")
            } else {
                code
            }
        })
        .collect()
}

pub async fn run(provider: &dyn RateProvider, base_currency: &str) -> Result<()> {
    let rates = super::load_rates(provider, base_currency).await;

    if rates.is_empty() {
        println!("{}", ui::Message::warning("No exchange rates available"));
        return Ok(());
    }

    println!("{}", rates.display_as_table());
    Ok(())
}

pub async fn run_currencies(provider: &dyn RateProvider, base_currency: &str) -> Result<()> {
    let rates = super::load_rates(provider, base_currency).await;

    if rates.is_empty() {
        println!("{}", ui::Message::warning("No exchange rates available"));
    }

    for line in currency_list(&rates) {
        println!("{line}");
    }
    Ok(())
}
