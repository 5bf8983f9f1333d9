pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::convert::ConvertInput;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Convert(ConvertInput),
    Rates,
    Currencies,
    Widgets,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    if command == AppCommand::Widgets {
        return cli::widgets::run();
    }

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::FrankfurterProvider::new(
        &config.providers.frankfurter.base_url,
        &config.base_currency,
    );

    match command {
        AppCommand::Convert(mut input) => {
            if input.to.is_none() {
                input.to = config.default_target.clone();
            }
            cli::convert::run(&provider, &input, &config.base_currency).await
        }
        AppCommand::Rates => cli::rates::run(&provider, &config.base_currency).await,
        AppCommand::Currencies => {
            cli::rates::run_currencies(&provider, &config.base_currency).await
        }
        AppCommand::Widgets => cli::widgets::run(),
    }
}
