use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::convert::ConvertInput;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                fxconv::AppCommand::Convert(ConvertInput { amount, from, to })
            }
            Commands::Rates => fxconv::AppCommand::Rates,
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Widgets => fxconv::AppCommand::Widgets,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert (minimum 0.01)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code, defaults to USD when available
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code, defaults to `default_target` from the config
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display the latest exchange rates
    Rates,
    /// List the currencies available for conversion
    Currencies,
    /// Render the static widget demo page
    Widgets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
