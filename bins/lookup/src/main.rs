//! Coinage lookup CLI
//!
//! Host application over the currency catalog.
//!
//! Usage:
//!   coinage code <CODE>
//!   coinage validate <CODE>
//!   coinage symbol <SYMBOL>
//!   coinage unique <SYMBOL>
//!   coinage list
//!   coinage unique-symbols
//!
//! `--json` forces JSON output over the configured format.

mod command;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clap::Parser;
use coinage_shared::LookupConfig;
use command::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = LookupConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = cli.output(config.output);
    debug!(command = ?cli.command, ?output, "Running lookup");

    let rendered = cli.command.run(output)?;
    println!("{rendered}");

    debug!("Lookup complete");
    Ok(())
}
