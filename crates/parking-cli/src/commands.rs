//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_quote, output_rates, output_sentinel};
use parking_app::app::{price_batch, quote_stay};
use parking_app::config::Config;
use parking_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn execute(cli: Cli) -> Result<()> {
    // Reset must work even when the stored config is unreadable
    if let Commands::Config {
        reset: true, show, ..
    } = cli.command
    {
        return cmd_reset_config(show);
    }

    // Load config
    let config = Config::load()?;

    // CLI format overrides config
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Quote { hours, vehicle } => cmd_quote(&config, output_format, &hours, &vehicle),
        Commands::Rates => output_rates(output_format),
        Commands::Batch { csv } => cmd_batch(csv, output_format),
        Commands::Config {
            show,
            set_output,
            set_sentinel,
            ..
        } => cmd_config(config, show, set_output, set_sentinel),
    }
}

fn cmd_quote(config: &Config, output_format: OutputFormat, hours: &str, vehicle: &str) -> Result<()> {
    match quote_stay(hours, vehicle) {
        Ok(quote) => output_quote(output_format, hours, &quote),
        Err(e) if config.sentinel_output => {
            warn!(error = %e, "quote rejected");
            output_sentinel(output_format)
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_batch(csv_path: PathBuf, output_format: OutputFormat) -> Result<()> {
    let run = price_batch(&csv_path)?;
    output_batch(output_format, &run)?;

    if run.summary.rejected > 0 {
        eprintln!("\nWarning: {} session(s) were rejected", run.summary.rejected);
    }
    Ok(())
}

fn cmd_reset_config(show: bool) -> Result<()> {
    let config = Config::default();
    config.save()?;
    info!("configuration reset to defaults");
    println!("Configuration reset to defaults.");
    if show {
        println!("{}", config);
    }
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_sentinel: Option<bool>,
) -> Result<()> {
    let mut modified = false;

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(sentinel) = set_sentinel {
        config.sentinel_output = sentinel;
        modified = true;
        println!("Sentinel output set to: {}", sentinel);
    }

    if modified {
        config.save()?;
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
