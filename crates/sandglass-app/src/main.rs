use std::io;
use std::process::ExitCode;

use clap::Parser;
use sandglass_app::cli::Cli;
use sandglass_app::config::parse_options;
use sandglass_app::process::Processor;
use sandglass_core::config::load_config;
use sandglass_core::constants::BOOTSTRAP_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(BOOTSTRAP_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping {BOOTSTRAP_LOG_LEVEL}");
    }

    let processor = Processor::new(parse_options(&config.parsing, &cli), cli.ical);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let summary = if cli.values.is_empty() {
        processor.run_reader(io::stdin().lock(), &mut out, &mut err)?
    } else {
        processor.run(&cli.values, &mut out, &mut err)?
    };

    if summary.failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
