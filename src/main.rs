use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use demograph::cli::Cli;
use demograph::config::Config;
use demograph::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;
    tracing::info!(
        country = %config.source.country,
        range = %format!("{}:{}", config.source.start_year, config.source.end_year),
        "starting demograph"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::runtime::run(config, runtime.handle())?;

    // Give a cancelled in-flight fetch a moment to observe its token.
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
