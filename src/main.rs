use anyhow::{anyhow, Result};
use clap::Parser;

use code_outline::cli::CliArgs;
use code_outline::runtime::app;

fn main() -> Result<()> {
    code_outline::tracing::init();

    let config = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    tracing::debug!(?config, "Starting code-outline");

    app::run(config)
}
