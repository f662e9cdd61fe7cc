//! Storefront CLI

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.config())?;

    cli.run()
}
