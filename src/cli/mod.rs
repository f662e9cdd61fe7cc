use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::StorefrontConfig;

mod basket;
mod catalog;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and basket CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the catalog grouped by category, with listing keys
    Catalog,

    /// Apply basket actions in order and print the resulting basket
    Basket(basket::BasketArgs),
}

impl Cli {
    pub(crate) fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub(crate) fn run(self) -> Result<()> {
        let catalog = self.config.fixture().load_catalog(&self.config.catalog)?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();

        match self.command {
            Commands::Catalog => catalog::write_catalog(&mut handle, &catalog),
            Commands::Basket(args) => basket::run(&mut handle, catalog, &args),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_parse_after_subcommand() -> testresult::TestResult {
        let cli = Cli::try_parse_from([
            "storefront",
            "basket",
            "add=Sports_0",
            "--key-strategy",
            "named",
            "--catalog",
            "demo",
        ])?;

        assert_eq!(cli.config.catalog, "demo");
        assert_eq!(cli.config.key_strategy, storefront::items::KeyStrategy::Named);
        assert!(matches!(cli.command, Commands::Basket(_)));

        Ok(())
    }
}
