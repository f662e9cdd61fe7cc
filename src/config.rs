//! CLI configuration

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use storefront::{fixtures::Fixture, items::KeyStrategy};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,

    /// One JSON object per event
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct StorefrontConfig {
    /// Directory holding the `catalogs/` fixtures
    #[arg(long, global = true, env = "STOREFRONT_FIXTURES", default_value = "./fixtures")]
    pub(crate) fixtures: PathBuf,

    /// Catalog fixture name
    #[arg(long, global = true, env = "STOREFRONT_CATALOG", default_value = "sky")]
    pub(crate) catalog: String,

    /// How listing keys are derived
    #[arg(long, global = true, value_enum, default_value_t = KeyStrategy::Positional)]
    pub(crate) key_strategy: KeyStrategy,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

impl StorefrontConfig {
    /// Fixture loader for the configured directory and key strategy.
    pub(crate) fn fixture(&self) -> Fixture {
        Fixture::with_base_path(&self.fixtures).with_key_strategy(self.key_strategy)
    }
}
