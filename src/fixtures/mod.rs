//! Fixtures
//!
//! Static catalog data loaded once at startup from YAML files under
//! `<base>/catalogs/<name>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::info;

use crate::{catalog::Catalog, items::KeyStrategy, prices::PriceError};

pub mod catalogs;

use catalogs::CatalogFixture;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Catalog-level price or currency error
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Invalid monthly cost on a product
    #[error("Invalid monthly cost for {product}: {source}")]
    InvalidPrice {
        /// Product name
        product: String,

        /// Underlying parse error
        source: PriceError,
    },

    /// Invalid contract length
    #[error("Invalid contract length: {0}")]
    InvalidContractLength(String),

    /// Product has no category
    #[error("Product {0} has no type")]
    MissingCategory(String),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Key strategy applied to loaded catalogs
    key_strategy: KeyStrategy,
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            key_strategy: KeyStrategy::default(),
        }
    }

    /// Use the given key strategy for catalogs loaded from now on.
    #[must_use]
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    /// Path of the named catalog file.
    pub fn catalog_path(&self, name: &str) -> PathBuf {
        self.base_path.join("catalogs").join(format!("{name}.yml"))
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any product is malformed.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let contents = fs::read_to_string(self.catalog_path(name))?;
        let catalog = CatalogFixture::from_yaml(&contents)?.into_catalog(self.key_strategy)?;

        info!(
            catalog = name,
            products = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "loaded catalog"
        );

        Ok(catalog)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
