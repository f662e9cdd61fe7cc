//! Catalog Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    catalog::{Catalog, images::ImageAssets},
    fixtures::FixtureError,
    items::KeyStrategy,
    prices::{parse_amount, parse_currency},
    products::Product,
};

/// Catalog as written in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Currency code every product is priced in (e.g. "GBP")
    pub currency: String,

    /// Products in display order
    pub products: Vec<ProductFixture>,

    /// Product name -> image asset path
    #[serde(default)]
    pub images: FxHashMap<String, String>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Category
    #[serde(rename = "type")]
    pub kind: String,

    /// Monthly cost as a numeric string (e.g. "19.99")
    pub monthly_cost: String,

    /// Contract length in months as a numeric string (e.g. "12")
    pub contract_length: String,
}

impl CatalogFixture {
    /// Parse a catalog fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the text is not a valid catalog document.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Build the catalog, keeping the product order from the fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is unknown or any product is malformed.
    pub fn into_catalog(self, key_strategy: KeyStrategy) -> Result<Catalog, FixtureError> {
        let currency = parse_currency(&self.currency)?;

        let products = self
            .products
            .into_iter()
            .map(|product| product.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let images: ImageAssets = self.images.into_iter().collect();

        Ok(Catalog::new(products, currency)
            .with_images(images)
            .with_key_strategy(key_strategy))
    }
}

impl ProductFixture {
    /// Convert into a product priced in `currency`.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::MissingCategory`]: the `type` is blank.
    /// - [`FixtureError::InvalidPrice`]: the monthly cost is not a valid amount.
    /// - [`FixtureError::InvalidContractLength`]: the contract length is not a whole number of months.
    pub fn into_product(
        self,
        currency: &'static rusty_money::iso::Currency,
    ) -> Result<Product, FixtureError> {
        if self.kind.trim().is_empty() {
            return Err(FixtureError::MissingCategory(self.name));
        }

        let monthly_cost = parse_amount(&self.monthly_cost, currency).map_err(|source| {
            FixtureError::InvalidPrice {
                product: self.name.clone(),
                source,
            }
        })?;

        let contract_length = parse_contract_length(&self.contract_length)
            .ok_or_else(|| FixtureError::InvalidContractLength(self.contract_length.clone()))?;

        Ok(Product {
            name: self.name,
            description: self.description,
            kind: self.kind,
            monthly_cost,
            contract_length,
        })
    }
}

/// Parse a contract length such as `"12"` or `"12.0"` into whole months.
pub fn parse_contract_length(s: &str) -> Option<u32> {
    let trimmed = s.trim();

    trimmed.parse::<u32>().ok().or_else(|| {
        trimmed
            .strip_suffix(".0")
            .and_then(|whole| whole.parse::<u32>().ok())
    })
}
