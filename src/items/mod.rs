//! Items

use std::fmt;

use serde::Deserialize;

use crate::prices::MonthlyCost;

/// Identifier of a catalog listing, as used for basket membership and removal.
///
/// Built from the product's category plus either its position within the
/// category or its name, depending on the [`KeyStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(String);

impl ItemKey {
    /// Wrap an already-built key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for the product at `index` (zero-based) within category `kind`.
    pub fn positional(kind: &str, index: usize) -> Self {
        Self(format!("{kind}_{index}"))
    }

    /// Key for the product called `name` within category `kind`.
    pub fn named(kind: &str, name: &str) -> Self {
        Self(format!("{kind}_{name}"))
    }

    /// Key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ItemKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// How listing keys are derived from the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// `{type}_{index}`; reordering the source list changes keys.
    #[default]
    Positional,

    /// `{type}_{name}`; stable across reordering.
    Named,
}

impl KeyStrategy {
    /// Build the key for a product at `index` within its category.
    pub fn key_for(self, kind: &str, name: &str, index: usize) -> ItemKey {
        match self {
            Self::Positional => ItemKey::positional(kind, index),
            Self::Named => ItemKey::named(kind, name),
        }
    }
}

/// Snapshot of a product taken when it is put in the basket.
///
/// Later changes to the catalog do not reach items already in a basket.
#[derive(Clone, Debug, PartialEq)]
pub struct BasketItem {
    product_name: String,
    monthly_cost: Option<MonthlyCost>,
    contract_length: u32,
    kind: String,
    key: ItemKey,
}

impl BasketItem {
    /// Creates a new basket item.
    pub fn new(
        product_name: impl Into<String>,
        kind: impl Into<String>,
        key: ItemKey,
        monthly_cost: Option<MonthlyCost>,
        contract_length: u32,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            monthly_cost,
            contract_length,
            kind: kind.into(),
            key,
        }
    }

    /// Name of the product at the time it was added
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Monthly cost, if the candidate carried one
    pub fn monthly_cost(&self) -> Option<&MonthlyCost> {
        self.monthly_cost.as_ref()
    }

    /// Contract length in months
    pub fn contract_length(&self) -> u32 {
        self.contract_length
    }

    /// Category of the product
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Listing key the item was added under
    pub fn key(&self) -> &ItemKey {
        &self.key
    }
}
