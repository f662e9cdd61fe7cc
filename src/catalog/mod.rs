//! Catalog

use rusty_money::iso::Currency;

use crate::{
    items::{BasketItem, ItemKey, KeyStrategy},
    products::Product,
};

pub mod groups;
pub mod images;

use groups::{CatalogGroups, group_by_kind};
use images::ImageAssets;

/// The static, read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    images: ImageAssets,
    currency: &'static Currency,
    key_strategy: KeyStrategy,
}

/// A product as shown in the catalog, with its listing key.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'c> {
    /// Listing key used for basket membership
    pub key: ItemKey,

    /// The catalog product
    pub product: &'c Product,

    /// Image asset, if one is registered for the product name
    pub image: Option<&'c str>,
}

impl Listing<'_> {
    /// Snapshot the listing into a basket item.
    pub fn to_basket_item(&self) -> BasketItem {
        BasketItem::new(
            self.product.name.clone(),
            self.product.kind.clone(),
            self.key.clone(),
            Some(self.product.monthly_cost),
            self.product.contract_length,
        )
    }
}

/// One category's listings, in catalog order.
#[derive(Debug, Clone)]
pub struct CatalogSection<'c> {
    /// Category name
    pub name: &'c str,

    /// Listings in the category
    pub listings: Vec<Listing<'c>>,
}

impl Catalog {
    /// Create a catalog from products in source order.
    pub fn new(products: impl Into<Vec<Product>>, currency: &'static Currency) -> Self {
        Self {
            products: products.into(),
            images: ImageAssets::default(),
            currency,
            key_strategy: KeyStrategy::default(),
        }
    }

    /// Use the given image lookup.
    #[must_use]
    pub fn with_images(mut self, images: ImageAssets) -> Self {
        self.images = images;
        self
    }

    /// Use the given key strategy for listing keys.
    #[must_use]
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    /// Products in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products grouped by category.
    pub fn groups(&self) -> CatalogGroups<'_> {
        group_by_kind(&self.products)
    }

    /// Listings grouped by category, keys assigned by position within each category.
    pub fn sections(&self) -> Vec<CatalogSection<'_>> {
        self.groups()
            .iter()
            .map(|group| CatalogSection {
                name: group.name(),
                listings: group
                    .iter()
                    .enumerate()
                    .map(|(index, product)| Listing {
                        key: self.key_strategy.key_for(&product.kind, &product.name, index),
                        product,
                        image: self.images.get(&product.name),
                    })
                    .collect(),
            })
            .collect()
    }

    /// All listings, category by category.
    pub fn listings(&self) -> impl Iterator<Item = Listing<'_>> {
        self.sections()
            .into_iter()
            .flat_map(|section| section.listings)
    }

    /// Find the listing with the given key.
    pub fn listing(&self, key: &ItemKey) -> Option<Listing<'_>> {
        self.listings().find(|listing| &listing.key == key)
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Image lookup for the catalog.
    pub fn images(&self) -> &ImageAssets {
        &self.images
    }

    /// Key strategy in use.
    pub fn key_strategy(&self) -> KeyStrategy {
        self.key_strategy
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
