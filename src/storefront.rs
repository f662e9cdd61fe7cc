//! Storefront
//!
//! The root container: owns the catalog, the basket and the notification
//! sink, and exposes one command handler per user action.

use thiserror::Error;
use tracing::warn;

use crate::{
    basket::{Basket, BasketEntry, BasketError},
    catalog::Catalog,
    items::{BasketItem, ItemKey},
    notifications::{Notification, Notifier, TracingNotifier},
    prices::MonthlyCost,
    pricing::TotalPriceError,
};

/// Errors from storefront commands.
#[derive(Debug, Error, PartialEq)]
pub enum StorefrontError {
    /// No catalog listing has the requested key.
    #[error("No catalog listing with key {0}")]
    UnknownItem(ItemKey),

    /// Basket mutation error other than a duplicate add.
    #[error(transparent)]
    Basket(#[from] BasketError),

    /// Error calculating the basket total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Result of an add command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended to the basket.
    Added,

    /// The item was already present; the user has been notified.
    AlreadyInBasket,
}

/// Result of a toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was not in the basket and an add was attempted.
    Add(AddOutcome),

    /// The item was in the basket and has been removed.
    Removed,
}

/// Catalog, basket and notification sink for one session.
#[derive(Debug)]
pub struct Storefront<N: Notifier = TracingNotifier> {
    catalog: Catalog,
    basket: Basket,
    notifier: N,
}

impl Storefront<TracingNotifier> {
    /// Create a storefront that reports notifications through `tracing`.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_notifier(catalog, TracingNotifier)
    }
}

impl<N: Notifier> Storefront<N> {
    /// Create a storefront with an empty basket in the catalog's currency.
    pub fn with_notifier(catalog: Catalog, notifier: N) -> Self {
        let basket = Basket::new(catalog.currency());

        Self {
            catalog,
            basket,
            notifier,
        }
    }

    /// Add the catalog listing with the given key to the basket.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::UnknownItem`]: no listing has this key.
    /// - [`StorefrontError::Basket`]: the basket rejected the item for a reason
    ///   other than it already being present.
    pub fn add_to_basket(&mut self, key: &ItemKey) -> Result<AddOutcome, StorefrontError> {
        let item = self
            .catalog
            .listing(key)
            .map(|listing| listing.to_basket_item())
            .ok_or_else(|| StorefrontError::UnknownItem(key.clone()))?;

        self.add_item(item)
    }

    /// Add a caller-built item to the basket.
    ///
    /// A duplicate add leaves the basket unchanged and sends an error
    /// notification naming the product.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Basket`] for basket errors other than a duplicate add.
    pub fn add_item(&mut self, item: BasketItem) -> Result<AddOutcome, StorefrontError> {
        match self.basket.add(item) {
            Ok(_entry) => Ok(AddOutcome::Added),
            Err(error @ BasketError::AlreadyInBasket { .. }) => {
                warn!(%error, "rejected basket add");

                self.notifier.notify(Notification::error(error.to_string()));

                Ok(AddOutcome::AlreadyInBasket)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Remove the item added under `key`. Returns how many entries were removed.
    pub fn remove_from_basket(&mut self, key: &ItemKey) -> usize {
        self.basket.remove(key)
    }

    /// Remove the item if it is in the basket, otherwise add it.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Storefront::add_to_basket`] when an add is attempted.
    pub fn toggle(&mut self, key: &ItemKey) -> Result<ToggleOutcome, StorefrontError> {
        if self.is_in_basket(key) {
            self.remove_from_basket(key);

            return Ok(ToggleOutcome::Removed);
        }

        self.add_to_basket(key).map(ToggleOutcome::Add)
    }

    /// Check whether an item was added under `key`.
    pub fn is_in_basket(&self, key: &ItemKey) -> bool {
        self.basket.contains(key)
    }

    /// Total monthly cost of the basket.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::TotalPrice`] if the total could not be calculated.
    pub fn total(&self) -> Result<MonthlyCost, StorefrontError> {
        Ok(self.basket.total()?)
    }

    /// Total monthly cost with currency symbol, e.g. `"£39.98"`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::TotalPrice`] if the total could not be calculated.
    pub fn total_display(&self) -> Result<String, StorefrontError> {
        Ok(self.basket.total_price()?)
    }

    /// Basket entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &BasketEntry> {
        self.basket.iter()
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The basket.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// The notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The notification sink, mutably.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
