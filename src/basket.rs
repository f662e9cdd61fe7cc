//! Basket

use std::fmt;

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{BasketItem, ItemKey},
    prices::{MonthlyCost, format_amount, format_price},
    pricing::{TotalPriceError, total_monthly_cost},
};

/// Errors related to basket mutation.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// An item with the same effective identity is already in the basket.
    #[error("{product_name} is already in the basket")]
    AlreadyInBasket {
        /// Name of the rejected product
        product_name: String,

        /// Identity that collided
        identity: EffectiveKey,
    },

    /// An item's currency differs from the basket currency (item key, item currency, basket currency).
    #[error("Item {0} has currency {1}, but basket has currency {2}")]
    CurrencyMismatch(ItemKey, &'static str, &'static str),

    /// An item was not found in the basket.
    #[error("Item {0} not found")]
    ItemNotFound(usize),
}

/// Identity used to decide whether two basket entries are the same item.
///
/// Made from the item's category and its listing key, and rendered as
/// `{type}_{key}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectiveKey {
    kind: String,
    key: ItemKey,
}

impl EffectiveKey {
    /// Effective identity of a candidate item.
    pub fn of(item: &BasketItem) -> Self {
        Self {
            kind: item.kind().to_string(),
            key: item.key().clone(),
        }
    }
}

impl fmt::Display for EffectiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.key)
    }
}

/// An item in the basket, stamped with its effective identity.
#[derive(Clone, Debug, PartialEq)]
pub struct BasketEntry {
    identity: EffectiveKey,
    item: BasketItem,
}

impl BasketEntry {
    /// Effective identity of the entry
    pub fn identity(&self) -> &EffectiveKey {
        &self.identity
    }

    /// The item snapshot
    pub fn item(&self) -> &BasketItem {
        &self.item
    }
}

/// Basket
#[derive(Debug, Clone)]
pub struct Basket {
    entries: Vec<BasketEntry>,
    currency: &'static Currency,
}

impl Basket {
    /// Create a new empty basket.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            entries: Vec::new(),
            currency,
        }
    }

    /// Create a new basket with the given items, added in order.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if two items share an effective identity or
    /// there was a currency mismatch error.
    pub fn with_items(
        items: impl IntoIterator<Item = BasketItem>,
        currency: &'static Currency,
    ) -> Result<Self, BasketError> {
        let mut basket = Self::new(currency);

        items
            .into_iter()
            .try_for_each(|item| basket.add(item).map(|_entry| ()))?;

        Ok(basket)
    }

    /// Add an item to the end of the basket.
    ///
    /// # Errors
    ///
    /// - [`BasketError::AlreadyInBasket`]: an entry with the same effective identity exists;
    ///   the basket is unchanged.
    /// - [`BasketError::CurrencyMismatch`]: the item is priced in another currency.
    pub fn add(&mut self, item: BasketItem) -> Result<&BasketEntry, BasketError> {
        let identity = EffectiveKey::of(&item);

        if self.contains_identity(&identity) {
            return Err(BasketError::AlreadyInBasket {
                product_name: item.product_name().to_string(),
                identity,
            });
        }

        if let Some(cost) = item.monthly_cost() {
            let item_currency = cost.currency();

            if item_currency != self.currency {
                return Err(BasketError::CurrencyMismatch(
                    item.key().clone(),
                    item_currency.iso_alpha_code,
                    self.currency.iso_alpha_code,
                ));
            }
        }

        debug!(identity = %identity, product = item.product_name(), "added item to basket");

        let index = self.entries.len();

        self.entries.push(BasketEntry { identity, item });

        self.get_item(index)
    }

    /// Remove every entry added under `key`, returning how many were removed.
    ///
    /// Removing a key that is not in the basket does nothing.
    pub fn remove(&mut self, key: &ItemKey) -> usize {
        let before = self.entries.len();

        self.entries.retain(|entry| entry.item.key() != key);

        let removed = before - self.entries.len();

        if removed > 0 {
            debug!(key = %key, removed, "removed item from basket");
        }

        removed
    }

    /// Check whether an entry was added under exactly `key`.
    pub fn contains(&self, key: &ItemKey) -> bool {
        self.entries.iter().any(|entry| entry.item.key() == key)
    }

    /// Check whether an entry with the given effective identity exists.
    pub fn contains_identity(&self, identity: &EffectiveKey) -> bool {
        self.entries.iter().any(|entry| &entry.identity == identity)
    }

    /// Calculate the total monthly cost of the basket.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or currency mismatch error.
    pub fn total(&self) -> Result<MonthlyCost, TotalPriceError> {
        total_monthly_cost(self.items(), self.currency)
    }

    /// The total to two decimal places, e.g. `"39.98"`.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if the total could not be calculated.
    pub fn total_amount(&self) -> Result<String, TotalPriceError> {
        self.total().map(|total| format_amount(&total))
    }

    /// The total with its currency symbol, e.g. `"£39.98"`.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if the total could not be calculated.
    pub fn total_price(&self) -> Result<String, TotalPriceError> {
        self.total().map(|total| format_price(&total))
    }

    /// Get an entry from the basket by position.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError::ItemNotFound` if the item is not found.
    pub fn get_item(&self, index: usize) -> Result<&BasketEntry, BasketError> {
        self.entries
            .get(index)
            .ok_or(BasketError::ItemNotFound(index))
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BasketEntry> {
        self.entries.iter()
    }

    /// Iterate over the item snapshots in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &BasketItem> {
        self.entries.iter().map(BasketEntry::item)
    }

    /// Get the number of entries in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the currency of the basket.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn item(name: &str, key: &str, minor: i64) -> BasketItem {
        BasketItem::new(
            name,
            "Sample Type",
            ItemKey::from(key),
            Some(Money::from_minor(minor, GBP)),
            12,
        )
    }

    fn test_items() -> [BasketItem; 3] {
        [
            item("Sky F1", "Sports_0", 1800),
            item("Sky Golf", "Sports_1", 1200),
            item("Sky Cinema", "Movies_0", 1100),
        ]
    }

    fn keys(basket: &Basket) -> Vec<&str> {
        basket.items().map(|item| item.key().as_str()).collect()
    }

    #[test]
    fn new_with_currency() {
        let basket = Basket::new(GBP);

        assert_eq!(basket.currency, GBP);
        assert!(basket.is_empty());
    }

    #[test]
    fn add_appends_and_stamps_identity() -> TestResult {
        let mut basket = Basket::new(GBP);

        let entry = basket.add(item("Sample Product", "Sample Type_0", 1999))?;

        assert_eq!(entry.identity().to_string(), "Sample Type_Sample Type_0");
        assert_eq!(basket.len(), 1);

        Ok(())
    }

    #[test]
    fn add_rejects_duplicate_identity() -> TestResult {
        let mut basket = Basket::new(GBP);

        basket.add(item("Sample Product", "Sample Type_0", 1999))?;

        let result = basket.add(item("Sample Product", "Sample Type_0", 1999));

        match result {
            Err(BasketError::AlreadyInBasket { product_name, .. }) => {
                assert_eq!(product_name, "Sample Product");
            }
            other => panic!("expected AlreadyInBasket error, got {other:?}"),
        }

        assert_eq!(basket.len(), 1);

        Ok(())
    }

    #[test]
    fn add_currency_mismatch_errors() {
        let mut basket = Basket::new(GBP);

        let usd_item = BasketItem::new(
            "Sky F1",
            "Sports",
            ItemKey::from("Sports_0"),
            Some(Money::from_minor(100, USD)),
            12,
        );

        let result = basket.add(usd_item);

        match result {
            Err(BasketError::CurrencyMismatch(key, item_currency, basket_currency)) => {
                assert_eq!(key.as_str(), "Sports_0");
                assert_eq!(item_currency, USD.iso_alpha_code);
                assert_eq!(basket_currency, GBP.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }

        assert!(basket.is_empty());
    }

    #[test]
    fn with_items_preserves_order() -> TestResult {
        let basket = Basket::with_items(test_items(), GBP)?;

        assert_eq!(keys(&basket), vec!["Sports_0", "Sports_1", "Movies_0"]);

        Ok(())
    }

    #[test]
    fn with_items_rejects_duplicates() {
        let items = [item("Sky F1", "Sports_0", 1800), item("Sky F1", "Sports_0", 1800)];

        let result = Basket::with_items(items, GBP);

        assert!(matches!(result, Err(BasketError::AlreadyInBasket { .. })));
    }

    #[test]
    fn remove_keeps_order_of_remaining_entries() -> TestResult {
        let mut basket = Basket::with_items(test_items(), GBP)?;

        let removed = basket.remove(&ItemKey::from("Sports_1"));

        assert_eq!(removed, 1);
        assert_eq!(keys(&basket), vec!["Sports_0", "Movies_0"]);

        Ok(())
    }

    #[test]
    fn remove_missing_key_is_a_no_op() -> TestResult {
        let mut basket = Basket::with_items([item("Sample Product", "k1", 1999)], GBP)?;

        let removed = basket.remove(&ItemKey::from("k2"));

        assert_eq!(removed, 0);
        assert_eq!(keys(&basket), vec!["k1"]);

        Ok(())
    }

    #[test]
    fn remove_matches_key_across_categories() -> TestResult {
        let other_kind = BasketItem::new(
            "Sky Horror",
            "Movies",
            ItemKey::from("shared"),
            Some(Money::from_minor(600, GBP)),
            1,
        );

        let mut basket = Basket::with_items([item("Sky F1", "shared", 1800), other_kind], GBP)?;

        assert_eq!(basket.len(), 2);
        assert_eq!(basket.remove(&ItemKey::from("shared")), 2);
        assert!(basket.is_empty());

        Ok(())
    }

    #[test]
    fn contains_tracks_membership() -> TestResult {
        let mut basket = Basket::new(GBP);
        let key = ItemKey::from("Sports_0");

        assert!(!basket.contains(&key));

        basket.add(item("Sky F1", "Sports_0", 1800))?;
        assert!(basket.contains(&key));

        basket.remove(&key);
        assert!(!basket.contains(&key));

        Ok(())
    }

    #[test]
    fn total_with_items() -> TestResult {
        let basket = Basket::with_items(
            [item("Sample Product 2", "k2", 1999), item("Sample Product 3", "k3", 1999)],
            GBP,
        )?;

        assert_eq!(basket.total()?, Money::from_minor(3998, GBP));
        assert_eq!(basket.total_amount()?, "39.98");
        assert_eq!(basket.total_price()?, "£39.98");

        Ok(())
    }

    #[test]
    fn total_with_no_items() -> TestResult {
        let basket = Basket::new(GBP);

        assert_eq!(basket.total()?, Money::from_minor(0, GBP));
        assert_eq!(basket.total_amount()?, "0.00");

        Ok(())
    }

    #[test]
    fn get_item_returns_entry() -> TestResult {
        let basket = Basket::with_items(test_items(), GBP)?;

        let entry = basket.get_item(1)?;

        assert_eq!(entry.item().product_name(), "Sky Golf");

        Ok(())
    }

    #[test]
    fn get_item_missing_returns_error() {
        let basket = Basket::new(GBP);

        let err = basket.get_item(0).err();

        assert!(matches!(err, Some(BasketError::ItemNotFound(0))));
    }
}
