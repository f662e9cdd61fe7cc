//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketEntry, BasketError, EffectiveKey},
    catalog::{
        Catalog, CatalogSection, Listing,
        groups::{CatalogGroups, CategoryGroup, group_by_kind},
        images::ImageAssets,
    },
    fixtures::{Fixture, FixtureError, catalogs::CatalogFixture},
    items::{BasketItem, ItemKey, KeyStrategy},
    notifications::{Notification, NotificationLevel, NotificationLog, Notifier, TracingNotifier},
    prices::{MonthlyCost, PriceError, format_amount, format_price},
    pricing::TotalPriceError,
    products::Product,
    storefront::{AddOutcome, Storefront, StorefrontError, ToggleOutcome},
};
