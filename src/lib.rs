//! Storefront
//!
//! Storefront is a small catalog-and-basket engine: a static product catalog grouped by
//! category, an in-memory basket with duplicate rejection, and a running monthly total.

pub mod basket;
pub mod catalog;
pub mod fixtures;
pub mod items;
pub mod notifications;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod storefront;
