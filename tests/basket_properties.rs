//! Integration tests for basket behaviour seen from the storefront's command handlers.
//!
//! Each test drives the basket the way the UI does: a click becomes an add,
//! remove or toggle, and the total and membership are read back afterwards.

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use storefront::prelude::*;

fn sample_item(name: &str, key: &str, minor: i64) -> BasketItem {
    BasketItem::new(
        name,
        "Sample Type",
        ItemKey::from(key),
        Some(Money::from_minor(minor, GBP)),
        12,
    )
}

fn sample_catalog() -> Catalog {
    let products = [
        ("Sky F1", "Sports", 1800),
        ("Sky Cinema", "Movies", 1100),
        ("Sky Golf", "Sports", 1800),
        ("Sky Horror", "Movies", 600),
    ]
    .map(|(name, kind, minor)| Product {
        name: name.to_string(),
        description: String::new(),
        kind: kind.to_string(),
        monthly_cost: Money::from_minor(minor, GBP),
        contract_length: 12,
    });

    Catalog::new(products, GBP)
}

fn identities(basket: &Basket) -> Vec<String> {
    basket.iter().map(|entry| entry.identity().to_string()).collect()
}

#[test]
fn grouping_then_flattening_reproduces_grouped_input() {
    let catalog = sample_catalog();
    let groups = catalog.groups();

    let names: Vec<&str> = groups.flatten().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Sky F1", "Sky Golf", "Sky Cinema", "Sky Horror"]);

    let regrouped: Vec<&Product> = groups.flatten().collect();
    let again = group_by_kind(regrouped.iter().copied());

    assert_eq!(again.flatten().collect::<Vec<_>>(), regrouped);
}

#[test]
fn repeated_adds_never_duplicate_an_identity() -> TestResult {
    let mut storefront = Storefront::with_notifier(sample_catalog(), NotificationLog::default());

    for key in ["Sports_0", "Movies_1", "Sports_0", "Sports_1", "Movies_1", "Sports_0"] {
        storefront.add_to_basket(&ItemKey::from(key))?;
    }

    let mut seen = identities(storefront.basket());
    let total = seen.len();

    seen.sort();
    seen.dedup();

    assert_eq!(seen.len(), total);
    assert_eq!(total, 3);
    assert_eq!(storefront.notifier().len(), 3);

    Ok(())
}

#[test]
fn add_then_remove_restores_previous_basket() -> TestResult {
    let mut basket = Basket::with_items(
        [sample_item("First", "k1", 100), sample_item("Second", "k2", 200)],
        GBP,
    )?;

    let before = identities(&basket);

    basket.add(sample_item("Third", "k3", 300))?;
    basket.remove(&ItemKey::from("k3"));

    assert_eq!(identities(&basket), before);

    Ok(())
}

#[test]
fn total_of_two_equal_costs() -> TestResult {
    let basket = Basket::with_items(
        [
            sample_item("Sample Product 2", "sample_key_2", 1999),
            sample_item("Sample Product 3", "sample_key_3", 1999),
        ],
        GBP,
    )?;

    assert_eq!(basket.total()?, Money::from_minor(3998, GBP));
    assert_eq!(basket.total_amount()?, "39.98");

    Ok(())
}

#[test]
fn duplicate_add_is_rejected_with_notification() -> TestResult {
    let mut storefront = Storefront::with_notifier(sample_catalog(), NotificationLog::default());
    let item = sample_item("Sample Product", "Sample Type_0", 1999);

    assert_eq!(storefront.add_item(item.clone())?, AddOutcome::Added);
    assert_eq!(storefront.add_item(item)?, AddOutcome::AlreadyInBasket);

    assert_eq!(storefront.basket().len(), 1);

    let messages: Vec<&str> = storefront
        .notifier()
        .notifications()
        .iter()
        .map(|notification| notification.message.as_str())
        .collect();

    assert_eq!(messages, vec!["Sample Product is already in the basket"]);

    Ok(())
}

#[test]
fn removing_an_absent_key_changes_nothing() -> TestResult {
    let mut basket = Basket::with_items([sample_item("Sample Product", "k1", 1999)], GBP)?;

    basket.remove(&ItemKey::from("k2"));

    assert_eq!(basket.len(), 1);
    assert!(basket.contains(&ItemKey::from("k1")));

    Ok(())
}

#[test]
fn empty_basket_totals_zero() -> TestResult {
    let basket = Basket::new(GBP);

    assert_eq!(basket.total()?, Money::from_minor(0, GBP));
    assert_eq!(basket.total_amount()?, "0.00");

    Ok(())
}

#[test]
fn membership_follows_add_and_remove() -> TestResult {
    let mut storefront = Storefront::with_notifier(sample_catalog(), NotificationLog::default());
    let key = ItemKey::from("Movies_1");

    storefront.add_to_basket(&key)?;
    assert!(storefront.is_in_basket(&key));

    storefront.remove_from_basket(&key);
    assert!(!storefront.is_in_basket(&key));

    Ok(())
}

#[test]
fn basket_snapshot_outlives_the_storefront() -> TestResult {
    let mut storefront = Storefront::with_notifier(sample_catalog(), NotificationLog::default());

    storefront.add_to_basket(&ItemKey::from("Sports_0"))?;

    let snapshot = storefront.basket().clone();
    drop(storefront);

    let entry = snapshot.get_item(0)?;

    assert_eq!(entry.item().product_name(), "Sky F1");
    assert_eq!(entry.item().monthly_cost(), Some(&Money::from_minor(1800, GBP)));

    Ok(())
}
