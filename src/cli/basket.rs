use std::{io, str::FromStr};

use anyhow::Result;
use clap::Args;
use storefront::{
    catalog::Catalog,
    items::ItemKey,
    notifications::NotificationLog,
    prices::format_price,
    storefront::Storefront,
};
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

#[derive(Debug, Args)]
pub(crate) struct BasketArgs {
    /// Actions applied in order: `add=KEY`, `remove=KEY` or `toggle=KEY`
    #[arg(value_name = "ACTION")]
    actions: Vec<BasketAction>,
}

/// One user click against the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BasketAction {
    Add(ItemKey),
    Remove(ItemKey),
    Toggle(ItemKey),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum BasketActionError {
    #[error("expected ACTION=KEY, got {0:?}")]
    MissingKey(String),

    #[error("unknown action {0:?}; expected add, remove or toggle")]
    UnknownAction(String),
}

impl FromStr for BasketAction {
    type Err = BasketActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, key) = s
            .split_once('=')
            .filter(|(_, key)| !key.is_empty())
            .ok_or_else(|| BasketActionError::MissingKey(s.to_string()))?;

        let key = ItemKey::from(key);

        match action {
            "add" => Ok(Self::Add(key)),
            "remove" => Ok(Self::Remove(key)),
            "toggle" => Ok(Self::Toggle(key)),
            other => Err(BasketActionError::UnknownAction(other.to_string())),
        }
    }
}

pub(crate) fn run(out: &mut impl io::Write, catalog: Catalog, args: &BasketArgs) -> Result<()> {
    let mut storefront = Storefront::with_notifier(catalog, NotificationLog::default());

    for action in &args.actions {
        apply(&mut storefront, action)?;

        for notification in storefront.notifier_mut().drain() {
            writeln!(out, "! {notification}")?;
        }
    }

    write_basket(out, &storefront)
}

fn apply(storefront: &mut Storefront<NotificationLog>, action: &BasketAction) -> Result<()> {
    match action {
        BasketAction::Add(key) => {
            storefront.add_to_basket(key)?;
        }
        BasketAction::Remove(key) => {
            storefront.remove_from_basket(key);
        }
        BasketAction::Toggle(key) => {
            storefront.toggle(key)?;
        }
    }

    Ok(())
}

fn write_basket(out: &mut impl io::Write, storefront: &Storefront<NotificationLog>) -> Result<()> {
    if storefront.basket().is_empty() {
        writeln!(out, "Your basket is empty.")?;
    } else {
        let mut builder = Builder::default();

        builder.push_record(["Key", "Product", "Monthly", "Contract"]);

        for entry in storefront.entries() {
            let item = entry.item();

            builder.push_record([
                item.key().to_string(),
                item.product_name().to_string(),
                item.monthly_cost().map_or_else(
                    || "-".to_string(),
                    |cost| format!("{} per month", format_price(cost)),
                ),
                format!("{} months", item.contract_length()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());

        writeln!(out, "{table}")?;
    }

    writeln!(out, "Total Amount: {}", storefront.total_display()?)?;

    Ok(())
}
