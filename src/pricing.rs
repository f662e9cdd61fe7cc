//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{items::BasketItem, prices::MonthlyCost};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total monthly cost of a list of items.
///
/// Items without a cost count as zero; no items gives zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_monthly_cost<'i>(
    items: impl IntoIterator<Item = &'i BasketItem>,
    currency: &'static Currency,
) -> Result<MonthlyCost, TotalPriceError> {
    let total = items
        .into_iter()
        .filter_map(BasketItem::monthly_cost)
        .try_fold(Money::from_minor(0, currency), |acc, cost| acc.add(*cost))?;

    Ok(total)
}
