//! Products

use crate::prices::MonthlyCost;

/// A subscription product from the static catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Category the product is listed under
    pub kind: String,

    /// Cost per month
    pub monthly_cost: MonthlyCost,

    /// Minimum contract length, in months
    pub contract_length: u32,
}
