//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! These keep the long-standing call shape of the financial core: lenient
//! dates and the local system clock. Frontends that need a pinned clock or
//! strict dates should build a [`ProfitService`] directly.

use rentbook_domain::{AnnualProfit, DateValue, Property, PropertyProfit, Transaction};

use crate::{
    fiscal::FiscalYearResolver, owner_expense_service::OwnerExpenseService,
    profit_service::ProfitService,
};

/// Returns the fiscal year of `date`, or the current year when it is absent.
pub fn api_fiscal_year_of(date: Option<&DateValue>) -> i32 {
    FiscalYearResolver::system().fiscal_year_of(date)
}

/// Returns the owner's annual fixed costs for `property`.
pub fn api_owner_expenses(property: &Property, fiscal_year: Option<i32>) -> f64 {
    OwnerExpenseService::annual_cost(property, fiscal_year)
}

/// Portfolio-wide profit for `year` (defaults to the current year).
pub fn api_annual_profit(
    properties: &[Property],
    transactions: &[Transaction],
    year: Option<i32>,
) -> AnnualProfit {
    ProfitService::default().annual_profit(properties, transactions, year)
}

/// Profit of a single property for `year` (defaults to the current year).
pub fn api_property_profit(
    property: &Property,
    transactions: &[Transaction],
    year: Option<i32>,
) -> PropertyProfit {
    ProfitService::default().property_profit(property, transactions, year)
}
