//! Profit aggregation over transaction ledgers and property fixed costs.

use std::collections::BTreeSet;

use chrono::Datelike;
use tracing::debug;

use rentbook_domain::{
    AnnualProfit, Amounted, Displayable, MonthlyTotals, Property, PropertyProfit,
    PropertyProfitRow, Transaction, TransactionKind,
};

use crate::{fiscal::FiscalYearResolver, owner_expense_service::OwnerExpenseService};

/// Combines transaction income and expenses with owner-borne property costs.
///
/// Stateless apart from the injected resolver; every call works on the slices
/// it is given and never mutates them.
#[derive(Debug, Clone, Default)]
pub struct ProfitService {
    resolver: FiscalYearResolver,
}

impl ProfitService {
    pub fn new(resolver: FiscalYearResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &FiscalYearResolver {
        &self.resolver
    }

    /// Portfolio-wide profit for `year` (the current year when `None`).
    ///
    /// Expense transactions are summed across the whole ledger, whichever
    /// property they reference, and every listed property contributes its full
    /// owner cost even in years without activity.
    pub fn annual_profit(
        &self,
        properties: &[Property],
        transactions: &[Transaction],
        year: Option<i32>,
    ) -> AnnualProfit {
        let year = year.unwrap_or_else(|| self.resolver.current_year());
        let total_income = self.sum_for_year(transactions, year, TransactionKind::Income, None);
        let transaction_expenses =
            self.sum_for_year(transactions, year, TransactionKind::Expense, None);
        let property_expenses = properties
            .iter()
            .map(|property| OwnerExpenseService::annual_cost(property, Some(year)))
            .sum();

        let profit = AnnualProfit::from_parts(total_income, transaction_expenses, property_expenses);
        debug!(
            year,
            total_income = profit.total_income,
            total_expenses = profit.total_expenses,
            net_profit = profit.net_profit,
            "computed annual profit"
        );
        profit
    }

    /// Profit of one property for `year`, scoped to transactions that reference it.
    pub fn property_profit(
        &self,
        property: &Property,
        transactions: &[Transaction],
        year: Option<i32>,
    ) -> PropertyProfit {
        let year = year.unwrap_or_else(|| self.resolver.current_year());
        let scope = Some(property.id.as_str());
        let income = self.sum_for_year(transactions, year, TransactionKind::Income, scope);
        let transaction_expenses =
            self.sum_for_year(transactions, year, TransactionKind::Expense, scope);
        let property_expenses = OwnerExpenseService::annual_cost(property, Some(year));

        let profit = PropertyProfit::from_parts(income, transaction_expenses, property_expenses);
        debug!(
            year,
            property = %property.id,
            net_profit = profit.net_profit,
            "computed property profit"
        );
        profit
    }

    /// One row per property, in input order.
    pub fn property_breakdown(
        &self,
        properties: &[Property],
        transactions: &[Transaction],
        year: Option<i32>,
    ) -> Vec<PropertyProfitRow> {
        let year = year.unwrap_or_else(|| self.resolver.current_year());
        properties
            .iter()
            .map(|property| PropertyProfitRow {
                property_id: property.id.clone(),
                label: property.display_label(),
                profit: self.property_profit(property, transactions, Some(year)),
            })
            .collect()
    }

    /// Income and transaction expenses per calendar month of `year`.
    ///
    /// Always returns twelve entries, January first.
    pub fn monthly_series(&self, transactions: &[Transaction], year: i32) -> Vec<MonthlyTotals> {
        let mut months: Vec<MonthlyTotals> = (1..=12)
            .map(|month| MonthlyTotals {
                month,
                ..MonthlyTotals::default()
            })
            .collect();
        for txn in transactions {
            let Some(kind) = txn.kind else {
                continue;
            };
            let Ok(date) = self.resolver.resolve_date(txn.date.as_ref()) else {
                continue;
            };
            if date.year() != year {
                continue;
            }
            let slot = &mut months[date.month0() as usize];
            match kind {
                TransactionKind::Income => slot.income += txn.amount(),
                TransactionKind::Expense => slot.expenses += txn.amount(),
            }
        }
        months
    }

    /// Distinct fiscal years with at least one transaction, ascending.
    pub fn fiscal_years(&self, transactions: &[Transaction]) -> Vec<i32> {
        transactions
            .iter()
            .filter_map(|txn| self.resolver.resolve(txn.date.as_ref()).ok())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn sum_for_year(
        &self,
        transactions: &[Transaction],
        year: i32,
        kind: TransactionKind,
        property_id: Option<&str>,
    ) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_kind(kind))
            .filter(|txn| property_id.map_or(true, |id| txn.belongs_to(id)))
            .filter(|txn| self.resolver.in_year(txn.date.as_ref(), year))
            .map(Amounted::amount)
            .sum()
    }
}
