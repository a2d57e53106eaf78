//! Aggregate shapes handed to the presentation layer.
//!
//! Every figure is always present; an empty input yields zeros, never a
//! partially filled report.

use serde::{Deserialize, Serialize};

use crate::tenant::TenantPaymentStatus;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Portfolio-wide profit for one fiscal year.
pub struct AnnualProfit {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub transaction_expenses: f64,
    pub property_expenses: f64,
}

impl AnnualProfit {
    pub fn from_parts(total_income: f64, transaction_expenses: f64, property_expenses: f64) -> Self {
        let total_expenses = transaction_expenses + property_expenses;
        Self {
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            transaction_expenses,
            property_expenses,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Profit of a single property for one fiscal year.
pub struct PropertyProfit {
    pub income: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub transaction_expenses: f64,
    pub property_expenses: f64,
}

impl PropertyProfit {
    pub fn from_parts(income: f64, transaction_expenses: f64, property_expenses: f64) -> Self {
        let expenses = transaction_expenses + property_expenses;
        Self {
            income,
            expenses,
            net_profit: income - expenses,
            transaction_expenses,
            property_expenses,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One line of a per-property breakdown.
pub struct PropertyProfitRow {
    pub property_id: String,
    pub label: String,
    #[serde(flatten)]
    pub profit: PropertyProfit,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Owner-borne annual costs of a property, split by tax.
pub struct OwnerExpenseBreakdown {
    pub ibi: f64,
    pub garbage: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Transaction totals for one calendar month of a fiscal year.
pub struct MonthlyTotals {
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Headline figures for the back-office dashboard.
pub struct PortfolioStats {
    pub total_properties: usize,
    pub rented_properties: usize,
    /// Rounded percentage of rented properties; zero when there are none.
    pub occupancy_rate: u32,
    /// Income already marked as paid, across all dates.
    pub collected_income: f64,
    /// Pending or overdue amounts of any kind.
    pub pending_amount: f64,
    pub pending_count: usize,
    pub ledger_income: f64,
    pub ledger_expenses: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractStats {
    pub active: usize,
    pub renewal_soon: usize,
    pub monthly_rent_roll: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A tenant with their payment standing and current contract.
pub struct TenantSummary {
    pub tenant_id: String,
    pub label: String,
    pub payment_status: TenantPaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}
