//! Plain-text rendering of the aggregates for terminal output.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;
use rentbook_config::Config;
use rentbook_core::PortfolioService;
use rentbook_domain::{
    AnnualProfit, Contract, ContractStats, Displayable, MonthlyTotals, PortfolioStats,
    PropertyProfit, PropertyProfitRow, TenantSummary, Transaction,
};

const DECIMAL_COMMA_LANGUAGES: [&str; 7] = ["ca", "es", "fr", "de", "it", "pt", "nl"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Money formatting derived from the configured locale and currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormat {
    currency: String,
    decimal_comma: bool,
}

impl AmountFormat {
    pub fn new(currency: impl Into<String>, decimal_comma: bool) -> Self {
        Self {
            currency: currency.into(),
            decimal_comma,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let language = config
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::new(
            config.currency.clone(),
            DECIMAL_COMMA_LANGUAGES.contains(&language.as_str()),
        )
    }

    pub fn amount(&self, value: f64) -> String {
        let digits = format!("{:.2}", value);
        let digits = if self.decimal_comma {
            digits.replace('.', ",")
        } else {
            digits
        };
        format!("{} {}", digits, self.currency)
    }

    fn signed(&self, value: f64) -> String {
        let text = self.amount(value);
        if value < 0.0 {
            text.red().to_string()
        } else {
            text.green().to_string()
        }
    }
}

fn header(out: &mut String, title: impl std::fmt::Display) {
    let _ = writeln!(out, "{}", format!("=== {} ===", title).bold());
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{:<22}{}", format!("{}:", label), value);
}

pub fn annual_profit(format: &AmountFormat, year: i32, profit: &AnnualProfit) -> String {
    let mut out = String::new();
    header(&mut out, format!("Portfolio profit {}", year));
    line(&mut out, "Income", format.amount(profit.total_income));
    line(&mut out, "Transaction expenses", format.amount(profit.transaction_expenses));
    line(&mut out, "Property expenses", format.amount(profit.property_expenses));
    line(&mut out, "Total expenses", format.amount(profit.total_expenses));
    line(&mut out, "Net profit", format.signed(profit.net_profit));
    out
}

pub fn property_profit(
    format: &AmountFormat,
    year: i32,
    label: &str,
    profit: &PropertyProfit,
) -> String {
    let mut out = String::new();
    header(&mut out, format!("{} {}", label, year));
    line(&mut out, "Income", format.amount(profit.income));
    line(&mut out, "Transaction expenses", format.amount(profit.transaction_expenses));
    line(&mut out, "Property expenses", format.amount(profit.property_expenses));
    line(&mut out, "Total expenses", format.amount(profit.expenses));
    line(&mut out, "Net profit", format.signed(profit.net_profit));
    out
}

pub fn breakdown(format: &AmountFormat, year: i32, rows: &[PropertyProfitRow]) -> String {
    let mut out = String::new();
    header(&mut out, format!("Per-property profit {}", year));
    if rows.is_empty() {
        out.push_str("No properties.\n");
        return out;
    }
    let _ = writeln!(
        out,
        "{:<32}{:>16}{:>16}{:>16}",
        "Property", "Income", "Expenses", "Net"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<32}{:>16}{:>16}{:>16}",
            row.label,
            format.amount(row.profit.income),
            format.amount(row.profit.expenses),
            format.amount(row.profit.net_profit)
        );
    }
    out
}

pub fn monthly(format: &AmountFormat, year: i32, months: &[MonthlyTotals]) -> String {
    let mut out = String::new();
    header(&mut out, format!("Monthly totals {}", year));
    let _ = writeln!(out, "{:<8}{:>16}{:>16}", "Month", "Income", "Expenses");
    for totals in months {
        let name = MONTH_NAMES
            .get(totals.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        let _ = writeln!(
            out,
            "{:<8}{:>16}{:>16}",
            name,
            format.amount(totals.income),
            format.amount(totals.expenses)
        );
    }
    out
}

pub fn stats(format: &AmountFormat, stats: &PortfolioStats, contracts: &ContractStats) -> String {
    let mut out = String::new();
    header(&mut out, "Portfolio");
    line(
        &mut out,
        "Properties",
        format!("{} ({} rented)", stats.total_properties, stats.rented_properties),
    );
    line(&mut out, "Occupancy", format!("{}%", stats.occupancy_rate));
    line(&mut out, "Collected income", format.amount(stats.collected_income));
    line(
        &mut out,
        "Pending",
        format!("{} ({} payments)", format.amount(stats.pending_amount), stats.pending_count),
    );
    line(&mut out, "Ledger income", format.amount(stats.ledger_income));
    line(&mut out, "Ledger expenses", format.amount(stats.ledger_expenses));
    line(&mut out, "Active contracts", contracts.active);
    line(&mut out, "Renewal soon", contracts.renewal_soon);
    line(&mut out, "Monthly rent roll", format.amount(contracts.monthly_rent_roll));
    out
}

pub fn contracts(format: &AmountFormat, contracts: &[Contract], today: NaiveDate) -> String {
    let mut out = String::new();
    header(&mut out, "Contracts");
    if contracts.is_empty() {
        out.push_str("No contracts.\n");
        return out;
    }
    for contract in contracts {
        let status = contract
            .status
            .map(|status| status.to_string())
            .unwrap_or_else(|| "Unknown".into());
        let rent = contract
            .rent_amount
            .map(|rent| format.amount(rent))
            .unwrap_or_else(|| "-".into());
        let progress = PortfolioService::contract_progress(contract, today);
        let _ = writeln!(
            out,
            "{:<32}{:<16}{:>16}{:>8.0}%",
            contract.display_label(),
            status,
            rent,
            progress
        );
    }
    out
}

pub fn tenants(tenants: &[TenantSummary]) -> String {
    let mut out = String::new();
    header(&mut out, "Tenants");
    if tenants.is_empty() {
        out.push_str("No tenants.\n");
        return out;
    }
    for tenant in tenants {
        let _ = writeln!(
            out,
            "{:<32}{:<12}{:<16}{}",
            tenant.label,
            tenant.payment_status.to_string(),
            tenant.contract_id.as_deref().unwrap_or("-"),
            tenant.property_id.as_deref().unwrap_or("-")
        );
    }
    out
}

pub fn transactions(format: &AmountFormat, transactions: &[&Transaction]) -> String {
    let mut out = String::new();
    header(&mut out, format!("Transactions ({})", transactions.len()));
    for txn in transactions {
        let date = txn
            .date
            .as_ref()
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<12}{:<24}{:>16}  {}",
            date,
            txn.display_label(),
            format.amount(txn.amount),
            txn.description.as_deref().unwrap_or_default()
        );
    }
    out
}

pub fn warnings(warnings: &[String], skipped_records: usize) -> String {
    let mut out = String::new();
    header(&mut out, "Data check");
    if skipped_records > 0 {
        let _ = writeln!(
            out,
            "{} {} unreadable record(s) skipped",
            "[!]".yellow(),
            skipped_records
        );
    }
    for warning in warnings {
        let _ = writeln!(out, "{} {}", "[!]".yellow(), warning);
    }
    if warnings.is_empty() && skipped_records == 0 {
        out.push_str("No issues found.\n");
    }
    out
}
