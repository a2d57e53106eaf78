//! Headline statistics for the back-office dashboard and list screens.

use chrono::NaiveDate;

use rentbook_domain::{
    Amounted, Contract, ContractStats, ContractStatus, Displayable, PortfolioStats, Snapshot,
    TenantPaymentStatus, TenantSummary, Transaction, TransactionKind, TransactionStatus,
};

const UNKNOWN_TERM_PROGRESS: f64 = 50.0;

/// Narrows a transaction list the way the finances screen does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    /// Case-insensitive substring matched against description and category.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn kind(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if !txn.is_kind(kind) {
                return false;
            }
        }
        let needle = match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => needle.to_lowercase(),
            _ => return true,
        };
        [txn.description.as_deref(), txn.category.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub struct PortfolioService;

impl PortfolioService {
    /// Computes dashboard figures over every record in the snapshot, regardless of date.
    pub fn stats(snapshot: &Snapshot) -> PortfolioStats {
        let total_properties = snapshot.properties.len();
        let rented_properties = snapshot
            .properties
            .iter()
            .filter(|property| property.is_rented())
            .count();
        let occupancy_rate = if total_properties > 0 {
            ((rented_properties as f64 / total_properties as f64) * 100.0).round() as u32
        } else {
            0
        };

        let transactions = &snapshot.transactions;
        let collected_income = transactions
            .iter()
            .filter(|txn| {
                txn.is_kind(TransactionKind::Income)
                    && txn.status == Some(TransactionStatus::Paid)
            })
            .map(Amounted::amount)
            .sum();
        let outstanding: Vec<&Transaction> =
            transactions.iter().filter(|txn| txn.is_outstanding()).collect();

        PortfolioStats {
            total_properties,
            rented_properties,
            occupancy_rate,
            collected_income,
            pending_amount: outstanding.iter().map(|txn| txn.amount()).sum(),
            pending_count: outstanding.len(),
            ledger_income: kind_total(transactions, TransactionKind::Income),
            ledger_expenses: kind_total(transactions, TransactionKind::Expense),
        }
    }

    pub fn contract_stats(contracts: &[Contract]) -> ContractStats {
        let count = |status: ContractStatus| {
            contracts
                .iter()
                .filter(|contract| contract.status == Some(status))
                .count()
        };
        ContractStats {
            active: count(ContractStatus::Active),
            renewal_soon: count(ContractStatus::RenewalSoon),
            monthly_rent_roll: contracts
                .iter()
                .filter(|contract| contract.is_active())
                .filter_map(|contract| contract.rent_amount)
                .filter(|rent| rent.is_finite())
                .sum(),
        }
    }

    /// Elapsed share of a contract's term on `today`, in percent within `[0, 100]`.
    ///
    /// Contracts without a readable start and end date report 50.
    pub fn contract_progress(contract: &Contract, today: NaiveDate) -> f64 {
        let start = contract.start_date.as_ref().and_then(|date| date.local_date());
        let end = contract.end_date.as_ref().and_then(|date| date.local_date());
        let (Some(start), Some(end)) = (start, end) else {
            return UNKNOWN_TERM_PROGRESS;
        };
        let total = (end - start).num_days();
        let elapsed = (today - start).num_days();
        if total <= 0 {
            return if elapsed >= 0 { 100.0 } else { 0.0 };
        }
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Returns the first active contract on `property_id`.
    pub fn active_contract_for<'a>(
        contracts: &'a [Contract],
        property_id: &str,
    ) -> Option<&'a Contract> {
        contracts.iter().find(|contract| {
            contract.is_active() && contract.property_id.as_deref() == Some(property_id)
        })
    }

    /// Delinquent when any of the tenant's transactions is overdue, pending
    /// when any is pending, paid otherwise.
    pub fn tenant_payment_status(
        transactions: &[Transaction],
        tenant_id: &str,
    ) -> TenantPaymentStatus {
        let mut status = TenantPaymentStatus::Paid;
        for txn in transactions
            .iter()
            .filter(|txn| txn.tenant_id.as_deref() == Some(tenant_id))
        {
            match txn.status {
                Some(TransactionStatus::Overdue) => return TenantPaymentStatus::Delinquent,
                Some(TransactionStatus::Pending) => status = TenantPaymentStatus::Pending,
                Some(TransactionStatus::Paid) | None => {}
            }
        }
        status
    }

    /// Returns the first active or renewal-due contract held by `tenant_id`.
    pub fn current_contract_for_tenant<'a>(
        contracts: &'a [Contract],
        tenant_id: &str,
    ) -> Option<&'a Contract> {
        contracts.iter().find(|contract| {
            contract.is_current() && contract.tenant_id.as_deref() == Some(tenant_id)
        })
    }

    /// One summary per tenant, in input order.
    pub fn tenant_overview(snapshot: &Snapshot) -> Vec<TenantSummary> {
        snapshot
            .tenants
            .iter()
            .map(|tenant| {
                let contract = Self::current_contract_for_tenant(&snapshot.contracts, &tenant.id);
                TenantSummary {
                    tenant_id: tenant.id.clone(),
                    label: tenant.display_label(),
                    payment_status: Self::tenant_payment_status(
                        &snapshot.transactions,
                        &tenant.id,
                    ),
                    contract_id: contract.map(|contract| contract.id.clone()),
                    property_id: contract.and_then(|contract| contract.property_id.clone()),
                }
            })
            .collect()
    }

    pub fn filter_transactions<'a>(
        transactions: &'a [Transaction],
        filter: &TransactionFilter,
    ) -> Vec<&'a Transaction> {
        transactions.iter().filter(|txn| filter.matches(txn)).collect()
    }
}

fn kind_total(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_kind(kind))
        .map(Amounted::amount)
        .sum()
}
