use std::collections::{HashMap, HashSet};

use rentbook_domain::{
    Contract, Displayable, Identifiable, Property, Snapshot, Tenant, Transaction, TransactionKind,
};

use crate::CoreError;

/// Selects transactions the way the entity store's `filter` call does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionCriteria {
    pub property_id: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionCriteria {
    pub fn for_property(property_id: impl Into<String>) -> Self {
        Self {
            property_id: Some(property_id.into()),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        let property_matches = self
            .property_id
            .as_deref()
            .map_or(true, |id| txn.belongs_to(id));
        let kind_matches = self.kind.map_or(true, |kind| txn.is_kind(kind));
        property_matches && kind_matches
    }
}

/// Read access to the collections owned by the remote entity store.
pub trait EntityStore: Send + Sync {
    fn list_properties(&self) -> Result<Vec<Property>, CoreError>;
    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
    fn list_contracts(&self) -> Result<Vec<Contract>, CoreError>;
    fn list_tenants(&self) -> Result<Vec<Tenant>, CoreError>;

    fn find_property(&self, id: &str) -> Result<Property, CoreError> {
        self.list_properties()?
            .into_iter()
            .find(|property| property.id == id)
            .ok_or_else(|| CoreError::PropertyNotFound(id.to_string()))
    }

    fn filter_transactions(
        &self,
        criteria: &TransactionCriteria,
    ) -> Result<Vec<Transaction>, CoreError> {
        Ok(self
            .list_transactions()?
            .into_iter()
            .filter(|txn| criteria.matches(txn))
            .collect())
    }

    /// Materializes every collection into one caller-owned snapshot.
    fn snapshot(&self) -> Result<Snapshot, CoreError> {
        Ok(Snapshot::new(
            self.list_properties()?,
            self.list_transactions()?,
            self.list_contracts()?,
        )
        .with_tenants(self.list_tenants()?))
    }
}

/// Entity store over an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl EntityStore for MemoryStore {
    fn list_properties(&self) -> Result<Vec<Property>, CoreError> {
        Ok(self.snapshot.properties.clone())
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.snapshot.transactions.clone())
    }

    fn list_contracts(&self) -> Result<Vec<Contract>, CoreError> {
        Ok(self.snapshot.contracts.clone())
    }

    fn list_tenants(&self) -> Result<Vec<Tenant>, CoreError> {
        Ok(self.snapshot.tenants.clone())
    }

    fn snapshot(&self) -> Result<Snapshot, CoreError> {
        Ok(self.snapshot.clone())
    }
}

/// Detects duplicate ids, dangling references and unreadable fields within a snapshot.
///
/// None of these stop an aggregation; they explain why a figure may look off.
pub fn snapshot_warnings(snapshot: &Snapshot) -> Vec<String> {
    let mut warnings = Vec::new();
    duplicate_ids(&snapshot.properties, &mut warnings);
    duplicate_ids(&snapshot.transactions, &mut warnings);
    duplicate_ids(&snapshot.contracts, &mut warnings);
    duplicate_ids(&snapshot.tenants, &mut warnings);

    let property_ids: HashSet<&str> = snapshot
        .properties
        .iter()
        .map(|property| property.id.as_str())
        .collect();

    for txn in &snapshot.transactions {
        if txn.kind.is_none() {
            warnings.push(format!(
                "transaction {} has no recognised type and is ignored by totals",
                txn.id
            ));
        }
        if let Some(property_id) = txn.property_id.as_deref() {
            if !property_ids.contains(property_id) {
                warnings.push(format!(
                    "transaction {} references unknown property {}",
                    txn.id, property_id
                ));
            }
        }
        if let Some(date) = txn.date.as_ref() {
            if !date.is_blank() && date.local_date().is_none() {
                warnings.push(format!(
                    "transaction {} has unreadable date `{}`",
                    txn.id, date
                ));
            }
        }
    }

    for contract in &snapshot.contracts {
        if let Some(property_id) = contract.property_id.as_deref() {
            if !property_ids.contains(property_id) {
                warnings.push(format!(
                    "{} references unknown property {}",
                    contract.display_label(),
                    property_id
                ));
            }
        }
    }
    warnings
}

fn duplicate_ids<T>(records: &[T], warnings: &mut Vec<String>)
where
    T: Identifiable + Displayable,
{
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let count = seen.entry(record.id()).or_insert(0);
        *count += 1;
        if *count == 2 {
            warnings.push(format!("duplicate id for {}", record.display_label()));
        }
    }
}
