use serde::{Deserialize, Serialize};

use crate::{contract::Contract, property::Property, tenant::Tenant, transaction::Transaction};

/// Caller-owned set of records fetched from the entity store.
///
/// Aggregations borrow from a snapshot and never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

impl Snapshot {
    pub fn new(
        properties: Vec<Property>,
        transactions: Vec<Transaction>,
        contracts: Vec<Contract>,
    ) -> Self {
        Self {
            properties,
            transactions,
            contracts,
            tenants: Vec::new(),
        }
    }

    pub fn with_tenants(mut self, tenants: Vec<Tenant>) -> Self {
        self.tenants = tenants;
        self
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn tenant(&self, id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.transactions.is_empty()
            && self.contracts.is_empty()
            && self.tenants.is_empty()
    }
}
