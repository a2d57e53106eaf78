//! rentbook-storage-json
//!
//! Read-only entity store over collection payloads exported from the remote
//! back office. Each collection lives in its own JSON file inside one
//! directory; missing files are empty collections.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rentbook_core::{CoreError, EntityStore};
use rentbook_domain::{Contract, Property, Snapshot, Tenant, Transaction};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub const PROPERTIES_FILE: &str = "properties.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const CONTRACTS_FILE: &str = "contracts.json";
pub const TENANTS_FILE: &str = "tenants.json";

/// Entity store backed by exported collection files, loaded once at open.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    root: PathBuf,
    snapshot: Snapshot,
    skipped: usize,
}

impl JsonSnapshotStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CoreError::Storage(format!(
                "data directory `{}` does not exist",
                root.display()
            )));
        }

        let mut skipped = 0;
        let properties = load_collection::<Property>(&root.join(PROPERTIES_FILE), &mut skipped)?;
        let transactions =
            load_collection::<Transaction>(&root.join(TRANSACTIONS_FILE), &mut skipped)?;
        let contracts = load_collection::<Contract>(&root.join(CONTRACTS_FILE), &mut skipped)?;
        let tenants = load_collection::<Tenant>(&root.join(TENANTS_FILE), &mut skipped)?;
        debug!(
            root = %root.display(),
            properties = properties.len(),
            transactions = transactions.len(),
            contracts = contracts.len(),
            tenants = tenants.len(),
            skipped,
            "loaded snapshot"
        );

        Ok(Self {
            root,
            snapshot: Snapshot::new(properties, transactions, contracts).with_tenants(tenants),
            skipped,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of array entries that could not be read as records.
    pub fn skipped_records(&self) -> usize {
        self.skipped
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }
}

impl EntityStore for JsonSnapshotStore {
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

fn load_collection<T>(path: &Path, skipped: &mut usize) -> Result<Vec<T>, CoreError>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    let payload: Value =
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
    let Value::Array(entries) = payload else {
        return Err(CoreError::Serde(format!(
            "`{}` must contain a JSON array of records",
            path.display()
        )));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    file = %path.display(),
                    index,
                    "skipping unreadable record: {}",
                    err
                );
                *skipped += 1;
            }
        }
    }
    Ok(records)
}
