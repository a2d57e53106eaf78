//! Rental contracts linking tenants to properties.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_ref",
        skip_serializing_if = "Option::is_none"
    )]
    pub tenant_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ContractStatus>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rent_amount: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateValue>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Contract {
    pub fn new(id: impl Into<String>, property_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            property_id: Some(property_id.into()),
            tenant_id: None,
            status: None,
            rent_amount: None,
            start_date: None,
            end_date: None,
            reference: None,
        }
    }

    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_rent(mut self, rent_amount: f64) -> Self {
        self.rent_amount = Some(rent_amount);
        self
    }

    pub fn with_term(mut self, start: impl Into<DateValue>, end: impl Into<DateValue>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, Some(ContractStatus::Active))
    }

    /// Active or due for renewal.
    pub fn is_current(&self) -> bool {
        matches!(
            self.status,
            Some(ContractStatus::Active) | Some(ContractStatus::RenewalSoon)
        )
    }
}

impl Identifiable for Contract {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Contract {
    fn display_label(&self) -> String {
        match &self.reference {
            Some(reference) => format!("contract:{} ({})", self.id, reference),
            None => format!("contract:{}", self.id),
        }
    }
}

/// Lifecycle state of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractStatus {
    Active,
    RenewalSoon,
    Finished,
}

impl SourceLabel for ContractStatus {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Actiu" | "Active" => Some(ContractStatus::Active),
            "Renovar aviat" | "RenewalSoon" => Some(ContractStatus::RenewalSoon),
            "Finalitzat" | "Finished" => Some(ContractStatus::Finished),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Actiu",
            ContractStatus::RenewalSoon => "Renovar aviat",
            ContractStatus::Finished => "Finalitzat",
        }
    }
}

impl Serialize for ContractStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractStatus::Active => "Active",
            ContractStatus::RenewalSoon => "Renewal Soon",
            ContractStatus::Finished => "Finished",
        };
        f.write_str(label)
    }
}
