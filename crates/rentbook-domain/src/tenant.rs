//! Tenants renting properties through contracts.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni_nie: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub tenant_since: Option<DateValue>,
}

impl Tenant {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            dni_nie: None,
            tenant_since: None,
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// First and last name joined by a space, skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Identifiable for Tenant {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Tenant {
    fn display_label(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            format!("tenant:{}", self.id)
        } else {
            format!("{} ({})", name, self.id)
        }
    }
}

/// Payment standing of a tenant, derived from their transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenantPaymentStatus {
    Paid,
    Pending,
    Delinquent,
}

impl SourceLabel for TenantPaymentStatus {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Pagat" | "Paid" => Some(TenantPaymentStatus::Paid),
            "Pendent" | "Pending" => Some(TenantPaymentStatus::Pending),
            "Morós" | "Delinquent" => Some(TenantPaymentStatus::Delinquent),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TenantPaymentStatus::Paid => "Pagat",
            TenantPaymentStatus::Pending => "Pendent",
            TenantPaymentStatus::Delinquent => "Morós",
        }
    }
}

impl Serialize for TenantPaymentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for TenantPaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TenantPaymentStatus::Paid => "Paid",
            TenantPaymentStatus::Pending => "Pending",
            TenantPaymentStatus::Delinquent => "Delinquent",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_source_tenant() {
        let json = r#"{
            "id": 4,
            "first_name": "Marta",
            "last_name": "Puig",
            "email": "marta@example.com",
            "tenant_since": "2022-09-01"
        }"#;
        let tenant: Tenant = serde_json::from_str(json).expect("decode tenant");

        assert_eq!(tenant.id, "4");
        assert_eq!(tenant.full_name(), "Marta Puig");
        assert_eq!(tenant.display_label(), "Marta Puig (4)");
        assert_eq!(tenant.tenant_since, Some(DateValue::from("2022-09-01")));
    }

    #[test]
    fn nameless_tenant_falls_back_to_id() {
        let tenant = Tenant::new("t9");
        assert_eq!(tenant.full_name(), "");
        assert_eq!(tenant.display_label(), "tenant:t9");
    }

    #[test]
    fn payment_status_writes_source_labels() {
        let json = serde_json::to_string(&TenantPaymentStatus::Delinquent).unwrap();
        assert_eq!(json, r#""Morós""#);
        assert_eq!(
            TenantPaymentStatus::from_label("Pendent"),
            Some(TenantPaymentStatus::Pending)
        );
    }
}
