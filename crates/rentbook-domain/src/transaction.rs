//! Domain models for ledger transactions recorded against properties.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::common::*;

/// A single income or expense entry. The sign is implied by `kind`; `amount`
/// is conventionally non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TransactionKind>,
    #[serde(default, deserialize_with = "lenient_amount_or_zero")]
    pub amount: f64,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateValue>,
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
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        date: impl Into<DateValue>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            amount,
            date: Some(date.into()),
            property_id: None,
            tenant_id: None,
            status: None,
            category: None,
            description: None,
        }
    }

    pub fn income(id: impl Into<String>, amount: f64, date: impl Into<DateValue>) -> Self {
        Self::new(id, TransactionKind::Income, amount, date)
    }

    pub fn expense(id: impl Into<String>, amount: f64, date: impl Into<DateValue>) -> Self {
        Self::new(id, TransactionKind::Expense, amount, date)
    }

    pub fn for_property(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = Some(property_id.into());
        self
    }

    pub fn for_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_kind(&self, kind: TransactionKind) -> bool {
        self.kind == Some(kind)
    }

    pub fn belongs_to(&self, property_id: &str) -> bool {
        self.property_id.as_deref() == Some(property_id)
    }

    /// Returns `true` while the payment is still outstanding.
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self.status,
            Some(TransactionStatus::Pending) | Some(TransactionStatus::Overdue)
        )
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let kind = self
            .kind
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "Unknown".into());
        format!("txn:{} [{}]", self.id, kind)
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl SourceLabel for TransactionKind {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Ingrés" | "Income" => Some(TransactionKind::Income),
            "Despesa" | "Expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Ingrés",
            TransactionKind::Expense => "Despesa",
        }
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Paid,
    Pending,
    Overdue,
}

impl SourceLabel for TransactionStatus {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Pagat" | "Paid" => Some(TransactionStatus::Paid),
            "Pendent" | "Pending" => Some(TransactionStatus::Pending),
            "Endarrerit" | "Morós" | "Overdue" => Some(TransactionStatus::Overdue),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "Pagat",
            TransactionStatus::Pending => "Pendent",
            TransactionStatus::Overdue => "Endarrerit",
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Paid => "Paid",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_source_transaction() {
        let json = r#"{
            "id": "t1",
            "type": "Ingrés",
            "amount": "1200",
            "date": "2024-03-01",
            "property_id": "A",
            "status": "Pagat",
            "category": "Lloguer"
        }"#;
        let txn: Transaction = serde_json::from_str(json).expect("decode transaction");

        assert_eq!(txn.kind, Some(TransactionKind::Income));
        assert_eq!(txn.amount, 1200.0);
        assert_eq!(txn.date, Some(DateValue::from("2024-03-01")));
        assert!(txn.belongs_to("A"));
        assert_eq!(txn.status, Some(TransactionStatus::Paid));
    }

    #[test]
    fn delinquent_label_counts_as_overdue() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id": "t", "type": "Ingrés", "amount": 450, "status": "Morós", "tenant_id": 12}"#,
        )
        .expect("decode transaction");

        assert_eq!(txn.status, Some(TransactionStatus::Overdue));
        assert!(txn.is_outstanding());
        assert_eq!(txn.tenant_id.as_deref(), Some("12"));
    }

    #[test]
    fn padded_kind_is_not_recognised() {
        let txn: Transaction =
            serde_json::from_str(r#"{"id": "t", "type": "Ingrés ", "amount": 5}"#).unwrap();
        assert_eq!(txn.kind, None);
    }

    #[test]
    fn missing_or_garbage_amount_is_zero() {
        let missing: Transaction =
            serde_json::from_str(r#"{"id": "t1", "type": "Despesa"}"#).unwrap();
        let garbage: Transaction =
            serde_json::from_str(r#"{"id": "t2", "type": "Despesa", "amount": {"x": 1}}"#)
                .unwrap();

        assert_eq!(missing.amount, 0.0);
        assert_eq!(garbage.amount, 0.0);
        assert_eq!(missing.date, None);
    }

    #[test]
    fn unknown_kind_and_blank_property_decode_to_none() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id": "t1", "type": "Transfer", "amount": 5, "property_id": ""}"#,
        )
        .unwrap();

        assert_eq!(txn.kind, None);
        assert_eq!(txn.property_id, None);
        assert!(!txn.is_kind(TransactionKind::Income));
        assert!(!txn.is_kind(TransactionKind::Expense));
    }

    #[test]
    fn outstanding_covers_pending_and_overdue() {
        let base = Transaction::income("t", 10.0, "2024-01-01");
        assert!(base.clone().with_status(TransactionStatus::Pending).is_outstanding());
        assert!(base.clone().with_status(TransactionStatus::Overdue).is_outstanding());
        assert!(!base.clone().with_status(TransactionStatus::Paid).is_outstanding());
        assert!(!base.is_outstanding());
    }
}
