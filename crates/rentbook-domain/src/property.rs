//! Domain types representing managed properties and their fixed annual costs.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::common::*;

/// A managed property as stored by the entity store.
///
/// Only the fields used by the financial core are required to be well formed;
/// every numeric and enum field decodes leniently and an absent value never
/// contributes to a total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<PropertyStatus>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rent_price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub ibi_cost_annual: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub garbage_tax_annual: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub who_pays_ibi: Option<Payer>,
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub who_pays_garbage: Option<Payer>,
}

impl Property {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            address: None,
            city: None,
            status: None,
            rent_price: None,
            ibi_cost_annual: None,
            garbage_tax_annual: None,
            who_pays_ibi: None,
            who_pays_garbage: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the annual property tax (IBI) and who pays it.
    pub fn with_ibi(mut self, annual_cost: f64, payer: Payer) -> Self {
        self.ibi_cost_annual = Some(annual_cost);
        self.who_pays_ibi = Some(payer);
        self
    }

    /// Sets the annual waste tax and who pays it.
    pub fn with_garbage_tax(mut self, annual_cost: f64, payer: Payer) -> Self {
        self.garbage_tax_annual = Some(annual_cost);
        self.who_pays_garbage = Some(payer);
        self
    }

    pub fn is_rented(&self) -> bool {
        matches!(self.status, Some(PropertyStatus::Rented))
    }
}

impl Identifiable for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Property {
    fn display_label(&self) -> String {
        match self.name.as_deref().or(self.address.as_deref()) {
            Some(name) => format!("{} ({})", name, self.id),
            None => format!("property:{}", self.id),
        }
    }
}

/// Occupancy state of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStatus {
    Rented,
    Vacant,
    Maintenance,
}

impl SourceLabel for PropertyStatus {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Llogat" | "Rented" => Some(PropertyStatus::Rented),
            "Buit" | "Vacant" => Some(PropertyStatus::Vacant),
            "Manteniment" | "En reformes" | "Maintenance" => Some(PropertyStatus::Maintenance),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Rented => "Llogat",
            PropertyStatus::Vacant => "Buit",
            PropertyStatus::Maintenance => "Manteniment",
        }
    }
}

impl Serialize for PropertyStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Vacant => "Vacant",
            PropertyStatus::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_source_payload_with_sentinel_values() {
        let json = r#"{
            "id": "A",
            "name": "Apartament Centre",
            "status": "Llogat",
            "ibi_cost_annual": 450,
            "garbage_tax_annual": "120",
            "who_pays_ibi": "Propietari",
            "who_pays_garbage": "Llogater"
        }"#;
        let property: Property = serde_json::from_str(json).expect("decode property");

        assert_eq!(property.id, "A");
        assert_eq!(property.status, Some(PropertyStatus::Rented));
        assert_eq!(property.ibi_cost_annual, Some(450.0));
        assert_eq!(property.garbage_tax_annual, Some(120.0));
        assert_eq!(property.who_pays_ibi, Some(Payer::Owner));
        assert_eq!(property.who_pays_garbage, Some(Payer::Tenant));
    }

    #[test]
    fn malformed_fields_decode_to_absent_values() {
        let json = r#"{
            "id": 7,
            "ibi_cost_annual": "n/a",
            "garbage_tax_annual": null,
            "who_pays_ibi": "Someone else",
            "who_pays_garbage": 3,
            "rent_price": ""
        }"#;
        let property: Property = serde_json::from_str(json).expect("decode property");

        assert_eq!(property.id, "7");
        assert_eq!(property.ibi_cost_annual, None);
        assert_eq!(property.garbage_tax_annual, None);
        assert_eq!(property.who_pays_ibi, None);
        assert_eq!(property.who_pays_garbage, None);
        assert_eq!(property.rent_price, None);
    }

    #[test]
    fn serializes_back_to_source_labels() {
        let property = Property::new("P1")
            .with_ibi(500.0, Payer::Owner)
            .with_status(PropertyStatus::Vacant);
        let json = serde_json::to_value(&property).expect("encode property");

        assert_eq!(json["who_pays_ibi"], "Propietari");
        assert_eq!(json["status"], "Buit");
        assert!(json.get("who_pays_garbage").is_none());
    }
}
