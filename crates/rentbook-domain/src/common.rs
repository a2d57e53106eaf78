//! Shared traits, date values, and lenient decoding helpers for entity records.
//!
//! Records arrive from a remote entity store whose payloads are not statically
//! typed. Everything in this module normalizes at the serde boundary so the rest
//! of the workspace only sees closed enums and plain numbers.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{
    de::{Deserializer, IgnoredAny},
    Deserialize, Serialize, Serializer,
};

/// Exposes the store-assigned identifier of a record.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Maps a closed enum onto the sentinel strings used by the entity store.
pub trait SourceLabel: Sized {
    /// Decodes a stored value. Unknown values yield `None`.
    fn from_label(value: &str) -> Option<Self>;

    /// The canonical stored value written back on serialization.
    fn label(&self) -> &'static str;
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DAY_FIRST_FORMAT: &str = "%d/%m/%Y";

/// A date-like value as supplied by the entity store.
///
/// Text is kept verbatim and only interpreted when a calendar date is requested,
/// so a malformed value survives a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateValue {
    /// Returns `true` for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, DateValue::Text(text) if text.trim().is_empty())
    }

    /// Returns the calendar date in the value's own representation timezone.
    ///
    /// Offsets are honoured as written; no conversion to UTC or to the local
    /// zone is performed. Returns `None` when the text cannot be interpreted.
    pub fn local_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Date(date) => Some(*date),
            DateValue::DateTime(stamp) => Some(stamp.date()),
            DateValue::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_local().date());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DAY_FIRST_FORMAT) {
        return Some(date);
    }
    parse_partial_date(raw)
}

/// `YYYY` and `YYYY-MM` stand for the first day of that year or month.
fn parse_partial_date(raw: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match raw.split_once('-') {
        None if raw.len() == 4 && all_digits(raw) => {
            NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
        }
        Some((year, month)) if year.len() == 4 && month.len() == 2 => {
            if !all_digits(year) || !all_digits(month) {
                return None;
            }
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        _ => None,
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::Date(value)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        DateValue::DateTime(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        DateValue::Text(value)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            DateValue::DateTime(stamp) => write!(f, "{}", stamp.format(DATE_TIME_FORMAT)),
            DateValue::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(DateValue::Text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Decodes an optional amount, coercing numeric strings and dropping anything
/// that is not a finite number.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawScalar::Number(number) => Some(number),
        RawScalar::Text(text) => text.trim().parse::<f64>().ok(),
        RawScalar::Other(_) => None,
    })
    .filter(|number| number.is_finite()))
}

/// Decodes a required amount, treating anything non-numeric as zero.
pub fn lenient_amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_amount(deserializer)?.unwrap_or(0.0))
}

/// Decodes an optional date. Non-string scalars are kept as text so they surface
/// as malformed later; structured values are dropped.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawScalar::Text(text) => Some(DateValue::Text(text)),
        RawScalar::Number(number) => Some(DateValue::Text(number.to_string())),
        RawScalar::Other(_) => None,
    }))
}

/// Decodes a store identifier that may arrive as a string or a number.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Integer(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Integer(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}

/// Like [`lenient_id`] for optional foreign keys. Blank values decode to `None`.
pub fn lenient_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| match value {
            RawScalar::Text(text) => Some(text),
            RawScalar::Number(number) if number.fract() == 0.0 => {
                Some(format!("{}", number as i64))
            }
            RawScalar::Number(_) | RawScalar::Other(_) => None,
        })
        .filter(|text| !text.trim().is_empty()))
}

/// Decodes an optional enum from its stored sentinel string. Only exact
/// sentinels match; padded or differently cased values, non-strings and nulls
/// all decode to `None`.
pub fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: SourceLabel,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawScalar::Text(text) => T::from_label(&text),
        RawScalar::Number(_) | RawScalar::Other(_) => None,
    }))
}

/// Serializes an enum through its stored sentinel string.
pub fn serialize_label<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: SourceLabel,
{
    serializer.serialize_str(value.label())
}

/// Payer designated for an annual property tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payer {
    Owner,
    Tenant,
}

impl SourceLabel for Payer {
    fn from_label(value: &str) -> Option<Self> {
        match value {
            "Propietari" | "Owner" => Some(Payer::Owner),
            "Llogater" | "Tenant" => Some(Payer::Tenant),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Payer::Owner => "Propietari",
            Payer::Tenant => "Llogater",
        }
    }
}

impl Serialize for Payer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_label(self, serializer)
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Payer::Owner => "Owner",
            Payer::Tenant => "Tenant",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_value_reads_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for raw in [
            "2024-01-01",
            "2024-01-01T23:59:59",
            "2024-01-01T23:59:59.250",
            "2024-01-01 08:15:00",
            "2024-01-01T23:30:00+05:00",
            "01/01/2024",
            "  2024-01-01  ",
        ] {
            assert_eq!(DateValue::from(raw).local_date(), Some(expected), "{raw}");
        }
    }

    #[test]
    fn date_value_reads_year_and_month_prefixes() {
        assert_eq!(
            DateValue::from("2024").local_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            DateValue::from("2024-03").local_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(DateValue::from("2024-13").local_date(), None);
        assert_eq!(DateValue::from("24-03").local_date(), None);
        assert_eq!(DateValue::from("2024-3x").local_date(), None);
    }

    #[test]
    fn date_value_keeps_written_offset_without_conversion() {
        let value = DateValue::from("2023-12-31T23:30:00-08:00");
        assert_eq!(
            value.local_date(),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn date_value_rejects_garbage_and_flags_blank_text() {
        assert_eq!(DateValue::from("not a date").local_date(), None);
        assert_eq!(DateValue::from("2024-13-40").local_date(), None);
        assert!(DateValue::from("   ").is_blank());
        assert!(!DateValue::from("2024-01-01").is_blank());
    }

    #[test]
    fn payer_labels_accept_source_and_english_values() {
        assert_eq!(Payer::from_label("Propietari"), Some(Payer::Owner));
        assert_eq!(Payer::from_label("Owner"), Some(Payer::Owner));
        assert_eq!(Payer::from_label("Llogater"), Some(Payer::Tenant));
        assert_eq!(Payer::from_label("propietari"), None);
        assert_eq!(Payer::Owner.label(), "Propietari");
    }

    #[test]
    fn padded_sentinels_do_not_match() {
        #[derive(Deserialize)]
        struct PayerField {
            #[serde(default, deserialize_with = "lenient_label")]
            payer: Option<Payer>,
        }

        let padded: PayerField = serde_json::from_str(r#"{ "payer": " Propietari " }"#).unwrap();
        let exact: PayerField = serde_json::from_str(r#"{ "payer": "Propietari" }"#).unwrap();
        assert_eq!(padded.payer, None);
        assert_eq!(exact.payer, Some(Payer::Owner));
    }
}
