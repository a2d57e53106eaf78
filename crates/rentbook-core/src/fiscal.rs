//! Fiscal year resolution for dated records.
//!
//! A fiscal year here is the calendar year of the record's date as written.
//! Absent dates fall back to the clock's current year so undated records are
//! bucketed into "now" instead of breaking an aggregation.

use std::{fmt, sync::Arc};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use rentbook_domain::DateValue;

use crate::{
    time::{Clock, SystemClock},
    CoreError,
};

/// How a date that is present but cannot be interpreted is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Treat the record as dated today, like an absent date.
    #[default]
    Lenient,
    /// Reject the record; aggregations leave it out of every year.
    Strict,
}

impl fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DatePolicy::Lenient => "lenient",
            DatePolicy::Strict => "strict",
        };
        f.write_str(label)
    }
}

/// Maps date-like values onto fiscal years against an injectable clock.
#[derive(Clone)]
pub struct FiscalYearResolver {
    clock: Arc<dyn Clock>,
    policy: DatePolicy,
}

impl FiscalYearResolver {
    pub fn new(clock: Arc<dyn Clock>, policy: DatePolicy) -> Self {
        Self { clock, policy }
    }

    /// Lenient resolver on the local system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), DatePolicy::Lenient)
    }

    pub fn with_policy(mut self, policy: DatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DatePolicy {
        self.policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Returns the fiscal year of `date` under the configured policy.
    pub fn resolve(&self, date: Option<&DateValue>) -> Result<i32, CoreError> {
        self.resolve_date(date).map(|resolved| resolved.year())
    }

    /// Returns the fiscal year of `date`, always falling back to the current
    /// year for absent or malformed values.
    pub fn fiscal_year_of(&self, date: Option<&DateValue>) -> i32 {
        self.resolve_date_with(date, DatePolicy::Lenient)
            .map(|resolved| resolved.year())
            .unwrap_or_else(|_| self.current_year())
    }

    /// Returns the calendar date used for bucketing `date`.
    pub fn resolve_date(&self, date: Option<&DateValue>) -> Result<NaiveDate, CoreError> {
        self.resolve_date_with(date, self.policy)
    }

    /// Returns `true` when `date` resolves to `year`. Records rejected by a
    /// strict policy belong to no year.
    pub fn in_year(&self, date: Option<&DateValue>, year: i32) -> bool {
        self.resolve(date).map(|resolved| resolved == year).unwrap_or(false)
    }

    fn resolve_date_with(
        &self,
        date: Option<&DateValue>,
        policy: DatePolicy,
    ) -> Result<NaiveDate, CoreError> {
        let value = match date {
            Some(value) if !value.is_blank() => value,
            _ => return Ok(self.today()),
        };
        if let Some(resolved) = value.local_date() {
            return Ok(resolved);
        }
        match policy {
            DatePolicy::Lenient => {
                warn!("unparseable date `{}` bucketed into the current year", value);
                Ok(self.today())
            }
            DatePolicy::Strict => {
                warn!("unparseable date `{}` rejected", value);
                Err(CoreError::InvalidDate(value.to_string()))
            }
        }
    }
}

impl Default for FiscalYearResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for FiscalYearResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiscalYearResolver")
            .field("today", &self.clock.today())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    fn resolver(policy: DatePolicy) -> FiscalYearResolver {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        FiscalYearResolver::new(Arc::new(FixedClock::new(today)), policy)
    }

    #[test]
    fn absent_and_blank_dates_fall_back_to_current_year() {
        let resolver = resolver(DatePolicy::Strict);
        assert_eq!(resolver.resolve(None).unwrap(), 2025);
        assert_eq!(resolver.resolve(Some(&DateValue::from(""))).unwrap(), 2025);
        assert_eq!(resolver.fiscal_year_of(None), 2025);
    }

    #[test]
    fn present_dates_resolve_to_their_calendar_year() {
        let resolver = resolver(DatePolicy::Lenient);
        let date = NaiveDate::from_ymd_opt(2019, 2, 1).unwrap();
        assert_eq!(resolver.fiscal_year_of(Some(&DateValue::from(date))), 2019);
        assert_eq!(
            resolver.fiscal_year_of(Some(&DateValue::from("2023-12-31T23:59:59"))),
            2023
        );
        assert_eq!(
            resolver.fiscal_year_of(Some(&DateValue::from("2024-01-01T00:00:00Z"))),
            2024
        );
    }

    #[test]
    fn lenient_policy_buckets_malformed_dates_into_now() {
        let resolver = resolver(DatePolicy::Lenient);
        let garbage = DateValue::from("soon");
        assert_eq!(resolver.resolve(Some(&garbage)).unwrap(), 2025);
        assert!(resolver.in_year(Some(&garbage), 2025));
    }

    #[test]
    fn strict_policy_rejects_malformed_dates() {
        let resolver = resolver(DatePolicy::Strict);
        let garbage = DateValue::from("soon");
        let err = resolver.resolve(Some(&garbage)).expect_err("strict rejects");
        assert!(matches!(err, CoreError::InvalidDate(ref raw) if raw == "soon"));
        assert!(!resolver.in_year(Some(&garbage), 2025));
        assert_eq!(resolver.fiscal_year_of(Some(&garbage)), 2025);
    }
}
