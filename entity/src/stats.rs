use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{stats_error, Error, StatsErrorKind};
use crate::vocabulary::AVAILABLE_PLAN;

/// Format used for every timestamp the SDK sends.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` (optionally with fractional
/// seconds) or an RFC 3339 timestamp.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, Error> {
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.naive_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            stats_error(
                StatsErrorKind::InvalidTimestamp(value.to_string()),
                &format!("{} is not a valid timestamp", value),
            )
        })
}

/// Rewrites any accepted timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn normalize_timestamp(value: &str) -> Result<String, Error> {
    Ok(parse_timestamp(value)?.format(TIMESTAMP_FORMAT).to_string())
}

/// Account usage as reported by the service, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub account_email: String,
    pub plan: String,
    pub monthly_request_limit: String,
    pub request_count: u64,
    pub minutes_summarized: u64,
    pub transcripts_summarized: u64,
    pub metered_charge: String,
    pub min_created: String,
    pub max_created: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Validated account usage for a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatsRecord", into = "StatsRecord")]
pub struct Stats {
    record: StatsRecord,
}

impl Stats {
    pub fn new(record: StatsRecord) -> Result<Self, Error> {
        if !AVAILABLE_PLAN.contains(&record.plan.as_str()) {
            return Err(stats_error(
                StatsErrorKind::InvalidPlan(record.plan.clone()),
                &format!("Plan must be one of {:?}, not {}", AVAILABLE_PLAN, record.plan),
            ));
        }

        if !is_metered_charge(&record.metered_charge) {
            return Err(stats_error(
                StatsErrorKind::InvalidMeteredCharge(record.metered_charge.clone()),
                &format!(
                    "Metered charge must look like $X or $X.XX, not {}",
                    record.metered_charge
                ),
            ));
        }

        let min_created = parse_timestamp(&record.min_created)?;
        let max_created = parse_timestamp(&record.max_created)?;
        if min_created > max_created {
            return Err(stats_error(
                StatsErrorKind::InvalidRange,
                &format!(
                    "min_created must be before max_created, not {} and {}",
                    record.min_created, record.max_created
                ),
            ));
        }

        Ok(Self { record })
    }

    pub fn account_email(&self) -> &str {
        &self.record.account_email
    }

    pub fn plan(&self) -> &str {
        &self.record.plan
    }

    pub fn monthly_request_limit(&self) -> &str {
        &self.record.monthly_request_limit
    }

    pub fn request_count(&self) -> u64 {
        self.record.request_count
    }

    pub fn minutes_summarized(&self) -> u64 {
        self.record.minutes_summarized
    }

    pub fn transcripts_summarized(&self) -> u64 {
        self.record.transcripts_summarized
    }

    pub fn metered_charge(&self) -> &str {
        &self.record.metered_charge
    }

    pub fn min_created(&self) -> &str {
        &self.record.min_created
    }

    pub fn max_created(&self) -> &str {
        &self.record.max_created
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.record.tags.as_deref()
    }
}

impl TryFrom<StatsRecord> for Stats {
    type Error = Error;

    fn try_from(record: StatsRecord) -> Result<Self, Self::Error> {
        Stats::new(record)
    }
}

impl From<Stats> for StatsRecord {
    fn from(stats: Stats) -> Self {
        stats.record
    }
}

// "$" followed by digits with at most one decimal point
fn is_metered_charge(value: &str) -> bool {
    let Some(amount) = value.strip_prefix('$') else {
        return false;
    };
    let digits = amount.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityErrorKind;
    use serde_json::json;

    fn record() -> StatsRecord {
        StatsRecord {
            account_email: "someone@example.com".to_string(),
            plan: "paid".to_string(),
            monthly_request_limit: "1000".to_string(),
            request_count: 12,
            minutes_summarized: 340,
            transcripts_summarized: 10,
            metered_charge: "$12.50".to_string(),
            min_created: "2021-01-01T00:00:00".to_string(),
            max_created: "2021-01-31T00:00:00".to_string(),
            tags: None,
        }
    }

    #[test]
    fn test_valid_stats() {
        let stats = Stats::new(record()).unwrap();
        assert_eq!(stats.plan(), "paid");
        assert_eq!(stats.min_created(), "2021-01-01T00:00:00");
        assert_eq!(stats.tags(), None);
    }

    #[test]
    fn test_invalid_plan() {
        let mut record = record();
        record.plan = "enterprise".to_string();
        let err = Stats::new(record).unwrap_err();
        assert_eq!(
            err.error_kind,
            EntityErrorKind::Stats(StatsErrorKind::InvalidPlan("enterprise".to_string()))
        );
    }

    #[test]
    fn test_metered_charge_format() {
        assert!(is_metered_charge("$5"));
        assert!(is_metered_charge("$5.25"));
        assert!(!is_metered_charge("5.25"), "missing dollar sign");
        assert!(!is_metered_charge("$"), "missing amount");
        assert!(!is_metered_charge("$1.2.3"), "two decimal points");
        assert!(!is_metered_charge("$12a"));
    }

    #[test]
    fn test_min_created_after_max_created() {
        let mut record = record();
        record.min_created = "2021-02-01".to_string();
        let err = Stats::new(record).unwrap_err();
        assert_eq!(err.error_kind, EntityErrorKind::Stats(StatsErrorKind::InvalidRange));
    }

    #[test]
    fn test_deserialization_validates() {
        let valid = json!({
            "account_email": "someone@example.com",
            "plan": "free",
            "monthly_request_limit": "100",
            "request_count": 1,
            "minutes_summarized": 2,
            "transcripts_summarized": 1,
            "metered_charge": "$0",
            "min_created": "2021-01-01T00:00:00",
            "max_created": "2021-01-31T00:00:00",
            "tags": ["sales"]
        });
        let stats: Stats = serde_json::from_value(valid.clone()).unwrap();
        assert_eq!(stats.tags(), Some(&["sales".to_string()][..]));

        let mut invalid = valid;
        invalid["metered_charge"] = json!("0");
        assert!(serde_json::from_value::<Stats>(invalid).is_err());
    }

    #[test]
    fn test_normalize_timestamp() {
        assert_eq!(
            normalize_timestamp("2021-01-01").unwrap(),
            "2021-01-01T00:00:00"
        );
        assert_eq!(
            normalize_timestamp("2021-01-31T12:30:00").unwrap(),
            "2021-01-31T12:30:00"
        );
        assert_eq!(
            normalize_timestamp("2021-01-31T12:30:00Z").unwrap(),
            "2021-01-31T12:30:00"
        );
        assert!(normalize_timestamp("last tuesday").is_err());
    }
}
