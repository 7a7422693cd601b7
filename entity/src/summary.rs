//! Summary records returned by the service.
//!
//! Both records validate themselves on deserialization: clock times must be
//! `HH:MM:SS`, ranges must be ordered and summary types must be known.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::{summary_error, Error, SummaryErrorKind};
use crate::stats::parse_timestamp;
use crate::transcript::TranscriptSegment;
use crate::vocabulary::SUMMARY_TYPES;

/// One block of a summary, covering a span of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct StructuredSummary {
    pub end: String,
    pub start: String,
    pub summary: String,
    pub summary_html: String,
    pub timestamp_end: u64,
    pub timestamp_start: u64,
    #[serde(default)]
    pub transcript_segment: Vec<TranscriptSegment>,
}

impl StructuredSummary {
    pub fn new(
        end: impl Into<String>,
        start: impl Into<String>,
        summary: impl Into<String>,
        summary_html: impl Into<String>,
        timestamp_end: u64,
        timestamp_start: u64,
    ) -> Result<Self, Error> {
        let structured = Self {
            end: end.into(),
            start: start.into(),
            summary: summary.into(),
            summary_html: summary_html.into(),
            timestamp_end,
            timestamp_start,
            transcript_segment: Vec::new(),
        };
        structured.validate()?;
        Ok(structured)
    }

    pub fn validate(&self) -> Result<(), Error> {
        check_timestamp(&self.start, self.timestamp_start)?;
        check_timestamp(&self.end, self.timestamp_end)?;
        if self.timestamp_start > self.timestamp_end {
            return Err(summary_error(
                SummaryErrorKind::InvalidRange,
                &format!(
                    "timestamp_start must not be after timestamp_end, not {} and {}",
                    self.timestamp_start, self.timestamp_end
                ),
            ));
        }
        Ok(())
    }
}

impl Serialize for StructuredSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StructuredSummary::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for StructuredSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let structured = StructuredSummary::deserialize(deserializer)?;
        structured.validate().map_err(serde::de::Error::custom)?;
        Ok(structured)
    }
}

/// The summary blocks produced for one summary length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthSummary {
    #[serde(default)]
    pub structured_summary: Vec<StructuredSummary>,
}

/// A summary as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct BaseSummary {
    pub summary_id: String,
    pub job_status: String,
    pub process_time: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub speaker_map: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub source: Option<String>,
    /// Summary blocks keyed by requested length.
    #[serde(default)]
    pub summary: Option<BTreeMap<String, LengthSummary>>,
    #[serde(default)]
    pub summary_type: Option<String>,
    #[serde(default)]
    pub transcript_id: Option<String>,
    #[serde(default)]
    pub time_started: Option<String>,
    #[serde(default)]
    pub time_completed: Option<String>,
}

impl BaseSummary {
    pub fn new(
        summary_id: impl Into<String>,
        job_status: impl Into<String>,
        process_time: impl Into<String>,
    ) -> Self {
        Self {
            summary_id: summary_id.into(),
            job_status: job_status.into(),
            process_time: process_time.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(summary_type) = &self.summary_type {
            if !SUMMARY_TYPES.contains(&summary_type.as_str()) {
                return Err(summary_error(
                    SummaryErrorKind::InvalidSummaryType(summary_type.clone()),
                    &format!(
                        "Summary type must be one of {:?}, not {}",
                        SUMMARY_TYPES, summary_type
                    ),
                ));
            }
        }

        if let (Some(started), Some(completed)) = (&self.time_started, &self.time_completed) {
            if parse_timestamp(started)? >= parse_timestamp(completed)? {
                return Err(summary_error(
                    SummaryErrorKind::InvalidRange,
                    &format!(
                        "time_started must be before time_completed, not {} and {}",
                        started, completed
                    ),
                ));
            }
        }

        Ok(())
    }
}

impl Serialize for BaseSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BaseSummary::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BaseSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let summary = BaseSummary::deserialize(deserializer)?;
        summary.validate().map_err(serde::de::Error::custom)?;
        Ok(summary)
    }
}

/// Milliseconds elapsed at an `HH:MM:SS` clock time.
fn clock_millis(clock: &str) -> Result<u64, Error> {
    let invalid_clock = || {
        summary_error(
            SummaryErrorKind::InvalidClock(clock.to_string()),
            &format!("{} is not formatted as HH:MM:SS", clock),
        )
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3
        || !parts
            .iter()
            .all(|part| part.len() >= 2 && part.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid_clock());
    }

    let mut seconds: u64 = 0;
    for (index, part) in parts.iter().enumerate() {
        let value: u64 = part.parse().map_err(|_| invalid_clock())?;
        if index > 0 && value >= 60 {
            return Err(invalid_clock());
        }
        seconds = seconds
            .checked_mul(60)
            .and_then(|total| total.checked_add(value))
            .ok_or_else(invalid_clock)?;
    }
    seconds.checked_mul(1000).ok_or_else(invalid_clock)
}

/// A block's timestamp cannot point past the clock time it is shown with.
fn check_timestamp(clock: &str, timestamp: u64) -> Result<(), Error> {
    let clock_ms = clock_millis(clock)?;
    if timestamp > clock_ms {
        return Err(summary_error(
            SummaryErrorKind::TimestampPastClock(timestamp),
            &format!(
                "timestamp {} ms is later than its clock time {} ({} ms)",
                timestamp, clock, clock_ms
            ),
        ));
    }
    Ok(())
}
