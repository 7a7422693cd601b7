//! Paginated listings and the job variant they carry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::ops::Deref;

use crate::extract_job::ExtractJob;
use crate::job::{BaseJob, TypedJob};
use crate::summarize_job::SummarizeJob;
use crate::summary::BaseSummary;
use crate::transcript::BaseTranscript;
use crate::vocabulary::{EXTRACT_AVAILABLE_STATUS, SUMMARIZE_AVAILABLE_STATUS};

/// A job of either type, as returned by job listings and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyJob {
    Extract(ExtractJob),
    Summarize(SummarizeJob),
}

impl AnyJob {
    /// Whether a service record describes an extraction rather than a
    /// summarization.
    fn is_extract_record(record: &Value) -> bool {
        if record.get("summary_details").is_some() {
            return false;
        }
        record
            .get("job_status")
            .and_then(Value::as_str)
            .map_or(false, |status| {
                EXTRACT_AVAILABLE_STATUS.contains(&status)
                    && !SUMMARIZE_AVAILABLE_STATUS.contains(&status)
            })
    }
}

impl<'de> Deserialize<'de> for AnyJob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Value::deserialize(deserializer)?;
        let job = if AnyJob::is_extract_record(&record) {
            serde_json::from_value(record).map(AnyJob::Extract)
        } else {
            serde_json::from_value(record).map(AnyJob::Summarize)
        };
        job.map_err(serde::de::Error::custom)
    }
}

impl TypedJob for AnyJob {
    fn job_type(&self) -> &'static str {
        match self {
            AnyJob::Extract(job) => job.job_type(),
            AnyJob::Summarize(job) => job.job_type(),
        }
    }

    fn available_status(&self) -> &'static [&'static str] {
        match self {
            AnyJob::Extract(job) => job.available_status(),
            AnyJob::Summarize(job) => job.available_status(),
        }
    }

    fn base(&self) -> &BaseJob {
        match self {
            AnyJob::Extract(job) => job.base(),
            AnyJob::Summarize(job) => job.base(),
        }
    }
}

impl Deref for AnyJob {
    type Target = BaseJob;

    fn deref(&self) -> &BaseJob {
        self.base()
    }
}

impl From<ExtractJob> for AnyJob {
    fn from(job: ExtractJob) -> Self {
        AnyJob::Extract(job)
    }
}

impl From<SummarizeJob> for AnyJob {
    fn from(job: SummarizeJob) -> Self {
        AnyJob::Summarize(job)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobs {
    pub page_count: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<AnyJob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummaries {
    pub page_count: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<BaseSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTranscripts {
    pub page_count: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<BaseTranscript>,
}

/// Acknowledgement of a job deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedJob {
    pub job_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(status: &str) -> Value {
        json!({
            "display_name": "weekly sync",
            "job_name": "job_1",
            "job_status": status,
            "source": "generic",
            "time_started": "2022-11-01T10:00:00",
            "transcript_id": "generic_transcript_1"
        })
    }

    #[test]
    fn test_extract_only_status_is_extract_job() {
        let job: AnyJob = serde_json::from_value(record("ExtractionComplete")).unwrap();
        assert!(matches!(job, AnyJob::Extract(_)));
        assert_eq!(job.job_type(), "ExtractJob");
        assert_eq!(job.job_name(), "job_1");
    }

    #[test]
    fn test_shared_status_defaults_to_summarize_job() {
        let job: AnyJob = serde_json::from_value(record("Pending")).unwrap();
        assert!(
            matches!(job, AnyJob::Summarize(_)),
            "statuses shared by both vocabularies read as summaries"
        );
    }

    #[test]
    fn test_summary_details_mark_summarize_job() {
        let mut value = record("Extracting");
        value["summary_details"] = json!({});
        let job: AnyJob = serde_json::from_value(value).unwrap();
        assert!(matches!(job, AnyJob::Summarize(_)));
    }

    #[test]
    fn test_list_jobs() {
        let list: ListJobs = serde_json::from_value(json!({
            "page_count": 2,
            "next_page": "https://wordcab.com/api/v1/jobs?page=2",
            "results": [record("SummaryComplete"), record("PreparingExtraction")]
        }))
        .unwrap();

        assert_eq!(list.page_count, 2);
        assert_eq!(list.results.len(), 2);
        assert!(matches!(list.results[0], AnyJob::Summarize(_)));
        assert!(matches!(list.results[1], AnyJob::Extract(_)));
    }

    #[test]
    fn test_list_jobs_tolerates_richer_settings() {
        let mut job = record("SummaryComplete");
        job["settings"] = json!({
            "pipeline": ["transcribe", "summarize"],
            "only_api": true,
            "diarization": true
        });
        let list: ListJobs = serde_json::from_value(json!({
            "page_count": 1,
            "results": [job]
        }))
        .unwrap();

        assert_eq!(
            list.results[0].settings().pipeline.as_deref(),
            Some("transcribe,summarize")
        );
    }

    #[test]
    fn test_list_summaries_and_transcripts() {
        let summaries: ListSummaries = serde_json::from_value(json!({
            "page_count": 3,
            "next_page": "https://next_page.com",
            "results": []
        }))
        .unwrap();
        assert_eq!(summaries.page_count, 3);
        assert_eq!(summaries.next_page.as_deref(), Some("https://next_page.com"));
        assert!(summaries.results.is_empty());

        let transcripts: ListTranscripts =
            serde_json::from_value(json!({"page_count": 1, "next_page": null})).unwrap();
        assert_eq!(transcripts.next_page, None);
    }

    #[test]
    fn test_deleted_job() {
        let deleted: DeletedJob = serde_json::from_value(json!({"job_name": "job_1"})).unwrap();
        assert_eq!(deleted.job_name, "job_1");
    }
}
