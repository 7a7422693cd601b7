use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

use crate::job::{BaseJob, TypedJob};
use crate::job_settings::JobSettings;
use crate::source::Source;
use crate::vocabulary::SUMMARIZE_AVAILABLE_STATUS;

/// A job transcribing (when needed) and summarizing a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeJob {
    #[serde(flatten)]
    base: BaseJob,
    /// Per-summary details reported by the service once summaries exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary_details: Option<Value>,
}

impl SummarizeJob {
    pub const JOB_TYPE: &'static str = "SummarizeJob";
    pub const AVAILABLE_STATUS: &'static [&'static str] = SUMMARIZE_AVAILABLE_STATUS;

    pub fn new(
        display_name: impl Into<String>,
        job_name: impl Into<String>,
        settings: JobSettings,
        source: Source,
        time_started: impl Into<String>,
        transcript_id: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseJob::new(
                display_name,
                job_name,
                settings,
                source,
                time_started,
                transcript_id,
            ),
            summary_details: None,
        }
    }

    pub fn summary_details(&self) -> Option<&Value> {
        self.summary_details.as_ref()
    }

    pub fn into_base(self) -> BaseJob {
        self.base
    }
}

impl From<BaseJob> for SummarizeJob {
    fn from(base: BaseJob) -> Self {
        Self {
            base,
            summary_details: None,
        }
    }
}

impl TypedJob for SummarizeJob {
    fn job_type(&self) -> &'static str {
        Self::JOB_TYPE
    }

    fn available_status(&self) -> &'static [&'static str] {
        Self::AVAILABLE_STATUS
    }

    fn base(&self) -> &BaseJob {
        &self.base
    }
}

impl Deref for SummarizeJob {
    type Target = BaseJob;

    fn deref(&self) -> &BaseJob {
        &self.base
    }
}

impl DerefMut for SummarizeJob {
    fn deref_mut(&mut self) -> &mut BaseJob {
        &mut self.base
    }
}
