use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::job::{BaseJob, TypedJob};
use crate::job_settings::JobSettings;
use crate::source::Source;
use crate::vocabulary::EXTRACT_AVAILABLE_STATUS;

/// A job extracting insights (questions, topics, emotions...) from a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractJob {
    #[serde(flatten)]
    base: BaseJob,
}

impl ExtractJob {
    pub const JOB_TYPE: &'static str = "ExtractJob";
    pub const AVAILABLE_STATUS: &'static [&'static str] = EXTRACT_AVAILABLE_STATUS;

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
        }
    }

    pub fn into_base(self) -> BaseJob {
        self.base
    }
}

impl From<BaseJob> for ExtractJob {
    fn from(base: BaseJob) -> Self {
        Self { base }
    }
}

impl TypedJob for ExtractJob {
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

impl Deref for ExtractJob {
    type Target = BaseJob;

    fn deref(&self) -> &BaseJob {
        &self.base
    }
}

impl DerefMut for ExtractJob {
    fn deref_mut(&mut self) -> &mut BaseJob {
        &mut self.base
    }
}
