//! The data model of the Wordcab SDK: input sources, jobs and the records
//! the service returns.

pub mod error;
pub mod vocabulary;

// Inputs
pub mod source;
pub mod source_object;

// Jobs
pub mod extract_job;
pub mod job;
pub mod job_observer;
pub mod job_settings;
pub mod summarize_job;

// Service records
pub mod list;
pub mod stats;
pub mod summary;
pub mod transcript;

pub use error::Error;
pub use extract_job::ExtractJob;
pub use job::{BaseJob, JobField, TypedJob};
pub use job_observer::{JobEvent, JobObserver, LogObserver};
pub use job_settings::JobSettings;
pub use list::{AnyJob, DeletedJob, ListJobs, ListSummaries, ListTranscripts};
pub use source::{Source, SourceKind};
pub use source_object::{AudioSource, BaseSource, GenericSource, InputSource, Origin};
pub use stats::{Stats, StatsRecord};
pub use summarize_job::SummarizeJob;
pub use summary::{BaseSummary, LengthSummary, StructuredSummary};
pub use transcript::{BaseTranscript, TranscriptSegment};
