//! Error types for the `entity` crate.
use std::error::Error as StdError;
use std::fmt;

/// Errors raised while constructing or mutating the SDK's data model.
/// The intent is to categorize errors by the record that rejected the data:
///  * Errors related to input sources. Ex SourceErrorKind::FileNotFound
///  * Errors related to account stats. Ex StatsErrorKind::InvalidPlan
///  * Errors related to job updates. Ex JobErrorKind::InvalidType
///  * Errors related to summary records. Ex SummaryErrorKind::InvalidSummaryType
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: EntityErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    Source(SourceErrorKind),
    Stats(StatsErrorKind),
    Job(JobErrorKind),
    Summary(SummaryErrorKind),
    // Feature the SDK declares but does not support yet
    NotImplemented(String),
}

#[derive(Debug, PartialEq)]
pub enum SourceErrorKind {
    // Neither a file path nor a URL was given
    MissingLocation,
    // Both a file path and a URL were given
    ConflictingLocation,
    FileNotFound,
    InvalidUrl,
    UnsupportedFormat(String),
    Io,
}

#[derive(Debug, PartialEq)]
pub enum StatsErrorKind {
    InvalidPlan(String),
    InvalidMeteredCharge(String),
    InvalidTimestamp(String),
    InvalidRange,
}

#[derive(Debug, PartialEq)]
pub enum JobErrorKind {
    // The value handed to a job update does not fit the named field
    InvalidType { field: String },
}

#[derive(Debug, PartialEq)]
pub enum SummaryErrorKind {
    InvalidSummaryType(String),
    // A clock time that is not HH:MM:SS
    InvalidClock(String),
    InvalidRange,
    // A millisecond timestamp later than the clock time it belongs to
    TimestampPastClock(u64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Entity Error: {:?}: {}", self.error_kind, source),
            None => write!(f, "Entity Error: {:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::FileNotFound,
            _ => SourceErrorKind::Io,
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: EntityErrorKind::Source(error_kind),
        }
    }
}

/// Helper function to create source errors.
pub fn source_error(kind: SourceErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: EntityErrorKind::Source(kind),
    }
}

/// Helper function to create stats errors.
pub fn stats_error(kind: StatsErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: EntityErrorKind::Stats(kind),
    }
}

/// Helper function to create job errors.
pub fn job_error(kind: JobErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: EntityErrorKind::Job(kind),
    }
}

/// Helper function to create summary errors.
pub fn summary_error(kind: SummaryErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: EntityErrorKind::Summary(kind),
    }
}

/// Helper function to create not-implemented errors.
pub fn not_implemented(feature: &str) -> Error {
    Error {
        source: None,
        error_kind: EntityErrorKind::NotImplemented(feature.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(
            err.error_kind,
            EntityErrorKind::Source(SourceErrorKind::FileNotFound)
        );
        assert!(err.source().is_some(), "io error should be kept as source");
    }

    #[test]
    fn test_other_io_errors_map_to_io() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err.error_kind, EntityErrorKind::Source(SourceErrorKind::Io));
    }

    #[test]
    fn test_display_includes_message() {
        let err = stats_error(StatsErrorKind::InvalidRange, "min after max");
        assert!(err.to_string().contains("min after max"));
    }
}
