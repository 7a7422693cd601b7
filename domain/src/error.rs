//! Error types for the `domain` layer.
use entity::error::{EntityErrorKind as EntityModelErrorKind, Error as EntityError};
use std::error::Error as StdError;
use std::fmt;
use wordcab_auth::error::{ApiKeyErrorKind, Error as WordcabAuthError, ErrorKind as WordcabAuthErrorKind};

use crate::request::Method;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. The intent is to translate errors between layers while maintaining
/// layer boundaries. Ex. `domain` is dependent on `entity` and `wordcab-auth`, and callers
/// of the `wordcab` facade should only ever need to match on `DomainErrorKind`.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    /// The client could not be configured (missing or malformed API key, bad environment).
    Config,
    /// An argument handed to a client operation was rejected before any request was built.
    Invalid(InvalidErrorKind),
    Entity(EntityErrorKind),
    /// The operation validated its arguments but has no transport behind it.
    NotImplemented(Method),
}

/// Enum representing the arguments a client operation can reject.
#[derive(Debug, PartialEq)]
pub enum InvalidErrorKind {
    /// A required string argument was empty. Holds the argument name.
    Empty(&'static str),
    UnknownMethod(String),
    PageSize,
    OrderBy(String),
    SummaryType(String),
    SummaryLength(u8),
    Pipeline(String),
    Timestamp(String),
    TimeRange,
}

/// Enum representing the various kinds of entity errors that can bubble up from the `entity` layer.
/// These errors are translated to the `domain` layer and reduced to a subset of error kinds
/// that are relevant to the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    NotImplemented,
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Domain Error: {:?}: {}", self.error_kind, source),
            None => write!(f, "Domain Error: {:?}", self.error_kind),
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

// This is where we translate errors from the `entity` layer to the `domain` layer.
impl From<EntityError> for Error {
    fn from(err: EntityError) -> Self {
        let entity_error_kind = match &err.error_kind {
            EntityModelErrorKind::Source(entity::error::SourceErrorKind::FileNotFound) => {
                EntityErrorKind::NotFound
            }
            EntityModelErrorKind::Source(entity::error::SourceErrorKind::Io) => {
                EntityErrorKind::Other("Failed to read source".to_string())
            }
            EntityModelErrorKind::NotImplemented(_) => EntityErrorKind::NotImplemented,
            _ => EntityErrorKind::Invalid,
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Entity(entity_error_kind),
        }
    }
}

impl From<WordcabAuthError> for Error {
    fn from(err: WordcabAuthError) -> Self {
        match err.error_kind {
            WordcabAuthErrorKind::ApiKey(ApiKeyErrorKind::NotFound)
            | WordcabAuthErrorKind::ApiKey(ApiKeyErrorKind::InvalidFormat) => Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Config,
            },
        }
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Config,
        }
    }
}

/// Helper function to create invalid-argument errors.
pub fn invalid_error(kind: InvalidErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: DomainErrorKind::Invalid(kind),
    }
}

/// Helper function to create not-implemented errors for a client method.
pub fn not_implemented(method: Method) -> Error {
    Error {
        source: Some(format!("{} is not implemented yet.", method).into()),
        error_kind: DomainErrorKind::NotImplemented(method),
    }
}
