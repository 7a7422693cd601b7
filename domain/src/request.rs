//! Typed descriptions of the Wordcab API operations.
//!
//! A [`PreparedRequest`] is everything the client knows about a call once the
//! arguments have been validated: verb, path, query and body. [`Request`] is
//! the dynamic form used by [`crate::client::Client::request`].

use entity::{
    AnyJob, BaseSummary, BaseTranscript, DeletedJob, ExtractJob, InputSource, ListJobs,
    ListSummaries, ListTranscripts, Stats, SummarizeJob,
};
use secrecy::SecretString;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{invalid_error, Error, InvalidErrorKind};
use crate::options::{ExtractOptions, SummaryOptions};

/// Base URL of the Wordcab API.
pub const API_BASE_URL: &str = "https://wordcab.com/api/v1";

/// The operations of the Wordcab API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetStats,
    StartExtract,
    StartSummary,
    ListJobs,
    RetrieveJob,
    DeleteJob,
    ListTranscripts,
    RetrieveTranscript,
    ChangeSpeakerLabels,
    ListSummaries,
    RetrieveSummary,
}

impl Method {
    pub const ALL: [Method; 11] = [
        Method::GetStats,
        Method::StartExtract,
        Method::StartSummary,
        Method::ListJobs,
        Method::RetrieveJob,
        Method::DeleteJob,
        Method::ListTranscripts,
        Method::RetrieveTranscript,
        Method::ChangeSpeakerLabels,
        Method::ListSummaries,
        Method::RetrieveSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GetStats => "get_stats",
            Method::StartExtract => "start_extract",
            Method::StartSummary => "start_summary",
            Method::ListJobs => "list_jobs",
            Method::RetrieveJob => "retrieve_job",
            Method::DeleteJob => "delete_job",
            Method::ListTranscripts => "list_transcripts",
            Method::RetrieveTranscript => "retrieve_transcript",
            Method::ChangeSpeakerLabels => "change_speaker_labels",
            Method::ListSummaries => "list_summaries",
            Method::RetrieveSummary => "retrieve_summary",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(name: &str) -> Result<Method, Self::Err> {
        if name.is_empty() {
            return Err(invalid_error(
                InvalidErrorKind::Empty("method"),
                "You must specify a method to call.",
            ));
        }
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| {
                invalid_error(
                    InvalidErrorKind::UnknownMethod(name.to_string()),
                    &format!("{} is not a valid method.", name),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpVerb::Get => write!(f, "GET"),
            HttpVerb::Post => write!(f, "POST"),
            HttpVerb::Patch => write!(f, "PATCH"),
            HttpVerb::Delete => write!(f, "DELETE"),
        }
    }
}

/// Payload of a prepared request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// A source file uploaded as the request body.
    File { file_name: String, size: usize },
}

/// A validated call, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub verb: HttpVerb,
    /// Path relative to [`API_BASE_URL`], with segments already percent-encoded.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
}

impl PreparedRequest {
    pub fn new(method: Method, verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            method,
            verb,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches the `Authorization` header value.
    pub fn authorized(self, authorization: SecretString) -> AuthorizedRequest {
        AuthorizedRequest {
            request: self,
            authorization,
        }
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Full URL, query string included.
    pub fn url(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<String>>()
            .join("&");

        if query.is_empty() {
            format!("{}{}", API_BASE_URL, self.path)
        } else {
            format!("{}{}?{}", API_BASE_URL, self.path, query)
        }
    }
}

impl fmt::Display for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.url())
    }
}

/// A prepared request carrying its credentials.
///
/// `Debug` shows the request but never the header value.
#[derive(Debug, Clone)]
pub struct AuthorizedRequest {
    pub request: PreparedRequest,
    authorization: SecretString,
}

impl AuthorizedRequest {
    /// The headers to send, as name and secret value.
    pub fn headers(&self) -> [(&'static str, &SecretString); 1] {
        [("Authorization", &self.authorization)]
    }
}

/// A client operation together with its arguments.
#[derive(Debug, Clone)]
pub enum Request {
    GetStats {
        min_created: Option<String>,
        max_created: Option<String>,
        tags: Option<Vec<String>>,
    },
    StartExtract {
        source: InputSource,
        options: ExtractOptions,
    },
    StartSummary {
        source: InputSource,
        options: SummaryOptions,
    },
    ListJobs {
        page_size: u32,
        order_by: String,
    },
    RetrieveJob {
        job_name: String,
    },
    DeleteJob {
        job_name: String,
    },
    ListTranscripts {
        page_size: u32,
    },
    RetrieveTranscript {
        transcript_id: String,
    },
    ChangeSpeakerLabels {
        transcript_id: String,
        speaker_map: BTreeMap<String, String>,
    },
    ListSummaries {
        page_size: u32,
    },
    RetrieveSummary {
        summary_id: String,
    },
}

impl Request {
    pub fn method(&self) -> Method {
        match self {
            Request::GetStats { .. } => Method::GetStats,
            Request::StartExtract { .. } => Method::StartExtract,
            Request::StartSummary { .. } => Method::StartSummary,
            Request::ListJobs { .. } => Method::ListJobs,
            Request::RetrieveJob { .. } => Method::RetrieveJob,
            Request::DeleteJob { .. } => Method::DeleteJob,
            Request::ListTranscripts { .. } => Method::ListTranscripts,
            Request::RetrieveTranscript { .. } => Method::RetrieveTranscript,
            Request::ChangeSpeakerLabels { .. } => Method::ChangeSpeakerLabels,
            Request::ListSummaries { .. } => Method::ListSummaries,
            Request::RetrieveSummary { .. } => Method::RetrieveSummary,
        }
    }
}

/// The result of a [`Request`], one variant per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Stats(Stats),
    ExtractJob(ExtractJob),
    SummarizeJob(SummarizeJob),
    ListJobs(ListJobs),
    Job(AnyJob),
    DeletedJob(DeletedJob),
    ListTranscripts(ListTranscripts),
    Transcript(BaseTranscript),
    ListSummaries(ListSummaries),
    Summary(BaseSummary),
}
