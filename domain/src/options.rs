//! Arguments of the job-starting operations.

use entity::vocabulary::{EXTRACT_PIPELINES, SUMMARY_PIPELINES};

/// Requested summary length: one value or several, each producing a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLength {
    One(u8),
    Many(Vec<u8>),
}

impl SummaryLength {
    pub fn values(&self) -> &[u8] {
        match self {
            SummaryLength::One(length) => std::slice::from_ref(length),
            SummaryLength::Many(lengths) => lengths,
        }
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::One(3)
    }
}

impl From<u8> for SummaryLength {
    fn from(length: u8) -> Self {
        SummaryLength::One(length)
    }
}

impl From<Vec<u8>> for SummaryLength {
    fn from(lengths: Vec<u8>) -> Self {
        SummaryLength::Many(lengths)
    }
}

/// Options of [`crate::client::Client::start_summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    pub display_name: String,
    pub summary_type: String,
    pub ephemeral_data: bool,
    pub only_api: bool,
    pub pipelines: Vec<String>,
    pub split_long_utterances: bool,
    pub summary_length: SummaryLength,
    pub tags: Option<Vec<String>>,
}

impl SummaryOptions {
    /// Options with the service defaults: data kept, API only, transcribe
    /// then summarize, utterances untouched, length 3, no tags.
    pub fn new(display_name: impl Into<String>, summary_type: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            summary_type: summary_type.into(),
            ephemeral_data: false,
            only_api: true,
            pipelines: SUMMARY_PIPELINES.iter().map(|p| p.to_string()).collect(),
            split_long_utterances: false,
            summary_length: SummaryLength::default(),
            tags: None,
        }
    }

    pub fn summary_length(mut self, summary_length: impl Into<SummaryLength>) -> Self {
        self.summary_length = summary_length.into();
        self
    }

    pub fn pipelines<I, S>(mut self, pipelines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pipelines = pipelines.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn ephemeral_data(mut self, ephemeral_data: bool) -> Self {
        self.ephemeral_data = ephemeral_data;
        self
    }

    pub fn only_api(mut self, only_api: bool) -> Self {
        self.only_api = only_api;
        self
    }

    pub fn split_long_utterances(mut self, split_long_utterances: bool) -> Self {
        self.split_long_utterances = split_long_utterances;
        self
    }
}

/// Options of [`crate::client::Client::start_extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub display_name: String,
    pub ephemeral_data: bool,
    pub only_api: bool,
    pub pipelines: Vec<String>,
    pub split_long_utterances: bool,
    pub tags: Option<Vec<String>>,
}

impl ExtractOptions {
    /// Options running every extraction pipeline.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ephemeral_data: false,
            only_api: true,
            pipelines: EXTRACT_PIPELINES.iter().map(|p| p.to_string()).collect(),
            split_long_utterances: false,
            tags: None,
        }
    }

    pub fn pipelines<I, S>(mut self, pipelines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pipelines = pipelines.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn ephemeral_data(mut self, ephemeral_data: bool) -> Self {
        self.ephemeral_data = ephemeral_data;
        self
    }
}
