use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One utterance of a transcript, attributed to a speaker label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub text: String,
    pub start: String,
    pub timestamp_start: u64,
    pub timestamp_end: u64,
}

/// A transcript stored by the service, with the jobs and summaries built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTranscript {
    pub transcript_id: String,
    #[serde(default)]
    pub job_id_set: Vec<String>,
    #[serde(default)]
    pub summary_id_set: Vec<String>,
    /// Speaker label (`A`, `B`...) to display name.
    #[serde(default)]
    pub speaker_map: BTreeMap<String, String>,
    #[serde(default)]
    pub transcript: Vec<String>,
}

impl BaseTranscript {
    /// Display name for `label`, falling back to the label itself.
    pub fn speaker_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.speaker_map
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }
}
