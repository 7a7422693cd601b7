use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Descriptor of where a job's transcript came from (e.g. "generic").
///
/// The service reports sources either as a bare string or as an object with
/// a `source_type` field, so both shapes deserialize into the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SourceRepr")]
pub struct Source {
    pub source_type: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    Name(String),
    Object { source_type: String },
}

impl From<SourceRepr> for Source {
    fn from(repr: SourceRepr) -> Self {
        match repr {
            SourceRepr::Name(source_type) | SourceRepr::Object { source_type } => {
                Source { source_type }
            }
        }
    }
}

impl Source {
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
        }
    }

    pub fn generic() -> Self {
        Self::new(SourceKind::Generic.as_str())
    }

    /// The known source kind, if `source_type` names one.
    pub fn kind(&self) -> Option<SourceKind> {
        self.source_type.parse().ok()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_type)
    }
}

/// Every input kind the Wordcab API knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Generic,
    Audio,
    WordcabTranscript,
    SignedUrl,
    AssemblyAi,
    Deepgram,
    RevAi,
    Vtt,
}

impl SourceKind {
    pub const ALL: [SourceKind; 8] = [
        SourceKind::Generic,
        SourceKind::Audio,
        SourceKind::WordcabTranscript,
        SourceKind::SignedUrl,
        SourceKind::AssemblyAi,
        SourceKind::Deepgram,
        SourceKind::RevAi,
        SourceKind::Vtt,
    ];

    /// Wire name of the kind, as sent in the `source` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Generic => "generic",
            SourceKind::Audio => "audio",
            SourceKind::WordcabTranscript => "wordcab_transcript",
            SourceKind::SignedUrl => "signed_url",
            SourceKind::AssemblyAi => "assembly_ai",
            SourceKind::Deepgram => "deepgram",
            SourceKind::RevAi => "rev_ai",
            SourceKind::Vtt => "vtt",
        }
    }

    /// Name of the source object type that handles this kind.
    pub fn object_name(&self) -> &'static str {
        match self {
            SourceKind::Generic => "GenericSource",
            SourceKind::Audio => "AudioSource",
            SourceKind::WordcabTranscript => "WordcabTranscriptSource",
            SourceKind::SignedUrl => "SignedUrlSource",
            SourceKind::AssemblyAi => "AssemblyAISource",
            SourceKind::Deepgram => "DeepgramSource",
            SourceKind::RevAi => "RevSource",
            SourceKind::Vtt => "VTTSource",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SourceKindParseError;

impl FromStr for SourceKind {
    type Err = SourceKindParseError;

    fn from_str(value: &str) -> Result<SourceKind, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(SourceKindParseError)
    }
}
