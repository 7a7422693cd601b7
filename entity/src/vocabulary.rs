//! Fixed vocabularies accepted by the Wordcab API.

/// File suffixes accepted by [`crate::source_object::AudioSource`].
pub const AVAILABLE_AUDIO_FORMATS: &[&str] = &[".flac", ".m4a", ".mp3", ".mpga", ".ogg", ".wav"];

/// File suffixes accepted by [`crate::source_object::GenericSource`].
pub const AVAILABLE_GENERIC_FORMATS: &[&str] = &[".json", ".txt"];

pub const AVAILABLE_PLAN: &[&str] = &["free", "paid"];

pub const EXTRACT_AVAILABLE_STATUS: &[&str] = &[
    "Deleted",
    "Error",
    "Extracting",
    "ExtractionComplete",
    "ItemQueued",
    "Pending",
    "PreparingExtraction",
];

pub const EXTRACT_PIPELINES: &[&str] = &[
    "questions_answers",
    "topic_segments",
    "emotions",
    "speaker_talk_ratios",
];

pub const LIST_JOBS_ORDER_BY: &[&str] = &[
    "time_started",
    "time_completed",
    "-time_started",
    "-time_completed",
];

pub const SUMMARIZE_AVAILABLE_STATUS: &[&str] = &[
    "Deleted",
    "Error",
    "ItemQueued",
    "Pending",
    "PreparingSummary",
    "PreparingTranscript",
    "Summarizing",
    "SummaryComplete",
    "Transcribing",
    "TranscriptComplete",
];

/// Inclusive bounds for a requested summary length.
pub const SUMMARY_LENGTHS_RANGE: (u8, u8) = (1, 5);

pub const SUMMARY_PIPELINES: &[&str] = &["transcribe", "summarize"];

pub const SUMMARY_TYPES: &[&str] = &[
    "conversational",
    "narrative",
    "no_speaker",
    "reason_conclusion",
];

/// Status every new job starts in.
pub const DEFAULT_JOB_STATUS: &str = "Pending";
