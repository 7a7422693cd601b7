//! # wordcab
//!
//! Rust SDK for the Wordcab transcription and summarization API.
//!
//! - [`Client`] resolves the API key (explicit, `WORDCAB_API_KEY` or `.env`)
//!   and validates every operation before preparing its request
//! - [`api`] wraps each operation in a one-shot call that opens and closes a client
//! - the data model (sources, jobs, stats, summaries, transcripts) lives in [`entity`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordcab::{Client, SummaryOptions};
//! use wordcab::entity::AudioSource;
//!
//! let client = Client::new(None)?;
//! let source = AudioSource::from_path("meeting.mp3")?.into();
//! let job = client.start_summary(&source, SummaryOptions::new("weekly sync", "narrative"))?;
//! ```

pub mod api;

pub use domain::{
    AuthorizedRequest, Client, DomainErrorKind, Error, ExtractOptions, HttpVerb, InvalidErrorKind, Method,
    PreparedRequest, Request, RequestBody, Response, SummaryLength, SummaryOptions,
};
pub use entity;
pub use service::{Config, Logger};
