//! One-shot calls to the Wordcab API.
//!
//! Each function opens a [`Client`] with the given key (or the configured
//! one), runs a single operation and closes the client again.

use domain::client::Client;
use domain::error::Error;
use domain::options::{ExtractOptions, SummaryOptions};
use domain::request::{Request, Response};
use entity::{
    AnyJob, BaseSummary, BaseTranscript, DeletedJob, ExtractJob, InputSource, ListJobs,
    ListSummaries, ListTranscripts, Stats, SummarizeJob,
};
use log::*;
use std::collections::BTreeMap;

pub use domain::client::{DEFAULT_ORDER_BY, DEFAULT_PAGE_SIZE};

fn with_client<T>(
    api_key: Option<&str>,
    call: impl FnOnce(&Client) -> Result<T, Error>,
) -> Result<T, Error> {
    let client = Client::new(api_key)?;
    let result = call(&client);
    if let Err(e) = &result {
        debug!("Wordcab call failed: {}", e);
    }
    client.close();
    result
}

/// Runs any operation described by `request`.
pub fn request(request: Request, api_key: Option<&str>) -> Result<Response, Error> {
    with_client(api_key, |client| client.request(request))
}

/// Account stats such as spend and request volume, by time range or tag.
///
/// Timestamps may be given as `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn get_stats(
    min_created: Option<&str>,
    max_created: Option<&str>,
    tags: Option<&[String]>,
    api_key: Option<&str>,
) -> Result<Stats, Error> {
    with_client(api_key, |client| {
        client.get_stats(min_created, max_created, tags)
    })
}

pub fn start_extract(
    source: &InputSource,
    options: ExtractOptions,
    api_key: Option<&str>,
) -> Result<ExtractJob, Error> {
    with_client(api_key, |client| client.start_extract(source, options))
}

pub fn start_summary(
    source: &InputSource,
    options: SummaryOptions,
    api_key: Option<&str>,
) -> Result<SummarizeJob, Error> {
    with_client(api_key, |client| client.start_summary(source, options))
}

/// Lists jobs, [`DEFAULT_PAGE_SIZE`] and [`DEFAULT_ORDER_BY`] being the usual choice.
pub fn list_jobs(page_size: u32, order_by: &str, api_key: Option<&str>) -> Result<ListJobs, Error> {
    with_client(api_key, |client| client.list_jobs(page_size, order_by))
}

pub fn retrieve_job(job_name: &str, api_key: Option<&str>) -> Result<AnyJob, Error> {
    with_client(api_key, |client| client.retrieve_job(job_name))
}

pub fn delete_job(job_name: &str, api_key: Option<&str>) -> Result<DeletedJob, Error> {
    with_client(api_key, |client| client.delete_job(job_name))
}

pub fn list_transcripts(page_size: u32, api_key: Option<&str>) -> Result<ListTranscripts, Error> {
    with_client(api_key, |client| client.list_transcripts(page_size))
}

pub fn retrieve_transcript(
    transcript_id: &str,
    api_key: Option<&str>,
) -> Result<BaseTranscript, Error> {
    with_client(api_key, |client| client.retrieve_transcript(transcript_id))
}

pub fn change_speaker_labels(
    transcript_id: &str,
    speaker_map: &BTreeMap<String, String>,
    api_key: Option<&str>,
) -> Result<BaseTranscript, Error> {
    with_client(api_key, |client| {
        client.change_speaker_labels(transcript_id, speaker_map)
    })
}

pub fn list_summaries(page_size: u32, api_key: Option<&str>) -> Result<ListSummaries, Error> {
    with_client(api_key, |client| client.list_summaries(page_size))
}

pub fn retrieve_summary(summary_id: &str, api_key: Option<&str>) -> Result<BaseSummary, Error> {
    with_client(api_key, |client| client.retrieve_summary(summary_id))
}
