//! The Wordcab API client.
//!
//! Every operation validates its arguments and prepares the request it would
//! send. No transport is wired in yet, so sending always fails with
//! [`DomainErrorKind::NotImplemented`](crate::error::DomainErrorKind::NotImplemented).

use entity::source_object::Origin;
use entity::{
    AnyJob, BaseSummary, BaseTranscript, DeletedJob, ExtractJob, InputSource, ListJobs,
    ListSummaries, ListTranscripts, Stats, SummarizeJob,
};
use log::*;
use secrecy::SecretString;
use service::config::Config;
use std::collections::BTreeMap;
use wordcab_auth::api_key::{ApiKeyAuth, KeyOrigin};

use crate::error::{invalid_error, not_implemented, Error, InvalidErrorKind};
use crate::options::{ExtractOptions, SummaryOptions};
use crate::request::{
    AuthorizedRequest, HttpVerb, Method, PreparedRequest, Request, RequestBody, Response,
};
use crate::validation::{
    check_extract_pipelines, check_not_empty, check_order_by, check_page_size,
    check_summary_length, check_summary_pipelines, check_summary_type, format_lengths,
    format_pipelines, format_tags, normalize_time_range,
};

/// Default page size of the listing operations.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default ordering of [`Client::list_jobs`].
pub const DEFAULT_ORDER_BY: &str = "-time_started";

#[derive(Debug)]
pub struct Client {
    auth: ApiKeyAuth,
}

impl Client {
    /// Opens a client with `api_key`, falling back to `WORDCAB_API_KEY` (or a
    /// `.env` file) when no key is given.
    ///
    /// Unreadable environment settings only fail construction when the
    /// environment is also where the key has to come from.
    pub fn new(api_key: Option<&str>) -> Result<Self, Error> {
        match Config::from_env() {
            Ok(config) => Self::with_config(api_key, &config),
            Err(err) if api_key.map_or(false, |key| !key.is_empty()) => {
                warn!("Ignoring unreadable Wordcab settings: {}", err);
                Self::from_auth(ApiKeyAuth::resolve(api_key, None)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn with_config(api_key: Option<&str>, config: &Config) -> Result<Self, Error> {
        Self::from_auth(ApiKeyAuth::resolve(api_key, config.wordcab_api_key())?)
    }

    fn from_auth(auth: ApiKeyAuth) -> Result<Self, Error> {
        debug!("Wordcab client opened with {:?} API key", auth.origin());
        Ok(Self { auth })
    }

    pub fn api_key(&self) -> &SecretString {
        self.auth.api_key()
    }

    pub fn key_origin(&self) -> KeyOrigin {
        self.auth.origin()
    }

    /// Attaches this client's bearer credentials to `request`.
    pub fn authorize(&self, request: PreparedRequest) -> AuthorizedRequest {
        request.authorized(self.auth.authorization())
    }

    /// Ends the client scope.
    pub fn close(self) {
        debug!("Wordcab client closed");
    }

    /// Runs `request` through the matching operation.
    pub fn request(&self, request: Request) -> Result<Response, Error> {
        debug!("Dispatching {}", request.method());
        match request {
            Request::GetStats {
                min_created,
                max_created,
                tags,
            } => self
                .get_stats(min_created.as_deref(), max_created.as_deref(), tags.as_deref())
                .map(Response::Stats),
            Request::StartExtract { source, options } => self
                .start_extract(&source, options)
                .map(Response::ExtractJob),
            Request::StartSummary { source, options } => self
                .start_summary(&source, options)
                .map(Response::SummarizeJob),
            Request::ListJobs {
                page_size,
                order_by,
            } => self
                .list_jobs(page_size, &order_by)
                .map(Response::ListJobs),
            Request::RetrieveJob { job_name } => {
                self.retrieve_job(&job_name).map(Response::Job)
            }
            Request::DeleteJob { job_name } => {
                self.delete_job(&job_name).map(Response::DeletedJob)
            }
            Request::ListTranscripts { page_size } => self
                .list_transcripts(page_size)
                .map(Response::ListTranscripts),
            Request::RetrieveTranscript { transcript_id } => self
                .retrieve_transcript(&transcript_id)
                .map(Response::Transcript),
            Request::ChangeSpeakerLabels {
                transcript_id,
                speaker_map,
            } => self
                .change_speaker_labels(&transcript_id, &speaker_map)
                .map(Response::Transcript),
            Request::ListSummaries { page_size } => self
                .list_summaries(page_size)
                .map(Response::ListSummaries),
            Request::RetrieveSummary { summary_id } => self
                .retrieve_summary(&summary_id)
                .map(Response::Summary),
        }
    }

    /// Account stats such as spend and request volume, by time range or tag.
    pub fn get_stats(
        &self,
        min_created: Option<&str>,
        max_created: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<Stats, Error> {
        self.send(Self::prepare_get_stats(min_created, max_created, tags)?)
    }

    pub fn prepare_get_stats(
        min_created: Option<&str>,
        max_created: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<PreparedRequest, Error> {
        let (min_created, max_created) = normalize_time_range(min_created, max_created)?;

        let mut request = PreparedRequest::new(Method::GetStats, HttpVerb::Get, "/me");
        if let Some(min_created) = min_created {
            request = request.query("min_created", min_created);
        }
        if let Some(max_created) = max_created {
            request = request.query("max_created", max_created);
        }
        if let Some(tags) = tags.filter(|tags| !tags.is_empty()) {
            request = request.query("tags", format_tags(tags));
        }
        Ok(request)
    }

    /// Starts an extraction job on `source`.
    pub fn start_extract(
        &self,
        source: &InputSource,
        options: ExtractOptions,
    ) -> Result<ExtractJob, Error> {
        self.send(Self::prepare_start_extract(source, &options)?)
    }

    pub fn prepare_start_extract(
        source: &InputSource,
        options: &ExtractOptions,
    ) -> Result<PreparedRequest, Error> {
        check_not_empty("display_name", &options.display_name)?;
        check_extract_pipelines(&options.pipelines)?;

        let mut request = PreparedRequest::new(Method::StartExtract, HttpVerb::Post, "/extract")
            .query("source", source.kind())
            .query("display_name", &options.display_name)
            .query("pipelines", format_pipelines(&options.pipelines))
            .query("ephemeral_data", options.ephemeral_data)
            .query("only_api", options.only_api)
            .query("split_long_utterances", options.split_long_utterances);
        if let Some(tags) = options.tags.as_deref().filter(|tags| !tags.is_empty()) {
            request = request.query("tags", format_tags(tags));
        }
        Ok(request.body(upload(source)))
    }

    /// Starts a summary job on `source`.
    pub fn start_summary(
        &self,
        source: &InputSource,
        options: SummaryOptions,
    ) -> Result<SummarizeJob, Error> {
        self.send(Self::prepare_start_summary(source, &options)?)
    }

    pub fn prepare_start_summary(
        source: &InputSource,
        options: &SummaryOptions,
    ) -> Result<PreparedRequest, Error> {
        check_not_empty("display_name", &options.display_name)?;
        check_summary_type(&options.summary_type)?;
        check_summary_length(&options.summary_length)?;
        check_summary_pipelines(&options.pipelines)?;

        let mut request = PreparedRequest::new(Method::StartSummary, HttpVerb::Post, "/summarize")
            .query("source", source.kind())
            .query("display_name", &options.display_name)
            .query("summary_type", &options.summary_type)
            .query("summary_lens", format_lengths(&options.summary_length))
            .query("pipeline", format_pipelines(&options.pipelines))
            .query("ephemeral_data", options.ephemeral_data)
            .query("only_api", options.only_api)
            .query("split_long_utterances", options.split_long_utterances);
        if let Some(tags) = options.tags.as_deref().filter(|tags| !tags.is_empty()) {
            request = request.query("tags", format_tags(tags));
        }
        Ok(request.body(upload(source)))
    }

    pub fn list_jobs(&self, page_size: u32, order_by: &str) -> Result<ListJobs, Error> {
        self.send(Self::prepare_list_jobs(page_size, order_by)?)
    }

    pub fn prepare_list_jobs(page_size: u32, order_by: &str) -> Result<PreparedRequest, Error> {
        check_page_size(page_size)?;
        check_order_by(order_by)?;

        Ok(PreparedRequest::new(Method::ListJobs, HttpVerb::Get, "/jobs")
            .query("page_size", page_size)
            .query("order_by", order_by))
    }

    pub fn retrieve_job(&self, job_name: &str) -> Result<AnyJob, Error> {
        self.send(Self::prepare_retrieve_job(job_name)?)
    }

    pub fn prepare_retrieve_job(job_name: &str) -> Result<PreparedRequest, Error> {
        check_not_empty("job_name", job_name)?;
        Ok(PreparedRequest::new(
            Method::RetrieveJob,
            HttpVerb::Get,
            format!("/jobs/{}", urlencoding::encode(job_name)),
        ))
    }

    pub fn delete_job(&self, job_name: &str) -> Result<DeletedJob, Error> {
        self.send(Self::prepare_delete_job(job_name)?)
    }

    pub fn prepare_delete_job(job_name: &str) -> Result<PreparedRequest, Error> {
        check_not_empty("job_name", job_name)?;
        Ok(PreparedRequest::new(
            Method::DeleteJob,
            HttpVerb::Delete,
            format!("/jobs/{}", urlencoding::encode(job_name)),
        ))
    }

    pub fn list_transcripts(&self, page_size: u32) -> Result<ListTranscripts, Error> {
        self.send(Self::prepare_list_transcripts(page_size)?)
    }

    pub fn prepare_list_transcripts(page_size: u32) -> Result<PreparedRequest, Error> {
        check_page_size(page_size)?;
        Ok(
            PreparedRequest::new(Method::ListTranscripts, HttpVerb::Get, "/transcripts")
                .query("page_size", page_size),
        )
    }

    pub fn retrieve_transcript(&self, transcript_id: &str) -> Result<BaseTranscript, Error> {
        self.send(Self::prepare_retrieve_transcript(transcript_id)?)
    }

    pub fn prepare_retrieve_transcript(transcript_id: &str) -> Result<PreparedRequest, Error> {
        check_not_empty("transcript_id", transcript_id)?;
        Ok(PreparedRequest::new(
            Method::RetrieveTranscript,
            HttpVerb::Get,
            format!("/transcripts/{}", urlencoding::encode(transcript_id)),
        ))
    }

    /// Renames the speakers of a transcript, from label (`A`, `B`...) to name.
    pub fn change_speaker_labels(
        &self,
        transcript_id: &str,
        speaker_map: &BTreeMap<String, String>,
    ) -> Result<BaseTranscript, Error> {
        self.send(Self::prepare_change_speaker_labels(
            transcript_id,
            speaker_map,
        )?)
    }

    pub fn prepare_change_speaker_labels(
        transcript_id: &str,
        speaker_map: &BTreeMap<String, String>,
    ) -> Result<PreparedRequest, Error> {
        check_not_empty("transcript_id", transcript_id)?;
        if speaker_map.is_empty() {
            return Err(invalid_error(
                InvalidErrorKind::Empty("speaker_map"),
                "You must provide at least one speaker label.",
            ));
        }
        for label in speaker_map.keys() {
            check_not_empty("speaker label", label)?;
        }

        let body = serde_json::json!({ "speaker_map": speaker_map });
        Ok(PreparedRequest::new(
            Method::ChangeSpeakerLabels,
            HttpVerb::Patch,
            format!("/transcripts/{}", urlencoding::encode(transcript_id)),
        )
        .body(RequestBody::Json(body)))
    }

    pub fn list_summaries(&self, page_size: u32) -> Result<ListSummaries, Error> {
        self.send(Self::prepare_list_summaries(page_size)?)
    }

    pub fn prepare_list_summaries(page_size: u32) -> Result<PreparedRequest, Error> {
        check_page_size(page_size)?;
        Ok(
            PreparedRequest::new(Method::ListSummaries, HttpVerb::Get, "/summaries")
                .query("page_size", page_size),
        )
    }

    pub fn retrieve_summary(&self, summary_id: &str) -> Result<BaseSummary, Error> {
        self.send(Self::prepare_retrieve_summary(summary_id)?)
    }

    pub fn prepare_retrieve_summary(summary_id: &str) -> Result<PreparedRequest, Error> {
        check_not_empty("summary_id", summary_id)?;
        Ok(PreparedRequest::new(
            Method::RetrieveSummary,
            HttpVerb::Get,
            format!("/summaries/{}", urlencoding::encode(summary_id)),
        ))
    }

    // TODO: hand `AuthorizedRequest` to an HTTP transport once one is chosen.
    fn send<T>(&self, request: PreparedRequest) -> Result<T, Error> {
        let request = self.authorize(request);
        debug!(
            "Prepared {} with {} header(s)",
            request.request,
            request.headers().len()
        );
        warn!("{} is not implemented yet", request.request.method);
        Err(not_implemented(request.request.method))
    }
}

fn upload(source: &InputSource) -> RequestBody {
    let file_name = match source.base().origin() {
        Origin::Local { stem, suffix, .. } => format!("{}{}", stem, suffix),
        Origin::Remote(url) => url.to_string(),
    };
    RequestBody::File {
        file_name,
        size: source.file_object().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;
    use crate::options::SummaryLength;
    use clap::Parser;
    use entity::GenericSource;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use service::config::{API_KEY_ENV, LOG_LEVEL_ENV};
    use std::env;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    // The explicit level keeps these tests independent of the environment
    // tests below.
    fn config() -> Config {
        Config::try_parse_from(["domain", "--log-level-filter", "INFO"]).unwrap()
    }

    fn client() -> Client {
        Client::with_config(Some("dummy_api_key"), &config()).unwrap()
    }

    fn transcript_file() -> NamedTempFile {
        let mut file = Builder::new()
            .prefix("sample_1")
            .suffix(".txt")
            .tempfile()
            .unwrap();
        file.write_all(b"A: Hello.\nB: Hi.\n").unwrap();
        file
    }

    fn generic_source(file: &NamedTempFile) -> InputSource {
        GenericSource::from_path(file.path()).unwrap().into()
    }

    /// Restores the saved environment variables when dropped.
    struct EnvGuard {
        saved_vars: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[&'static str]) -> Self {
            let saved_vars = vars.iter().map(|var| (*var, env::var(var).ok())).collect();
            EnvGuard { saved_vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved_vars {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    fn assert_invalid(result: Result<PreparedRequest, Error>, kind: InvalidErrorKind) {
        assert_eq!(result.unwrap_err().error_kind, DomainErrorKind::Invalid(kind));
    }

    #[test]
    fn test_client_with_explicit_key() {
        let client = client();
        assert_eq!(client.api_key().expose_secret(), "dummy_api_key");
        client.close();
    }

    #[test]
    fn test_client_with_configured_key() {
        let config = config().set_wordcab_api_key(Some("configured_key".to_string()));
        let client = Client::with_config(None, &config).unwrap();
        assert_eq!(client.api_key().expose_secret(), "configured_key");
    }

    #[test]
    fn test_client_without_key_is_config_error() {
        let config = config().set_wordcab_api_key(None);
        let err = Client::with_config(None, &config).unwrap_err();
        assert_eq!(err.error_kind, DomainErrorKind::Config);

        let err = Client::with_config(Some("bad key"), &config).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Config,
            "malformed keys are configuration errors"
        );
    }

    #[test]
    #[serial]
    fn test_new_reads_key_from_environment() {
        let _guard = EnvGuard::new(&[API_KEY_ENV, LOG_LEVEL_ENV]);
        env::remove_var(LOG_LEVEL_ENV);

        env::set_var(API_KEY_ENV, "environment_key");
        let client = Client::new(None).unwrap();
        assert_eq!(client.api_key().expose_secret(), "environment_key");
        assert_eq!(client.key_origin(), KeyOrigin::Configured);

        let client = Client::new(Some("dummy_api_key")).unwrap();
        assert_eq!(client.key_origin(), KeyOrigin::Explicit);
    }

    #[test]
    #[serial]
    fn test_new_without_any_key_is_config_error() {
        let _guard = EnvGuard::new(&[API_KEY_ENV, LOG_LEVEL_ENV]);
        env::remove_var(LOG_LEVEL_ENV);
        // An empty value shadows any key a local .env file could provide.
        env::set_var(API_KEY_ENV, "");

        let err = Client::new(None).unwrap_err();
        assert_eq!(err.error_kind, DomainErrorKind::Config);
    }

    #[test]
    #[serial]
    fn test_new_with_explicit_key_tolerates_log_level_setting() {
        let _guard = EnvGuard::new(&[API_KEY_ENV, LOG_LEVEL_ENV]);
        env::set_var(API_KEY_ENV, "");

        env::set_var(LOG_LEVEL_ENV, "info");
        let client = Client::new(Some("dummy_api_key")).unwrap();
        assert_eq!(client.api_key().expose_secret(), "dummy_api_key");

        env::set_var(LOG_LEVEL_ENV, "LOUD");
        let client = Client::new(Some("dummy_api_key")).unwrap();
        assert_eq!(client.key_origin(), KeyOrigin::Explicit);

        let err = Client::new(None).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Config,
            "without a key the unreadable settings still fail"
        );
    }

    #[test]
    fn test_authorize_attaches_bearer_header() {
        let request = client().authorize(Client::prepare_list_summaries(5).unwrap());
        let [(name, value)] = request.headers();
        assert_eq!(name, "Authorization");
        assert_eq!(value.expose_secret(), "Bearer dummy_api_key");
        assert_eq!(request.request.path, "/summaries");
        assert!(!format!("{:?}", request).contains("dummy_api_key"));
    }

    #[test]
    fn test_every_method_is_not_implemented() {
        let client = client();
        let file = transcript_file();
        let source = generic_source(&file);
        let requests = vec![
            Request::GetStats {
                min_created: Some("2021-01-01".to_string()),
                max_created: Some("2021-01-31".to_string()),
                tags: None,
            },
            Request::StartExtract {
                source: source.clone(),
                options: ExtractOptions::new("test"),
            },
            Request::StartSummary {
                source,
                options: SummaryOptions::new("test", "narrative"),
            },
            Request::ListJobs {
                page_size: DEFAULT_PAGE_SIZE,
                order_by: DEFAULT_ORDER_BY.to_string(),
            },
            Request::RetrieveJob {
                job_name: "job_1".to_string(),
            },
            Request::DeleteJob {
                job_name: "job_1".to_string(),
            },
            Request::ListTranscripts {
                page_size: DEFAULT_PAGE_SIZE,
            },
            Request::RetrieveTranscript {
                transcript_id: "transcript_1".to_string(),
            },
            Request::ChangeSpeakerLabels {
                transcript_id: "transcript_1".to_string(),
                speaker_map: BTreeMap::from([("A".to_string(), "Alice".to_string())]),
            },
            Request::ListSummaries {
                page_size: DEFAULT_PAGE_SIZE,
            },
            Request::RetrieveSummary {
                summary_id: "summary_1".to_string(),
            },
        ];

        for request in requests {
            let method = request.method();
            let err = client.request(request).unwrap_err();
            assert_eq!(
                err.error_kind,
                DomainErrorKind::NotImplemented(method),
                "{} should validate then fail as not implemented",
                method
            );
        }
    }

    #[test]
    fn test_invalid_arguments_fail_before_not_implemented() {
        let client = client();
        let err = client.list_jobs(DEFAULT_PAGE_SIZE, "invalid").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::OrderBy("invalid".to_string()))
        );

        let err = client.retrieve_job("").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::Empty("job_name"))
        );
    }

    #[test]
    fn test_prepare_get_stats() {
        let tags = vec!["sales".to_string(), "q3".to_string()];
        let request =
            Client::prepare_get_stats(Some("2021-01-01"), Some("2021-01-31"), Some(&tags)).unwrap();

        assert_eq!(request.verb, HttpVerb::Get);
        assert_eq!(request.path, "/me");
        assert_eq!(request.query_value("min_created"), Some("2021-01-01T00:00:00"));
        assert_eq!(request.query_value("max_created"), Some("2021-01-31T00:00:00"));
        assert_eq!(request.query_value("tags"), Some("sales,q3"));

        let request = Client::prepare_get_stats(None, None, None).unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_prepare_start_summary() {
        let file = transcript_file();
        let source = generic_source(&file);
        let options = SummaryOptions::new("test-sdk-txt", "reason_conclusion")
            .summary_length(vec![1, 3])
            .tags(["sales"]);

        let request = Client::prepare_start_summary(&source, &options).unwrap();
        assert_eq!(request.verb, HttpVerb::Post);
        assert_eq!(request.path, "/summarize");
        assert_eq!(request.query_value("source"), Some("generic"));
        assert_eq!(request.query_value("summary_type"), Some("reason_conclusion"));
        assert_eq!(request.query_value("summary_lens"), Some("1,3"));
        assert_eq!(request.query_value("pipeline"), Some("transcribe,summarize"));
        assert_eq!(request.query_value("ephemeral_data"), Some("false"));
        assert_eq!(request.query_value("only_api"), Some("true"));
        assert_eq!(request.query_value("tags"), Some("sales"));

        match request.body {
            Some(RequestBody::File { file_name, size }) => {
                assert!(file_name.starts_with("sample_1"));
                assert!(file_name.ends_with(".txt"));
                assert_eq!(size, 17);
            }
            other => panic!("expected a file upload, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_start_summary_rejects_bad_options() {
        let file = transcript_file();
        let source = generic_source(&file);

        assert_invalid(
            Client::prepare_start_summary(&source, &SummaryOptions::new("test", "invalid")),
            InvalidErrorKind::SummaryType("invalid".to_string()),
        );
        assert_invalid(
            Client::prepare_start_summary(
                &source,
                &SummaryOptions::new("test", "reason_conclusion").summary_length(0),
            ),
            InvalidErrorKind::SummaryLength(0),
        );
        assert_invalid(
            Client::prepare_start_summary(
                &source,
                &SummaryOptions::new("test", "narrative").pipelines(["invalid"]),
            ),
            InvalidErrorKind::Pipeline("invalid".to_string()),
        );
        assert_invalid(
            Client::prepare_start_summary(&source, &SummaryOptions::new("", "narrative")),
            InvalidErrorKind::Empty("display_name"),
        );
        assert_eq!(
            SummaryOptions::new("test", "narrative").summary_length,
            SummaryLength::One(3)
        );
    }

    #[test]
    fn test_prepare_start_extract() {
        let file = transcript_file();
        let source = generic_source(&file);

        let request =
            Client::prepare_start_extract(&source, &ExtractOptions::new("test").pipelines(["emotions"]))
                .unwrap();
        assert_eq!(request.path, "/extract");
        assert_eq!(request.query_value("pipelines"), Some("emotions"));

        assert_invalid(
            Client::prepare_start_extract(
                &source,
                &ExtractOptions::new("test").pipelines(["summarize"]),
            ),
            InvalidErrorKind::Pipeline("summarize".to_string()),
        );
    }

    #[test]
    fn test_prepare_listings() {
        let request = Client::prepare_list_jobs(10, "time_completed").unwrap();
        assert_eq!(
            request.url(),
            "https://wordcab.com/api/v1/jobs?page_size=10&order_by=time_completed"
        );
        for order_by in ["+time_started", "+time_completed"] {
            assert_invalid(
                Client::prepare_list_jobs(10, order_by),
                InvalidErrorKind::OrderBy(order_by.to_string()),
            );
        }

        assert_eq!(
            Client::prepare_list_transcripts(5).unwrap().path,
            "/transcripts"
        );
        assert_eq!(Client::prepare_list_summaries(5).unwrap().path, "/summaries");
        assert_invalid(
            Client::prepare_list_summaries(0),
            InvalidErrorKind::PageSize,
        );
    }

    #[test]
    fn test_prepare_lookups_encode_path_segments() {
        let request = Client::prepare_retrieve_job("job 1/2").unwrap();
        assert_eq!(request.path, "/jobs/job%201%2F2");

        let request = Client::prepare_delete_job("job_1").unwrap();
        assert_eq!(request.verb, HttpVerb::Delete);
        assert_eq!(request.path, "/jobs/job_1");

        assert_eq!(
            Client::prepare_retrieve_transcript("t_1").unwrap().path,
            "/transcripts/t_1"
        );
        assert_eq!(
            Client::prepare_retrieve_summary("s_1").unwrap().path,
            "/summaries/s_1"
        );
    }

    #[test]
    fn test_prepare_change_speaker_labels() {
        let speaker_map = BTreeMap::from([
            ("A".to_string(), "Alice".to_string()),
            ("B".to_string(), "Bob".to_string()),
        ]);
        let request = Client::prepare_change_speaker_labels("t_1", &speaker_map).unwrap();
        assert_eq!(request.verb, HttpVerb::Patch);
        assert_eq!(
            request.body,
            Some(RequestBody::Json(serde_json::json!({
                "speaker_map": {"A": "Alice", "B": "Bob"}
            })))
        );

        assert_invalid(
            Client::prepare_change_speaker_labels("t_1", &BTreeMap::new()),
            InvalidErrorKind::Empty("speaker_map"),
        );
    }
}
