use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Environment variable holding the Wordcab API key.
pub const API_KEY_ENV: &str = "WORDCAB_API_KEY";

/// Environment variable holding the log level threshold.
pub const LOG_LEVEL_ENV: &str = "WORDCAB_LOG_LEVEL";

/// SDK configuration.
///
/// The SDK is a library, so values come from the environment (and a `.env`
/// file when present) rather than from the host program's command line.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The API key used to authenticate against the Wordcab API
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    wordcab_api_key: Option<String>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        long,
        env = LOG_LEVEL_ENV,
        ignore_case = true,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    /// Loads `.env`, then reads every setting from the environment.
    pub fn from_env() -> Result<Self, clap::Error> {
        // Load .env file first
        dotenv().ok();
        // Only the program name is passed so that arguments meant for the
        // host program are never interpreted as SDK settings
        Config::try_parse_from([env!("CARGO_PKG_NAME")])
    }

    pub fn set_wordcab_api_key(mut self, wordcab_api_key: Option<String>) -> Self {
        self.wordcab_api_key = wordcab_api_key;
        self
    }

    /// Returns the configured API key, if any.
    pub fn wordcab_api_key(&self) -> Option<&str> {
        self.wordcab_api_key.as_deref()
    }
}
