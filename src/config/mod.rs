//! Run configuration for the scraper.
//!
//! A run is parameterless: every value has a filmweb default, so `from_env`
//! only exists to let deployments override individual knobs (and to give the
//! tests a seam). Selectors themselves are compile-time constants in the
//! extractor; only URLs, the provider allow-list, list sizing and the output
//! path live here.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable names. Public so tests can refer to them.
pub const ENV_BASE_URL: &str = "VODRANK_BASE_URL";
pub const ENV_SEED_PATH: &str = "VODRANK_SEED_PATH";
pub const ENV_TOP_N: &str = "VODRANK_TOP_N";
pub const ENV_OUTPUT_PATH: &str = "VODRANK_OUTPUT_PATH";

const DEFAULT_BASE_URL: &str = "https://www.filmweb.pl";
const DEFAULT_SEED_PATH: &str = "/ranking/vod/film";
const DEFAULT_TOP_N: usize = 10;
const DEFAULT_OUTPUT_PATH: &str = "web-scraper-results.csv";

/// Providers worth keeping from the seed page, matched as case-sensitive
/// substrings of each provider tile's label.
const DEFAULT_TARGET_PROVIDERS: [&str; 4] =
    ["Netflix", "HBO Max", "Canal+ Online", "Disney+"];

/// Whether discovered provider URLs get a trailing `/{current year}` segment.
/// Filmweb's yearly rankings require it; some listing layouts do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSuffix {
    CurrentYear,
    None,
}

/// Scrape run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base_url: String,
    seed_path: String,
    target_providers: Vec<String>,
    top_n_per_source: usize,
    year_suffix: YearSuffix,
    output_path: PathBuf,
}

impl Config {
    /// Create a config explicitly. Tests use this to point at a mock server.
    pub fn new(
        base_url: impl Into<String>,
        seed_path: impl Into<String>,
        target_providers: Vec<String>,
        top_n_per_source: usize,
        year_suffix: YearSuffix,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            seed_path: seed_path.into(),
            target_providers,
            top_n_per_source,
            year_suffix,
            output_path: output_path.into(),
        }
    }

    /// Load from environment variables, falling back to the filmweb defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let seed_path = env::var(ENV_SEED_PATH).unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string());
        let top_n_per_source = match env::var(ENV_TOP_N) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_TOP_N,
                reason: format!("expected a positive integer, got '{raw}'"),
            })?,
            Err(_) => DEFAULT_TOP_N,
        };
        let output_path =
            env::var(ENV_OUTPUT_PATH).unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        Ok(Self::new(
            base_url,
            seed_path,
            DEFAULT_TARGET_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            top_n_per_source,
            YearSuffix::CurrentYear,
            output_path,
        ))
    }

    /// Site root the seed path and provider hrefs are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    /// Path of the seed ranking page, relative to `base_url`.
    pub fn seed_path(&self) -> &str {
        &self.seed_path
    }
    /// Substrings a provider tile label must contain to be scraped.
    pub fn target_providers(&self) -> &[String] {
        &self.target_providers
    }
    /// Cap on entries taken per provider page.
    pub fn top_n_per_source(&self) -> usize {
        self.top_n_per_source
    }
    /// Year-segment policy for discovered provider URLs.
    pub fn year_suffix(&self) -> YearSuffix {
        self.year_suffix
    }
    /// Where the final CSV lands.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
