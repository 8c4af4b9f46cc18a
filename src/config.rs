// src/config.rs
use crate::domain::news::{SourceRef, value_objects::MAX_PAGE_SIZE};
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

const DEFAULT_DATABASE_URL: &str = "sqlite://news_gateway.db";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_AGGREGATE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MAX_CONCURRENCY: usize = 8;
const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    news_sources: Vec<SourceRef>,
    news_details_source: Option<SourceRef>,
    news_filter_source: Option<SourceRef>,
    censorship_url: Url,
    comment_service_url: Option<Url>,
    database_url: String,
    listen_addr: String,
    request_timeout: Duration,
    aggregate_timeout: Duration,
    max_concurrency: usize,
    page_size: u32,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, letting a `.env` file
    /// populate them first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let news_sources = get("NEWS_SOURCE_URLS")
            .ok_or(ConfigError::Missing("NEWS_SOURCE_URLS"))?
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| parse_source("NEWS_SOURCE_URLS", segment))
            .collect::<Result<Vec<_>, _>>()?;
        if news_sources.is_empty() {
            return Err(ConfigError::Missing("NEWS_SOURCE_URLS"));
        }

        let news_details_source = get("NEWS_DETAILS_URL")
            .map(|value| parse_source("NEWS_DETAILS_URL", &value))
            .transpose()?;
        let news_filter_source = get("NEWS_FILTER_URL")
            .map(|value| parse_source("NEWS_FILTER_URL", &value))
            .transpose()?;

        let censorship_url = get("CENSORSHIP_SERVICE_URL")
            .ok_or(ConfigError::Missing("CENSORSHIP_SERVICE_URL"))
            .and_then(|value| parse_http_url("CENSORSHIP_SERVICE_URL", &value))?;
        let comment_service_url = get("COMMENT_SERVICE_URL")
            .map(|value| parse_http_url("COMMENT_SERVICE_URL", &value))
            .transpose()?;

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        let request_timeout = Duration::from_millis(parse_positive(
            "REQUEST_TIMEOUT_MS",
            get("REQUEST_TIMEOUT_MS"),
            DEFAULT_REQUEST_TIMEOUT_MS,
        )?);
        let aggregate_timeout = Duration::from_millis(parse_positive(
            "AGGREGATE_TIMEOUT_MS",
            get("AGGREGATE_TIMEOUT_MS"),
            DEFAULT_AGGREGATE_TIMEOUT_MS,
        )?);
        let max_concurrency = parse_positive(
            "AGGREGATOR_MAX_CONCURRENCY",
            get("AGGREGATOR_MAX_CONCURRENCY"),
            DEFAULT_MAX_CONCURRENCY,
        )?;
        let page_size = parse_positive("NEWS_PAGE_SIZE", get("NEWS_PAGE_SIZE"), DEFAULT_PAGE_SIZE)?;
        if page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "NEWS_PAGE_SIZE must be at most {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            news_sources,
            news_details_source,
            news_filter_source,
            censorship_url,
            comment_service_url,
            database_url,
            listen_addr,
            request_timeout,
            aggregate_timeout,
            max_concurrency,
            page_size,
            allowed_origins,
        })
    }

    pub fn news_sources(&self) -> &[SourceRef] {
        &self.news_sources
    }

    pub const fn news_details_source(&self) -> Option<&SourceRef> {
        self.news_details_source.as_ref()
    }

    pub const fn news_filter_source(&self) -> Option<&SourceRef> {
        self.news_filter_source.as_ref()
    }

    pub const fn censorship_url(&self) -> &Url {
        &self.censorship_url
    }

    /// When present, comments go to the remote comment service instead of
    /// the local database.
    pub const fn comment_service_url(&self) -> Option<&Url> {
        self.comment_service_url.as_ref()
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub const fn aggregate_timeout(&self) -> Duration {
        self.aggregate_timeout
    }

    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn parse_http_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::Invalid(format!("{key}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid(format!(
            "{key}: unsupported scheme '{other}'"
        ))),
    }
}

fn parse_source(key: &str, value: &str) -> Result<SourceRef, ConfigError> {
    SourceRef::parse(value).map_err(|err| ConfigError::Invalid(format!("{key}: {err}")))
}

fn parse_positive<T>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
