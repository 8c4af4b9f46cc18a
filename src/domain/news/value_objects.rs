use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

/// Base URL of one upstream content source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRef(Url);

impl SourceRef {
    pub fn new(url: Url) -> DomainResult<Self> {
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(DomainError::Validation(format!(
                "unsupported source scheme `{other}`"
            ))),
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        let url = Url::parse(value.trim())
            .map_err(|err| DomainError::Validation(format!("invalid source url: {err}")))?;
        Self::new(url)
    }

    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

pub const MAX_PAGE_SIZE: u32 = 100;

/// What gets sent upstream: title filter plus one-based page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    title: String,
    page: u32,
    page_size: u32,
}

impl NewsQuery {
    pub fn new(title: impl Into<String>, page: u32, page_size: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page must be positive".into()));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(DomainError::Validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self {
            title: title.into().trim().to_string(),
            page,
            page_size,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}
