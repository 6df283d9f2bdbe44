//! HTTP archive retrieval.
//!
//! Provides a trait-based abstraction for fetching the pinned archive,
//! enabling dependency injection for testing. The archive is read fully
//! into memory; verification and extraction both operate on the in-memory
//! bytes, so nothing is written to disk before the digest has been checked.

use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

/// Network timeout for archive downloads.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Trait for fetching an archive over HTTP.
///
/// Abstractions allow tests to stub network behaviour without network
/// access.
#[cfg_attr(test, mockall::automock)]
pub trait Downloader {
    /// Fetch the complete body at `url` into memory.
    ///
    /// # Errors
    ///
    /// Returns an error on any connection failure, timeout, or non-success
    /// response. Downloads are never retried.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

/// Errors arising from archive downloads.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("request for {url} failed: {reason}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The archive was not found (HTTP 404).
    #[error("archive not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },
}

/// HTTP-based downloader using `ureq`.
pub struct HttpDownloader;

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;

        let mut bytes = Vec::new();
        response
            .into_body()
            .as_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| DownloadError::HttpError {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(bytes)
    }
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`DownloadError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> DownloadError {
    match err {
        ureq::Error::StatusCode(404) => DownloadError::NotFound {
            url: url.to_owned(),
        },
        other => DownloadError::HttpError {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
