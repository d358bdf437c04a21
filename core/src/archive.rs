// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Deleting archives through the archive server's REST API.

use std::time::Duration;

use reqwest::{Client, Method, Url};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Suffixes stripped from a resource URL to get the archive endpoint.
/// Checked in order, the first match wins.
const RESOURCE_SUFFIXES: &[&str] = &[
    "/files/",
    "/files",
    "files/",
    "files",
    "/thumbnail/",
    "/thumbnail",
    "thumbnail/",
    "thumbnail",
];

/// Errors of the archive API helpers.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The source URL could not be parsed.
    #[error("invalid URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        message: String,
    },

    /// The URL does not point at an archive resource.
    #[error("URL does not end with 'files' or 'thumbnail': {0}")]
    UnsupportedUrl(String),

    /// Transport failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("DELETE failed: HTTP {status}, response: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
}

/// Resolves the archive endpoint a resource URL belongs to.
///
/// `https://host/api/archives/<id>/files` and `.../thumbnail` resolve to
/// `https://host/api/archives/<id>`; a reader link `https://host/reader?id=<id>`
/// resolves to the same endpoint. Query and fragment are dropped.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidUrl`] if the URL cannot be parsed and
/// [`ArchiveError::UnsupportedUrl`] if it names no archive.
pub fn resolve_archive_api_url(source: &str) -> Result<String, ArchiveError> {
    let url = Url::parse(source).map_err(|e| ArchiveError::InvalidUrl {
        url: source.to_string(),
        message: e.to_string(),
    })?;

    let origin = format!("{}://{}", url.scheme(), url.authority());
    if url.path() == "/reader" {
        if let Some((_, id)) = url.query_pairs().find(|(k, v)| k == "id" && !v.is_empty()) {
            return Ok(format!("{origin}/api/archives/{id}"));
        }
    }

    let full = format!("{origin}{}", url.path());
    RESOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| full.strip_suffix(suffix))
        .map(str::to_string)
        .ok_or_else(|| ArchiveError::UnsupportedUrl(source.to_string()))
}

/// Input of [`ArchiveClient::delete_archive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArchiveRequest {
    /// A resource URL of the archive, e.g. `https://host/api/archives/<id>/files`.
    pub source_url: String,
    /// Optional bearer token.
    pub auth_token: Option<String>,
}

impl DeleteArchiveRequest {
    /// Creates a request without authentication.
    #[must_use]
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            auth_token: None,
        }
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// HTTP client for the archive API.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
}

impl ArchiveClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new() -> Result<Self, ArchiveError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Deletes the archive a resource URL belongs to and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved, the request fails, or
    /// the server answers with a non-success status.
    #[tracing::instrument(skip(self, request), fields(source_url = %request.source_url))]
    pub async fn delete_archive(
        &self,
        request: &DeleteArchiveRequest,
    ) -> Result<String, ArchiveError> {
        let url = resolve_archive_api_url(&request.source_url)?;
        tracing::debug!(url = %url, "resolved archive API URL");

        let mut req = self
            .client
            .request(Method::DELETE, &url)
            .header("Content-Type", "application/json");
        if let Some(token) = &request.auth_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(body)
        } else {
            Err(ArchiveError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
