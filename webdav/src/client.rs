// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `WebDAV` client for whole-object blob operations.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::config::WebDavConfig;
use crate::error::WebDavError;
use crate::http::HttpClient;
use crate::request::PropFindRequest;
use crate::types::Href;

/// `WebDAV` client treating the server as a flat blob store.
///
/// # Example
///
/// ```ignore
/// use shelfsync_webdav::{Href, WebDavClient, WebDavConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebDavConfig::basic("https://dav.example.com/files/me", "me", "secret");
/// let client = WebDavClient::new(config)?;
///
/// let href = Href::from("notes.txt");
/// client.write(&href, b"hello".to_vec(), "text/plain").await?;
/// assert!(client.exists(&href).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebDavClient {
    http: Arc<HttpClient>,
    config: WebDavConfig,
}

impl WebDavClient {
    /// Creates a new `WebDAV` client.
    ///
    /// # Errors
    ///
    /// Returns [`WebDavError::Config`] if the server URL or a credential is
    /// empty, or an error if HTTP client initialization fails.
    pub fn new(config: WebDavConfig) -> Result<Self, WebDavError> {
        config.validate()?;
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Builds the full URL of an object.
    #[must_use]
    pub fn full_url(&self, href: &Href) -> String {
        href.join_to(&self.config.base_url)
    }

    /// Probes whether an object exists without transferring its body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, authentication failure or any
    /// status other than success and 404.
    pub async fn exists(&self, href: &Href) -> Result<bool, WebDavError> {
        let url = self.full_url(href);
        let body = PropFindRequest::probe().build()?;

        let resp = self
            .http
            .send(
                self.http
                    .build_request(propfind_method()?, &url)
                    .header("Content-Type", "application/xml; charset=utf-8")
                    .header("Depth", "0")
                    .body(body),
            )
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "remote object not found");
            return Ok(false);
        }

        HttpClient::check_status(resp, href).await?;
        Ok(true)
    }

    /// Reads the full body of an object.
    ///
    /// # Errors
    ///
    /// Returns [`WebDavError::NotFound`] if the object doesn't exist, or an
    /// error if the request fails.
    pub async fn read(&self, href: &Href) -> Result<Vec<u8>, WebDavError> {
        let url = self.full_url(href);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url), href)
            .await?;

        let bytes = resp.bytes().await?;
        tracing::debug!(url = %url, len = bytes.len(), "read remote object");
        Ok(bytes.to_vec())
    }

    /// Replaces an object with the given bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the upload.
    pub async fn write(
        &self,
        href: &Href,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), WebDavError> {
        let url = self.full_url(href);
        let len = data.len();
        self.http
            .execute(
                self.http
                    .build_request(Method::PUT, &url)
                    .header("Content-Type", content_type)
                    .body(data),
                href,
            )
            .await?;

        tracing::debug!(url = %url, len, content_type, "wrote remote object");
        Ok(())
    }

    /// Deletes an object.
    ///
    /// # Errors
    ///
    /// Returns [`WebDavError::NotFound`] if the object doesn't exist, or an
    /// error if deletion fails.
    pub async fn delete(&self, href: &Href) -> Result<(), WebDavError> {
        let url = self.full_url(href);
        self.http
            .execute(self.http.build_request(Method::DELETE, &url), href)
            .await?;

        tracing::debug!(url = %url, "deleted remote object");
        Ok(())
    }
}

fn propfind_method() -> Result<Method, WebDavError> {
    Method::from_bytes(b"PROPFIND").map_err(|e| WebDavError::Http(format!("Invalid method: {e}")))
}
