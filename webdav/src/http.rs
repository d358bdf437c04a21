// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::WebDavConfig;
use crate::error::WebDavError;
use crate::types::Href;

/// HTTP client for `WebDAV` operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: WebDavConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: WebDavConfig) -> Result<Self, WebDavError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        let credentials = &self.config.credentials;
        self.client
            .request(method, url)
            .basic_auth(&credentials.username, Some(&credentials.password))
    }

    /// Sends a request without interpreting the status code.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure only.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response, WebDavError> {
        Ok(req.send().await?)
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        href: &Href,
    ) -> Result<Response, WebDavError> {
        let resp = self.send(req).await?;
        Self::check_status(resp, href).await
    }

    /// Maps non-success responses onto [`WebDavError`].
    ///
    /// # Errors
    ///
    /// Returns an error for every status outside the 2xx range.
    pub async fn check_status(resp: Response, href: &Href) -> Result<Response, WebDavError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        match status {
            StatusCode::NOT_FOUND => Err(WebDavError::NotFound(href.clone())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(WebDavError::Auth(status.to_string()))
            }
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(WebDavError::Status {
                    status: status.as_u16(),
                    message: text,
                })
            }
        }
    }
}
