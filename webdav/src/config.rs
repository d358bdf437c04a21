// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::WebDavError;

/// HTTP Basic credentials sent with every request.
#[derive(Clone)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `WebDAV` server configuration.
#[derive(Debug, Clone)]
pub struct WebDavConfig {
    /// Base URL of the `WebDAV` server, objects are addressed relative to it.
    pub base_url: String,
    /// Basic authentication credentials.
    pub credentials: Credentials,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent string.
    pub user_agent: String,
}

impl WebDavConfig {
    /// Creates a configuration using HTTP Basic authentication.
    #[must_use]
    pub fn basic(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Checks that the server URL and both credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`WebDavError::Config`] naming the first missing value.
    pub fn validate(&self) -> Result<(), WebDavError> {
        if self.base_url.trim().is_empty() {
            return Err(WebDavError::Config("server URL is not configured".to_string()));
        }
        if self.credentials.username.is_empty() {
            return Err(WebDavError::Config("username is not configured".to_string()));
        }
        if self.credentials.password.is_empty() {
            return Err(WebDavError::Config("password is not configured".to_string()));
        }
        Ok(())
    }
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_user_agent() -> String {
    concat!("shelfsync-webdav/", env!("CARGO_PKG_VERSION")).to_string()
}
