// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::types::Href;

/// `WebDAV` client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum WebDavError {
    /// Transport layer error (connection, timeout, TLS, body read).
    Http(String),

    /// Server answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// XML writing error.
    Xml(String),

    /// Authentication rejected by the server.
    Auth(String),

    /// Resource not found.
    NotFound(Href),

    /// Configuration error, raised before any request is sent.
    Config(String),
}

impl fmt::Display for WebDavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Auth(e) => write!(f, "Authentication failed: {e}"),
            Self::NotFound(href) => write!(f, "Resource not found: {href}"),
            Self::Config(e) => write!(f, "WebDAV not configured: {e}"),
        }
    }
}

impl std::error::Error for WebDavError {}

impl From<reqwest::Error> for WebDavError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<quick_xml::Error> for WebDavError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::io::Error> for WebDavError {
    fn from(e: std::io::Error) -> Self {
        Self::Xml(format!("IO error: {e}"))
    }
}
