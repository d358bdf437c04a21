// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use shelfsync_webdav::WebDavError;

/// Errors that abort a sync cycle.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Server URL, username or password is missing.
    #[error("WebDAV sync is not configured: {0}")]
    NotConfigured(String),

    /// Transport failure or non-success HTTP status.
    #[error("{operation} {url} failed: {message}")]
    Network {
        /// The remote operation that failed, e.g. `read`.
        operation: &'static str,
        /// Full URL of the object.
        url: String,
        /// Underlying error message.
        message: String,
    },

    /// An object that was expected to exist is gone.
    #[error("remote object not found: {url}")]
    NotFound {
        /// Full URL of the object.
        url: String,
    },

    /// The remote snapshot could not be decompressed or decoded.
    #[error("sync data is corrupt: {0}")]
    CorruptData(String),

    /// The snapshot serialized to nothing, pushing it would wipe the remote copy.
    #[error("backup is empty, refusing to overwrite remote sync data")]
    EmptyPayload,

    /// Another cycle is running on the same syncer.
    #[error("another sync is already in progress")]
    InProgress,
}

/// Discriminant of [`SyncError`], for branching without matching on fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncErrorKind {
    /// See [`SyncError::NotConfigured`].
    NotConfigured,
    /// See [`SyncError::Network`].
    Network,
    /// See [`SyncError::NotFound`].
    NotFound,
    /// See [`SyncError::CorruptData`].
    CorruptData,
    /// See [`SyncError::EmptyPayload`].
    EmptyPayload,
    /// See [`SyncError::InProgress`].
    InProgress,
}

impl SyncError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> SyncErrorKind {
        match self {
            Self::NotConfigured(_) => SyncErrorKind::NotConfigured,
            Self::Network { .. } => SyncErrorKind::Network,
            Self::NotFound { .. } => SyncErrorKind::NotFound,
            Self::CorruptData(_) => SyncErrorKind::CorruptData,
            Self::EmptyPayload => SyncErrorKind::EmptyPayload,
            Self::InProgress => SyncErrorKind::InProgress,
        }
    }

    /// Attaches operation and URL context to a `WebDAV` client error.
    pub(crate) fn from_webdav(operation: &'static str, url: String, err: WebDavError) -> Self {
        match err {
            WebDavError::Config(msg) => Self::NotConfigured(msg),
            WebDavError::NotFound(_) => Self::NotFound { url },
            err => Self::Network {
                operation,
                url,
                message: err.to_string(),
            },
        }
    }
}
