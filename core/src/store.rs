// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use shelfsync_webdav::{Href, WebDavClient};

use crate::error::SyncError;

/// Content type of the compressed snapshot blob.
pub const CONTENT_TYPE_SNAPSHOT: &str = "application/octet-stream";

/// Content type of the device identity marker.
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Remote blob store used by the sync cycle.
///
/// Paths are object names relative to the store root.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Probes whether an object exists.
    async fn exists(&self, path: &str) -> Result<bool, SyncError>;

    /// Reads a whole object.
    async fn read(&self, path: &str) -> Result<Vec<u8>, SyncError>;

    /// Replaces a whole object.
    async fn write(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<(), SyncError>;

    /// Full location of an object, for diagnostics.
    fn locate(&self, path: &str) -> String {
        path.to_string()
    }
}

#[async_trait]
impl RemoteStore for WebDavClient {
    async fn exists(&self, path: &str) -> Result<bool, SyncError> {
        let href = Href::from(path);
        WebDavClient::exists(self, &href)
            .await
            .map_err(|e| SyncError::from_webdav("exists", self.full_url(&href), e))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, SyncError> {
        let href = Href::from(path);
        WebDavClient::read(self, &href)
            .await
            .map_err(|e| SyncError::from_webdav("read", self.full_url(&href), e))
    }

    async fn write(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<(), SyncError> {
        let href = Href::from(path);
        WebDavClient::write(self, &href, data, content_type)
            .await
            .map_err(|e| SyncError::from_webdav("write", self.full_url(&href), e))
    }

    fn locate(&self, path: &str) -> String {
        self.full_url(&Href::from(path))
    }
}
