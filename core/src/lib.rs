// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of shelfsync: reconciles a local library backup with the copy kept on
//! a `WebDAV` server.

mod archive;
mod codec;
mod config;
mod device;
mod error;
mod merge;
mod snapshot;
mod store;
mod sync;

pub use crate::archive::{
    ArchiveClient, ArchiveError, DeleteArchiveRequest, resolve_archive_api_url,
};
pub use crate::codec::{
    Backup, SCHEMA_VERSION, compress, decode_versioned, decompress, encode_versioned,
};
pub use crate::config::{APP_NAME, RemotePaths, SyncConfig};
pub use crate::device::DeviceId;
pub use crate::error::{SyncError, SyncErrorKind};
pub use crate::merge::Merge;
pub use crate::snapshot::{Decision, RemoteState, SnapshotRecord, SyncOutcome};
pub use crate::store::{CONTENT_TYPE_SNAPSHOT, CONTENT_TYPE_TEXT, RemoteStore};
pub use crate::sync::{Syncer, decide};
