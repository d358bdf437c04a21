// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A backup tagged with the device that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord<B> {
    /// Identity of the device that produced the backup.
    ///
    /// Empty when the remote marker object is missing.
    pub device_id: String,
    /// The backup payload.
    pub backup: B,
}

impl<B> SnapshotRecord<B> {
    /// Creates a new record.
    pub fn new(device_id: impl Into<String>, backup: B) -> Self {
        Self {
            device_id: device_id.into(),
            backup,
        }
    }
}

/// What the pull step found on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState<B> {
    /// No snapshot blob on the server.
    NoRemote,
    /// A decoded remote snapshot.
    Present(SnapshotRecord<B>),
}

/// How local and remote state were reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Nothing on the server, the local snapshot is pushed unchanged.
    AdoptLocal,
    /// The remote snapshot came from this device and is replaced.
    OverwriteRemote,
    /// The remote snapshot came from another device and was merged.
    Merge,
}

/// Result of a successful sync cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome<B> {
    /// The branch taken.
    pub decision: Decision,
    /// The backup that was pushed.
    pub backup: B,
}
