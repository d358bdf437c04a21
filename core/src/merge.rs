// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::snapshot::SnapshotRecord;

/// Combines snapshots produced on different devices.
///
/// Implemented for any `Fn(local, remote) -> merged` closure.
pub trait Merge<B>: Send + Sync {
    /// Merges the remote snapshot into the local one.
    fn merge(&self, local: SnapshotRecord<B>, remote: SnapshotRecord<B>) -> SnapshotRecord<B>;
}

impl<B, F> Merge<B> for F
where
    F: Fn(SnapshotRecord<B>, SnapshotRecord<B>) -> SnapshotRecord<B> + Send + Sync,
{
    fn merge(&self, local: SnapshotRecord<B>, remote: SnapshotRecord<B>) -> SnapshotRecord<B> {
        self(local, remote)
    }
}
