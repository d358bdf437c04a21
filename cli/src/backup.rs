// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde_json::{Map, Value};
use shelfsync_core::{Backup, SnapshotRecord, SyncError, decode_versioned, encode_versioned};

/// A library backup kept as a JSON document on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBackup(pub Value);

impl JsonBackup {
    /// Returns true if the backup holds no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl Backup for JsonBackup {
    fn encode(&self) -> Result<Vec<u8>, SyncError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        encode_versioned(&self.0)
    }

    fn decode(bytes: &[u8]) -> Result<Self, SyncError> {
        decode_versioned(bytes).map(Self)
    }
}

/// Merges two JSON backups.
///
/// Objects are merged key by key; on conflicting leaves the local value wins
/// and keys only present remotely are kept.
#[must_use]
pub fn merge_json(
    local: SnapshotRecord<JsonBackup>,
    remote: SnapshotRecord<JsonBackup>,
) -> SnapshotRecord<JsonBackup> {
    tracing::debug!(
        local = %local.device_id,
        remote = %remote.device_id,
        "merging backups from different devices"
    );
    let merged = merge_value(local.backup.0, remote.backup.0);
    SnapshotRecord::new(local.device_id, JsonBackup(merged))
}

fn merge_value(local: Value, remote: Value) -> Value {
    match (local, remote) {
        (Value::Object(local), Value::Object(remote)) => Value::Object(merge_map(local, remote)),
        (Value::Null, remote) => remote,
        (local, _) => local,
    }
}

fn merge_map(mut local: Map<String, Value>, remote: Map<String, Value>) -> Map<String, Value> {
    for (key, remote_value) in remote {
        let merged = match local.remove(&key) {
            Some(local_value) => merge_value(local_value, remote_value),
            None => remote_value,
        };
        local.insert(key, merged);
    }
    local
}
