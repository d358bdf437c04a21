// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shelfsync_core::{
    Backup, SnapshotRecord, SyncConfig, SyncError, decode_versioned, encode_versioned,
};

/// A reading library: title to number of chapters read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub progress: BTreeMap<String, u32>,
}

impl Backup for Library {
    fn encode(&self) -> Result<Vec<u8>, SyncError> {
        encode_versioned(self)
    }

    fn decode(bytes: &[u8]) -> Result<Self, SyncError> {
        decode_versioned(bytes)
    }
}

/// Builds a library from `(title, chapters)` pairs.
#[must_use]
pub fn library(entries: &[(&str, u32)]) -> Library {
    Library {
        progress: entries
            .iter()
            .map(|(title, read)| ((*title).to_string(), *read))
            .collect(),
    }
}

/// Merges two libraries, keeping the furthest progress of each title.
#[must_use]
pub fn merge_libraries(
    local: SnapshotRecord<Library>,
    remote: SnapshotRecord<Library>,
) -> SnapshotRecord<Library> {
    let mut progress = local.backup.progress;
    for (title, read) in remote.backup.progress {
        let entry = progress.entry(title).or_insert(0);
        *entry = (*entry).max(read);
    }
    SnapshotRecord::new(local.device_id, Library { progress })
}

/// Creates a sync configuration pointing at `base_url`.
#[must_use]
pub fn test_config(base_url: &str) -> SyncConfig {
    SyncConfig::new(base_url, "reader", "secret")
}
