// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The sync cycle: pull the remote snapshot, decide, push the result.

use shelfsync_webdav::WebDavClient;
use tokio::sync::Mutex;

use crate::codec::{self, Backup};
use crate::config::{RemotePaths, SyncConfig};
use crate::device::DeviceId;
use crate::error::SyncError;
use crate::merge::Merge;
use crate::snapshot::{Decision, RemoteState, SnapshotRecord, SyncOutcome};
use crate::store::{CONTENT_TYPE_SNAPSHOT, CONTENT_TYPE_TEXT, RemoteStore};

/// Reconciles local snapshots with the copy kept in a [`RemoteStore`].
///
/// At most one cycle runs at a time per syncer; an overlapping call fails
/// with [`SyncError::InProgress`]. Dropping the future returned by
/// [`Syncer::sync`] abandons the in-flight requests, in which case either
/// remote object may or may not reflect the attempted write.
#[derive(Debug)]
pub struct Syncer<S, M> {
    config: SyncConfig,
    device_id: DeviceId,
    paths: RemotePaths,
    store: S,
    merger: M,
    in_flight: Mutex<()>,
}

impl<M> Syncer<WebDavClient, M> {
    /// Creates a syncer talking to the `WebDAV` server from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotConfigured`] if the server URL or a credential
    /// is missing.
    pub fn webdav(
        config: SyncConfig,
        device_id: DeviceId,
        merger: M,
    ) -> Result<Self, SyncError> {
        config.validate()?;
        let client = WebDavClient::new(config.webdav())
            .map_err(|e| SyncError::from_webdav("connect", config.server_url.clone(), e))?;
        Ok(Self::new(config, device_id, client, merger))
    }
}

impl<S: RemoteStore, M> Syncer<S, M> {
    /// Creates a syncer over an arbitrary store.
    pub fn new(config: SyncConfig, device_id: DeviceId, store: S, merger: M) -> Self {
        let paths = config.remote_paths();
        Self {
            config,
            device_id,
            paths,
            store,
            merger,
            in_flight: Mutex::new(()),
        }
    }

    /// The identity of this device.
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// Tags a local backup with this device's identity.
    pub fn snapshot<B>(&self, backup: B) -> SnapshotRecord<B> {
        SnapshotRecord::new(self.device_id.as_str(), backup)
    }

    /// Runs one sync cycle and returns the backup that is now on the server.
    ///
    /// The first failure aborts the cycle; nothing is retried or rolled back.
    ///
    /// # Errors
    ///
    /// Returns the [`SyncError`] of the step that failed.
    #[tracing::instrument(skip_all, fields(device_id = %local.device_id))]
    pub async fn sync<B>(&self, local: SnapshotRecord<B>) -> Result<SyncOutcome<B>, SyncError>
    where
        B: Backup,
        M: Merge<B>,
    {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| SyncError::InProgress)?;

        self.config.validate()?;

        let remote = self.pull().await?;
        let decision = decide(&local.device_id, &remote);
        tracing::debug!(?decision, "reconciled local and remote snapshots");

        let result = match (decision, remote) {
            (Decision::Merge, RemoteState::Present(remote)) => self.merger.merge(local, remote),
            (_, _) => local,
        };

        self.push(&result).await?;
        Ok(SyncOutcome {
            decision,
            backup: result.backup,
        })
    }

    /// Runs one sync cycle, logging any failure instead of returning it.
    ///
    /// Returns the synced backup, or `None` if the cycle failed.
    pub async fn sync_or_log<B>(&self, local: SnapshotRecord<B>) -> Option<B>
    where
        B: Backup,
        M: Merge<B>,
    {
        match self.sync(local).await {
            Ok(outcome) => Some(outcome.backup),
            Err(err) => {
                tracing::error!(kind = ?err.kind(), %err, "error syncing");
                None
            }
        }
    }

    /// Fetches the remote snapshot, if any.
    async fn pull<B: Backup>(&self) -> Result<RemoteState<B>, SyncError> {
        let snapshot_path = &self.paths.snapshot;
        if !self.store.exists(snapshot_path).await? {
            tracing::info!(url = %self.store.locate(snapshot_path), "remote sync file not found");
            return Ok(RemoteState::NoRemote);
        }
        tracing::debug!(url = %self.store.locate(snapshot_path), "found remote sync file");

        let device_id_path = &self.paths.device_id;
        let device_id = if self.store.exists(device_id_path).await? {
            let raw = self.store.read(device_id_path).await?;
            let id = String::from_utf8(raw)
                .map_err(|e| SyncError::CorruptData(format!("device id is not UTF-8: {e}")))?;
            let id = id.trim_end().to_string();
            tracing::debug!(remote_device_id = %id, "retrieved device id");
            id
        } else {
            String::new()
        };

        let blob = self.store.read(snapshot_path).await?;
        let backup = codec::unpack(&blob)?;
        Ok(RemoteState::Present(SnapshotRecord { device_id, backup }))
    }

    /// Uploads this device's marker followed by the compressed snapshot.
    ///
    /// The marker always names this device, whichever id the merged record carries.
    async fn push<B: Backup>(&self, record: &SnapshotRecord<B>) -> Result<(), SyncError> {
        let payload = record.backup.encode()?;
        if payload.is_empty() {
            return Err(SyncError::EmptyPayload);
        }

        let url = self.store.locate(&self.paths.snapshot);
        let compressed = codec::compress(&payload).map_err(|e| compress_failed(url.clone(), &e))?;

        self.store
            .write(
                &self.paths.device_id,
                self.device_id.as_str().as_bytes().to_vec(),
                CONTENT_TYPE_TEXT,
            )
            .await?;
        tracing::debug!(device_id = %self.device_id, "uploaded device id");

        self.store
            .write(&self.paths.snapshot, compressed, CONTENT_TYPE_SNAPSHOT)
            .await?;
        tracing::debug!(url = %url, "uploaded sync data");
        Ok(())
    }
}

fn compress_failed(url: String, err: &std::io::Error) -> SyncError {
    SyncError::Network {
        operation: "compress",
        url,
        message: err.to_string(),
    }
}

/// Chooses how to reconcile the local snapshot with the remote state.
pub fn decide<B>(local_device_id: &str, remote: &RemoteState<B>) -> Decision {
    match remote {
        RemoteState::NoRemote => Decision::AdoptLocal,
        RemoteState::Present(remote) if remote.device_id == local_device_id => {
            Decision::OverwriteRemote
        }
        RemoteState::Present(_) => Decision::Merge,
    }
}
