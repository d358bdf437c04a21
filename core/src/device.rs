// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::config::SyncConfig;

const DEVICE_ID_FILE: &str = "device_id";

/// Stable per-installation identifier, used to detect same-origin syncs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a device identity from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identity.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the identity for a configuration.
    ///
    /// An explicit `device_id` in the config wins, otherwise the identity is
    /// loaded from (or created in) the state directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no state directory is available or the identity
    /// file cannot be read or written.
    #[tracing::instrument(skip(config))]
    pub async fn resolve(config: &SyncConfig) -> Result<Self, Box<dyn Error>> {
        if let Some(id) = config.device_id.as_deref().filter(|a| !a.trim().is_empty()) {
            tracing::debug!(id, "using configured device id");
            return Ok(Self::new(id.trim()));
        }

        let state_dir = config
            .state_dir
            .as_deref()
            .ok_or("No state directory available to persist the device id")?;
        Self::load_or_create(state_dir).await
    }

    /// Loads the identity persisted in `state_dir`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity file cannot be read or written.
    pub async fn load_or_create(state_dir: &Path) -> Result<Self, Box<dyn Error>> {
        let path = state_dir.join(DEVICE_ID_FILE);
        if fs::try_exists(&path).await? {
            let id = fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read device id at {}: {e}", path.display()))?;
            let id = id.trim();
            if !id.is_empty() {
                tracing::debug!(path = %path.display(), id, "loaded device id");
                return Ok(Self::new(id));
            }
            tracing::warn!(path = %path.display(), "device id file is empty, regenerating");
        }

        tracing::debug!(path = %state_dir.display(), "ensuring state directory exists");
        fs::create_dir_all(state_dir).await?;

        let id = Self::generate();
        fs::write(&path, id.as_str())
            .await
            .map_err(|e| format!("Failed to write device id at {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), id = id.as_str(), "generated new device id");
        Ok(id)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
