// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use shelfsync_webdav::WebDavConfig;

use crate::error::SyncError;

/// The name of the application, also the prefix of remote object names.
pub const APP_NAME: &str = "shelfsync";

/// Configuration of the `WebDAV` sync service.
#[derive(Clone, serde::Deserialize)]
pub struct SyncConfig {
    /// Base URL of the `WebDAV` directory holding the sync objects.
    #[serde(default)]
    pub server_url: String,

    /// Username for HTTP Basic authentication.
    #[serde(default)]
    pub username: String,

    /// Password for HTTP Basic authentication.
    #[serde(default)]
    pub password: String,

    /// Prefix of the remote object names.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Fixed device identity, overriding the generated one.
    #[serde(default)]
    pub device_id: Option<String>,

    /// Directory for storing application state such as the device identity.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl SyncConfig {
    /// Creates a configuration for the given server and credentials.
    #[must_use]
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Checks that the server URL and both credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotConfigured`] naming the first missing value.
    pub fn validate(&self) -> Result<(), SyncError> {
        for (name, value) in [
            ("server URL", &self.server_url),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(SyncError::NotConfigured(format!("{name} is empty")));
            }
        }
        Ok(())
    }

    /// The `WebDAV` client configuration derived from this config.
    #[must_use]
    pub fn webdav(&self) -> WebDavConfig {
        WebDavConfig {
            timeout_secs: self.timeout_secs,
            ..WebDavConfig::basic(&self.server_url, &self.username, &self.password)
        }
    }

    /// Names of the remote objects.
    #[must_use]
    pub fn remote_paths(&self) -> RemotePaths {
        RemotePaths::new(&self.app_name)
    }

    /// Normalize the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be expanded.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }
            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        }

        self.server_url = self.server_url.trim().to_string();
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            username: String::new(),
            password: String::new(),
            app_name: default_app_name(),
            timeout_secs: default_timeout(),
            device_id: None,
            state_dir: None,
        }
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("app_name", &self.app_name)
            .field("timeout_secs", &self.timeout_secs)
            .field("device_id", &self.device_id)
            .field("state_dir", &self.state_dir)
            .finish()
    }
}

fn default_app_name() -> String {
    APP_NAME.to_string()
}

const fn default_timeout() -> u64 {
    30
}

/// Object names of one sync pair on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePaths {
    /// Compressed snapshot blob.
    pub snapshot: String,
    /// Plain-text identity of the device that pushed the snapshot.
    pub device_id: String,
}

impl RemotePaths {
    /// Derives the object names from the application name.
    #[must_use]
    pub fn new(app_name: &str) -> Self {
        Self {
            snapshot: format!("{app_name}_sync.proto.gz"),
            device_id: format!("{app_name}_device_id.txt"),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
