// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use shelfsync_core::{Decision, DeviceId, Syncer};
use tokio::fs;

use crate::backup::{JsonBackup, merge_json};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdSync {
    pub snapshot: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

impl CmdSync {
    pub const NAME: &str = "sync";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Synchronize a local library backup with the WebDAV server")
            .arg(
                arg!(snapshot: <SNAPSHOT> "Path to the local JSON backup")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output [OUTPUT] "Where to write the synced backup, defaults to SNAPSHOT")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--"dry-run" "Sync but leave the local backup untouched"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            snapshot: matches
                .get_one::<PathBuf>("snapshot")
                .cloned()
                .unwrap_or_default(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            dry_run: matches.get_flag("dry-run"),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "syncing backup...");
        let content = fs::read_to_string(&self.snapshot).await.map_err(|e| {
            format!("Failed to read backup at {}: {e}", self.snapshot.display())
        })?;
        let local = JsonBackup(serde_json::from_str(&content)?);

        let device_id = DeviceId::resolve(&config.sync).await?;
        let syncer = Syncer::webdav(config.sync, device_id, merge_json)?;
        let outcome = syncer.sync(syncer.snapshot(local)).await?;

        let message = match outcome.decision {
            Decision::AdoptLocal => "no remote backup, uploaded local backup",
            Decision::OverwriteRemote => "last sync came from this device, replaced remote backup",
            Decision::Merge => "merged remote backup from another device",
        };
        println!("{} {}", "Synced:".green(), message);

        if !self.dry_run {
            let output = self.output.as_ref().unwrap_or(&self.snapshot);
            let json = serde_json::to_string_pretty(&outcome.backup.0)?;
            fs::write(output, json)
                .await
                .map_err(|e| format!("Failed to write backup at {}: {e}", output.display()))?;
            tracing::debug!(path = %output.display(), "wrote synced backup");
        }
        Ok(())
    }
}
