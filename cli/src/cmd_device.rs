// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use shelfsync_core::DeviceId;

use crate::config::Config;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDeviceId;

impl CmdDeviceId {
    pub const NAME: &str = "device-id";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Print the identity of this device, creating it if needed")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resolving device id...");
        let id = DeviceId::resolve(&config.sync).await?;
        println!("{id}");
        Ok(())
    }
}
