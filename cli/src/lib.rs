// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of shelfsync.

mod backup;
mod cli;
mod cmd_archive;
mod cmd_device;
mod cmd_generate_completion;
mod cmd_sync;
mod config;

pub use crate::backup::{JsonBackup, merge_json};
pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
