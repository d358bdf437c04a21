// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use shelfsync_core::{ArchiveClient, DeleteArchiveRequest};

#[derive(Debug, Clone)]
pub struct CmdDeleteArchive {
    pub url: String,
    pub token: Option<String>,
}

impl CmdDeleteArchive {
    pub const NAME: &str = "delete-archive";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Delete an archive on the archive server")
            .arg(arg!(url: <URL> "A files, thumbnail or reader URL of the archive"))
            .arg(arg!(-t --token [TOKEN] "Bearer token for the archive API"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            url: matches.get_one::<String>("url").cloned().unwrap_or_default(),
            token: matches.get_one::<String>("token").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(url = %self.url, "deleting archive...");
        let mut request = DeleteArchiveRequest::new(self.url);
        if let Some(token) = self.token {
            request = request.with_token(token);
        }

        let client = ArchiveClient::new()?;
        let body = client.delete_archive(&request).await?;
        println!("{body}");
        Ok(())
    }
}
