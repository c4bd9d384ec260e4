// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::LocationSource;
use chrono::Utc;
use common::sample::LocationSample;
use serde::Deserialize;
use std::io::{Error, ErrorKind};
use tokio::process::Command;
use tracing::{debug, warn};

/// The fields the external command must report on stdout.
///
/// `altitude` is optional, commands like termux-location omit it when the
/// receiver has no 3d fix.
#[derive(Debug, Deserialize)]
struct ReportedFix {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: f64,
}

/// A location source that is backed by an external command
///
/// Every acquisition runs the configured command to completion and expects a
/// single JSON object with at least numeric `latitude` and `longitude` fields
/// on stdout, e.g. the output of `termux-location`. A failing spawn, a
/// non-zero exit status or unparsable output never leaves the source, the
/// acquisition then reports the invalid fallback sample.
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Creates a new CommandSource
    ///
    /// # Arguments
    ///
    /// * `program` - The program that is run for every acquisition
    /// * `args` - The arguments the program is run with
    ///
    /// # Returns
    ///
    /// * `CommandSource` - The created CommandSource
    pub fn new(program: &str, args: &[String]) -> CommandSource {
        CommandSource {
            program: program.to_owned(),
            args: args.to_vec(),
        }
    }

    /// Creates a new CommandSource from a whole command line
    ///
    /// The command line is split on whitespace into the program and its
    /// arguments.
    ///
    /// # Arguments
    ///
    /// * `command_line` - The command line, e.g. "termux-location -p gps"
    ///
    /// # Returns
    ///
    /// * `Ok(CommandSource)` - The created CommandSource
    /// * `Err(io::Error)` - If the command line contains no program
    pub fn from_command_line(command_line: &str) -> Result<CommandSource, Error> {
        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Command line contains no program",
            ));
        };
        let args = parts.map(str::to_owned).collect::<Vec<String>>();
        Ok(CommandSource::new(program, &args))
    }

    async fn query(&self) -> Result<ReportedFix, Error> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await?;
        if !output.status.success() {
            return Err(Error::other(format!(
                "Command exited with status {}",
                output.status
            )));
        }
        serde_json::from_slice::<ReportedFix>(&output.stdout)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }
}

#[async_trait::async_trait]
impl LocationSource for CommandSource {
    /// Acquires one fix by running the configured command.
    ///
    /// Every failure is absorbed into the invalid fallback sample, this is
    /// the terminal error path of the source.
    async fn acquire(&self) -> LocationSample {
        let result = self.query().await;
        let timestamp = Utc::now().timestamp_millis();
        match result {
            Ok(fix) => {
                debug!(
                    "Acquired fix from {}: lat {} long {}",
                    self.program, fix.latitude, fix.longitude
                );
                LocationSample::new(fix.latitude, fix.longitude, fix.altitude, timestamp, true)
            }
            Err(e) => {
                warn!(
                    "Failed to acquire location from {}. Error: {}",
                    self.program, e
                );
                LocationSample::invalid(timestamp)
            }
        }
    }
}
