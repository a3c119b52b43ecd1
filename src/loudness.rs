// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Loudness normalization using an external ReplayGain tool (`loudgain`).

use crate::config::LoudnessConfig;
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;

/// Fixed options: -5 dB pre-gain, prevent clipping, write lowercase ReplayGain tags.
const OPTIONS: [&str; 3] = ["--pregain=-5", "--noclip", "--tagmode=l"];

/// Build the argument list passed to the loudness tool.
fn arguments(files: &[PathBuf]) -> Vec<OsString> {
    OPTIONS
        .iter()
        .map(OsString::from)
        .chain(files.iter().map(|path| path.clone().into_os_string()))
        .collect()
}

/// Run the loudness tool over the given files and wait for it to finish.
///
/// The exit status of the tool is logged but not interpreted.
///
/// # Errors
///
/// Returns an I/O error if the tool cannot be started.
pub async fn normalize(config: &LoudnessConfig, files: &[PathBuf]) -> crate::Result<()> {
    log::info!("Normalizing loudness of {} file(s)", files.len());
    let status = Command::new(&config.program)
        .args(arguments(files))
        .status()
        .await?;
    if status.success() {
        log::debug!("{} finished with {status}", config.program);
    } else {
        log::warn!("{} finished with {status}", config.program);
    }
    Ok(())
}
