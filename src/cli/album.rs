// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `album` CLI subcommand.

use super::download_image;
use crate::loudness;
use crate::nfo::build_album_nfo;
use crate::tidal::Session;
use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for the `album` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// TIDAL album ID.
    pub album_id: u64,
    /// Path of the NFO file to write.
    pub nfo: PathBuf,
    /// Path of the cover image to write.
    pub cover: PathBuf,
    /// Audio files of the album to normalize.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Run the `album` command.
pub async fn run(config: &Config, session: &Session<'_>, args: Args) -> crate::Result<()> {
    let album = session.album(args.album_id).await?;
    log::info!("Found album \"{}\" by {}", album.name, album.artist.name);

    download_image(session, album.cover_url.as_deref(), &args.cover, "album cover").await?;

    let year = album.year();
    build_album_nfo(Some(&album.name), year.as_deref())
        .write_to_path(&args.nfo)
        .await?;

    loudness::normalize(&config.loudness, &args.files).await
}
