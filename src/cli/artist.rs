// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `artist` CLI subcommand.

use super::download_image;
use crate::nfo::build_artist_nfo;
use crate::tidal::Session;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for the `artist` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// TIDAL artist ID.
    pub artist_id: u64,
    /// Path of the NFO file to write.
    pub file: PathBuf,
    /// Path of the artist image to write.
    pub image: PathBuf,
}

/// Run the `artist` command.
pub async fn run(session: &Session<'_>, args: Args) -> crate::Result<()> {
    let artist = session.artist(args.artist_id).await?;
    log::info!("Found artist {}", artist.name);

    download_image(session, artist.image_url.as_deref(), &args.image, "artist image").await?;

    build_artist_nfo(Some(&artist.name), artist.biography.as_deref())
        .write_to_path(&args.file)
        .await
}
