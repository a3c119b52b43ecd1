// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `track` CLI subcommand.

use crate::tag::map_tags;
use crate::tidal::Session;
use crate::TaggedFile;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for the `track` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// TIDAL track ID.
    pub track_id: u64,
    /// Audio file to tag.
    pub file: PathBuf,
}

/// Run the `track` command.
///
/// All existing tags in the file are replaced by the catalog metadata.
pub async fn run(session: &Session<'_>, args: Args) -> crate::Result<()> {
    let track = session.track(args.track_id).await?;
    let album = session.album(track.album_id).await?;
    log::info!(
        "Tagging {} as \"{}\" by {}",
        args.file.display(),
        track.name,
        track.artist_credit()
    );

    let mut file = TaggedFile::read_from_path(&args.file)?;
    let tag_set = map_tags(&track, &album, file.schema());
    file.replace_tags(&tag_set);
    file.write_tags()
}
