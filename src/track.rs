// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Track and artist records.

use crate::credits::format_credits;

/// An artist as referenced by a track or album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Catalog ID.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// A single track, as fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Catalog ID.
    pub id: u64,
    /// Track title.
    pub name: String,
    /// Credited artists, in order. Never empty; the first one is the primary artist.
    pub artists: Vec<Artist>,
    /// Position of the track on its disc.
    pub track_number: Option<u16>,
    /// Number of the disc containing this track.
    pub disc_number: Option<u16>,
    /// Catalog ID of the album this track belongs to.
    pub album_id: u64,
}

impl Track {
    /// Returns the primary artist.
    #[must_use]
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    /// Returns the human-readable credit string for all artists of this track (e.g. `A feat. B
    /// & C`).
    #[must_use]
    pub fn artist_credit(&self) -> String {
        let names: Vec<&str> = self
            .artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect();
        format_credits(&names)
    }
}
