// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Album and artist profile records.

use crate::track::Artist;
use crate::util::format_year;
use chrono::NaiveDate;

/// An album, as fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Catalog ID.
    pub id: u64,
    /// Album title.
    pub name: String,
    /// Primary album artist.
    pub artist: Artist,
    /// Release date. Only the year ends up in tags and NFO files.
    pub release_date: Option<NaiveDate>,
    /// Total number of tracks.
    pub total_tracks: Option<u16>,
    /// Total number of discs.
    pub total_discs: Option<u16>,
    /// URL of the cover image.
    pub cover_url: Option<String>,
}

impl Album {
    /// Returns the release year as four-digit string.
    #[must_use]
    pub fn year(&self) -> Option<String> {
        self.release_date.as_ref().map(format_year)
    }
}

/// An artist including the information needed for an artist NFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    /// Catalog ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL of the artist picture.
    pub image_url: Option<String>,
    /// Biography text, possibly containing bracketed annotations.
    pub biography: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year() {
        let mut album = Album {
            id: 1,
            name: "Album".to_string(),
            artist: Artist {
                id: 2,
                name: "Artist".to_string(),
            },
            release_date: NaiveDate::from_ymd_opt(2013, 5, 17),
            total_tracks: None,
            total_discs: None,
            cover_url: None,
        };
        assert_eq!(album.year().as_deref(), Some("2013"));

        album.release_date = None;
        assert!(album.year().is_none());
    }
}
