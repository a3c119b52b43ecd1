// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for MP4 tags.

#![cfg(feature = "mp4")]

use crate::tag::{Tag, TagKey, TagSchema, TagValue};
use mp4ameta::DataIdent;
use std::path::Path;

/// Track total reported when a `trkn` atom carries no total.
const MISSING_TOTAL_TRACKS: u16 = 0;
/// Disc total reported when a `disk` atom carries no total.
const MISSING_TOTAL_DISCS: u16 = 1;

/// MP4 tag.
pub struct Mp4Tag {
    /// The underlying tag data.
    data: mp4ameta::Tag,
}

impl Mp4Tag {
    /// Create an empty tag.
    #[cfg(test)]
    pub fn new() -> Self {
        Mp4Tag {
            data: mp4ameta::Tag::default(),
        }
    }

    /// Read the MP4 tag from the path
    pub fn read_from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let data = mp4ameta::Tag::read_from_path(path)?;
        Ok(Mp4Tag { data })
    }
}

impl Tag for Mp4Tag {
    fn schema(&self) -> TagSchema {
        TagSchema::Atom
    }

    fn get(&self, key: TagKey) -> Option<TagValue> {
        let text = |value: Option<&str>| value.map(|text| TagValue::Text(text.to_string()));
        match key {
            TagKey::TrackTitle => text(self.data.title()),
            TagKey::Artist => text(self.data.artist()),
            TagKey::Album => text(self.data.album()),
            TagKey::AlbumArtist => text(self.data.album_artist()),
            TagKey::ReleaseYear => text(self.data.year()),
            TagKey::TrackNumber => self.data.track_number().map(|number| {
                TagValue::Pair(
                    number,
                    self.data.total_tracks().unwrap_or(MISSING_TOTAL_TRACKS),
                )
            }),
            TagKey::DiscNumber => self.data.disc_number().map(|number| {
                TagValue::Pair(number, self.data.total_discs().unwrap_or(MISSING_TOTAL_DISCS))
            }),
            TagKey::TotalTracks | TagKey::TotalDiscs => None,
        }
    }

    fn set(&mut self, key: TagKey, value: &TagValue) {
        match (key, value) {
            (TagKey::TrackTitle, TagValue::Text(text)) => self.data.set_title(text.as_str()),
            (TagKey::Artist, TagValue::Text(text)) => self.data.set_artist(text.as_str()),
            (TagKey::Album, TagValue::Text(text)) => self.data.set_album(text.as_str()),
            (TagKey::AlbumArtist, TagValue::Text(text)) => {
                self.data.set_album_artist(text.as_str());
            }
            (TagKey::ReleaseYear, TagValue::Text(text)) => self.data.set_year(text.as_str()),
            (TagKey::TrackNumber, &TagValue::Pair(number, total)) => {
                self.data.set_track(number, total);
            }
            (TagKey::DiscNumber, &TagValue::Pair(number, total)) => {
                self.data.set_disc(number, total);
            }
            (key, value) => {
                log::warn!("Ignoring value {value:?} for key {key:?} in MP4 tag");
            }
        }
    }

    fn clear(&mut self) {
        let idents: Vec<DataIdent> = self.data.data().map(|(ident, _)| ident.clone()).collect();
        for ident in &idents {
            self.data.remove_data_of(ident);
        }
    }

    fn write(&mut self, path: &Path) -> crate::Result<()> {
        self.data.write_to_path(path)?;
        Ok(())
    }
}
