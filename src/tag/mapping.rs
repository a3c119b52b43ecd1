// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Mapping of catalog records to tag values.

use super::{TagKey, TagSchema, TagSet, TagValue};
use crate::release::Album;
use crate::track::Track;

/// Total used in `trkn` atoms when the number of tracks is unknown.
const UNKNOWN_TOTAL_TRACKS: u16 = 0;
/// Total used in `disk` atoms when the number of discs is unknown.
const UNKNOWN_TOTAL_DISCS: u16 = 1;

/// Add a number and its total to the tag set, following the schema's conventions.
fn insert_numbered(
    tag_set: &mut TagSet,
    (number_key, number): (TagKey, Option<u16>),
    (total_key, total): (TagKey, Option<u16>),
    unknown_total: u16,
) {
    match tag_set.schema() {
        TagSchema::Atom => {
            if let Some(number) = number {
                tag_set.insert(
                    number_key,
                    TagValue::Pair(number, total.unwrap_or(unknown_total)),
                );
            }
        }
        TagSchema::Generic => {
            if let Some(number) = number {
                tag_set.insert(number_key, TagValue::Text(number.to_string()));
            }
            if let Some(total) = total {
                tag_set.insert(total_key, TagValue::Text(total.to_string()));
            }
        }
    }
}

/// Map a track and its album to the tag values for the given schema.
///
/// Absent numbers are omitted. In the [`TagSchema::Atom`] schema, an unknown track total is
/// written as `0` and an unknown disc total as `1`.
#[must_use]
pub fn map_tags(track: &Track, album: &Album, schema: TagSchema) -> TagSet {
    let mut tag_set = TagSet::new(schema);
    tag_set.insert(TagKey::TrackTitle, TagValue::Text(track.name.clone()));
    tag_set.insert(TagKey::Artist, TagValue::Text(track.artist_credit()));
    tag_set.insert(TagKey::Album, TagValue::Text(album.name.clone()));
    tag_set.insert(TagKey::AlbumArtist, TagValue::Text(album.artist.name.clone()));
    insert_numbered(
        &mut tag_set,
        (TagKey::TrackNumber, track.track_number),
        (TagKey::TotalTracks, album.total_tracks),
        UNKNOWN_TOTAL_TRACKS,
    );
    insert_numbered(
        &mut tag_set,
        (TagKey::DiscNumber, track.disc_number),
        (TagKey::TotalDiscs, album.total_discs),
        UNKNOWN_TOTAL_DISCS,
    );
    if let Some(year) = album.year() {
        tag_set.insert(TagKey::ReleaseYear, TagValue::Text(year));
    }
    tag_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Artist;
    use chrono::NaiveDate;

    fn artist(name: &str) -> Artist {
        Artist {
            id: 0,
            name: name.to_string(),
        }
    }

    fn track(track_number: Option<u16>, disc_number: Option<u16>) -> Track {
        Track {
            id: 1,
            name: "Get Lucky".to_string(),
            artists: vec![
                artist("Daft Punk"),
                artist("Pharrell Williams"),
                artist("Nile Rodgers"),
            ],
            track_number,
            disc_number,
            album_id: 2,
        }
    }

    fn album(total_tracks: Option<u16>, total_discs: Option<u16>) -> Album {
        Album {
            id: 2,
            name: "Random Access Memories".to_string(),
            artist: artist("Daft Punk"),
            release_date: NaiveDate::from_ymd_opt(2013, 5, 17),
            total_tracks,
            total_discs,
            cover_url: None,
        }
    }

    fn text(value: &str) -> Option<TagValue> {
        Some(TagValue::Text(value.to_string()))
    }

    #[test]
    fn test_common_fields() {
        for schema in [TagSchema::Atom, TagSchema::Generic] {
            let tag_set = map_tags(&track(None, None), &album(None, None), schema);
            assert_eq!(tag_set.schema(), schema);
            assert_eq!(tag_set.get(TagKey::TrackTitle).cloned(), text("Get Lucky"));
            assert_eq!(
                tag_set.get(TagKey::Artist).cloned(),
                text("Daft Punk feat. Pharrell Williams & Nile Rodgers")
            );
            assert_eq!(
                tag_set.get(TagKey::Album).cloned(),
                text("Random Access Memories")
            );
            assert_eq!(tag_set.get(TagKey::AlbumArtist).cloned(), text("Daft Punk"));
            assert_eq!(tag_set.get(TagKey::ReleaseYear).cloned(), text("2013"));
        }
    }

    fn pair(number: u16, total: u16) -> TagValue {
        TagValue::Pair(number, total)
    }

    #[test]
    fn test_atom_numbers_with_totals() {
        let track = track(Some(8), Some(1));
        let tag_set = map_tags(&track, &album(Some(13), Some(2)), TagSchema::Atom);
        assert_eq!(tag_set.get(TagKey::TrackNumber), Some(&pair(8, 13)));
        assert_eq!(tag_set.get(TagKey::DiscNumber), Some(&pair(1, 2)));
        assert!(!tag_set.contains(TagKey::TotalTracks));
        assert!(!tag_set.contains(TagKey::TotalDiscs));
    }

    #[test]
    fn test_atom_unknown_track_total() {
        let track = track(Some(5), None);
        let tag_set = map_tags(&track, &album(None, None), TagSchema::Atom);
        assert_eq!(tag_set.get(TagKey::TrackNumber), Some(&pair(5, 0)));
    }

    #[test]
    fn test_atom_unknown_disc_total() {
        let track = track(None, Some(2));
        let tag_set = map_tags(&track, &album(None, None), TagSchema::Atom);
        assert_eq!(tag_set.get(TagKey::DiscNumber), Some(&pair(2, 1)));
    }

    #[test]
    fn test_atom_absent_numbers() {
        let track = track(None, None);
        let tag_set = map_tags(&track, &album(Some(13), Some(2)), TagSchema::Atom);
        assert!(!tag_set.contains(TagKey::TrackNumber));
        assert!(!tag_set.contains(TagKey::DiscNumber));
        assert_eq!(tag_set.len(), 5);
    }

    #[test]
    fn test_generic_numbers_with_totals() {
        let track = track(Some(8), Some(1));
        let tag_set = map_tags(&track, &album(Some(13), Some(2)), TagSchema::Generic);
        assert_eq!(tag_set.get(TagKey::TrackNumber).cloned(), text("8"));
        assert_eq!(tag_set.get(TagKey::TotalTracks).cloned(), text("13"));
        assert_eq!(tag_set.get(TagKey::DiscNumber).cloned(), text("1"));
        assert_eq!(tag_set.get(TagKey::TotalDiscs).cloned(), text("2"));
    }

    #[test]
    fn test_generic_totals_are_independent_of_numbers() {
        let unnumbered = track(None, None);
        let totals = album(Some(13), Some(2));
        let tag_set = map_tags(&unnumbered, &totals, TagSchema::Generic);
        assert!(!tag_set.contains(TagKey::TrackNumber));
        assert!(!tag_set.contains(TagKey::DiscNumber));
        assert_eq!(tag_set.get(TagKey::TotalTracks).cloned(), text("13"));
        assert_eq!(tag_set.get(TagKey::TotalDiscs).cloned(), text("2"));

        let numbered = track(Some(5), Some(1));
        let no_totals = album(None, None);
        let tag_set = map_tags(&numbered, &no_totals, TagSchema::Generic);
        assert_eq!(tag_set.get(TagKey::TrackNumber).cloned(), text("5"));
        assert_eq!(tag_set.get(TagKey::DiscNumber).cloned(), text("1"));
        assert!(!tag_set.contains(TagKey::TotalTracks));
        assert!(!tag_set.contains(TagKey::TotalDiscs));
    }

    #[test]
    fn test_missing_release_date() {
        let mut album = album(None, None);
        album.release_date = None;
        for schema in [TagSchema::Atom, TagSchema::Generic] {
            let tag_set = map_tags(&track(Some(1), Some(1)), &album, schema);
            assert!(!tag_set.contains(TagKey::ReleaseYear));
        }
    }
}
