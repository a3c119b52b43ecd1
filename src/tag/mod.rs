// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Tags and tag-related functions.

#[cfg(feature = "flac")]
mod flac;
mod mapping;
#[cfg(feature = "mp4")]
mod mp4;

pub use mapping::map_tags;
use std::fmt;
use std::path::Path;

/// A tag key describes the kind of information in a generic, format-independent way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// Track Title.
    TrackTitle,
    /// Track Artist credit (e.g. `A feat. B & C`).
    Artist,
    /// Title of the release.
    Album,
    /// Artist primarily credited on the release.
    AlbumArtist,
    /// Track number on the disc.
    TrackNumber,
    /// Total tracks on the release.
    TotalTracks,
    /// Number of the disc in this release that contains this track.
    DiscNumber,
    /// Total number of discs in this release.
    TotalDiscs,
    /// Release Year (YYYY) - the year that the release was issued.
    ReleaseYear,
}

impl TagKey {
    /// All tag keys, in the order they are written.
    pub const ALL: [TagKey; 9] = [
        TagKey::TrackTitle,
        TagKey::Artist,
        TagKey::Album,
        TagKey::AlbumArtist,
        TagKey::TrackNumber,
        TagKey::TotalTracks,
        TagKey::DiscNumber,
        TagKey::TotalDiscs,
        TagKey::ReleaseYear,
    ];
}

/// The value of a single tag field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// Free-form text.
    Text(String),
    /// A number together with a total (e.g. track 3 of 12).
    Pair(u16, u16),
}

impl TagValue {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Pair(_, _) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Pair(number, total) => write!(f, "{number}/{total}"),
        }
    }
}

/// The tag schema, i.e. the key convention used by a tag container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSchema {
    /// MP4 `ilst` atoms with fixed four-character identifiers; numbered fields are stored as
    /// (number, total) pairs.
    Atom,
    /// Free-form key/value comments (e.g. Vorbis comments in FLAC files); numbers and totals are
    /// stored in separate fields.
    Generic,
}

impl TagSchema {
    /// Determine the tag schema of the file at the given path from its file extension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownFileType`] if the file type is not supported.
    pub fn for_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .map(std::ffi::OsStr::to_ascii_lowercase)
            .ok_or(crate::Error::UnknownFileType)?;

        match extension.to_str() {
            #[cfg(feature = "mp4")]
            Some("m4a" | "m4b" | "m4p" | "mp4") => Ok(Self::Atom),
            #[cfg(feature = "flac")]
            Some("flac") => Ok(Self::Generic),
            ext => {
                log::debug!("Unknown file extension {ext:?}");
                Err(crate::Error::UnknownFileType)
            }
        }
    }

    /// Get the schema-specific key name for a tag key.
    ///
    /// Returns `None` if the schema has no separate field for the key.
    #[must_use]
    pub fn key_name(self, key: TagKey) -> Option<&'static str> {
        match self {
            Self::Atom => match key {
                TagKey::TrackTitle => "\u{a9}nam".into(),
                TagKey::Artist => "\u{a9}ART".into(),
                TagKey::Album => "\u{a9}alb".into(),
                TagKey::AlbumArtist => "aART".into(),
                TagKey::TrackNumber => "trkn".into(),
                TagKey::DiscNumber => "disk".into(),
                TagKey::ReleaseYear => "\u{a9}day".into(),
                TagKey::TotalTracks | TagKey::TotalDiscs => None,
            },
            Self::Generic => match key {
                TagKey::TrackTitle => "TITLE".into(),
                TagKey::Artist => "ARTIST".into(),
                TagKey::Album => "ALBUM".into(),
                TagKey::AlbumArtist => "ALBUMARTIST".into(),
                TagKey::TrackNumber => "TRACKNUMBER".into(),
                TagKey::TotalTracks => "TOTALTRACKS".into(),
                TagKey::DiscNumber => "DISCNUMBER".into(),
                TagKey::TotalDiscs => "TOTALDISCS".into(),
                TagKey::ReleaseYear => "YEAR".into(),
            },
        }
    }
}

/// A complete set of tag values for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    /// The schema the values are meant for.
    schema: TagSchema,
    /// Tag values, in insertion order. Each key occurs at most once.
    entries: Vec<(TagKey, TagValue)>,
}

impl TagSet {
    /// Create an empty tag set.
    #[must_use]
    pub fn new(schema: TagSchema) -> Self {
        Self {
            schema,
            entries: Vec::new(),
        }
    }

    /// The schema of this tag set.
    #[must_use]
    pub fn schema(&self) -> TagSchema {
        self.schema
    }

    /// Set the value for a key, replacing a previous value.
    pub fn insert(&mut self, key: TagKey, value: TagValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: TagKey) -> Option<&TagValue> {
        self.entries
            .iter()
            .find_map(|(k, value)| (*k == key).then_some(value))
    }

    /// Returns `true` if there is a value for the key.
    #[must_use]
    pub fn contains(&self, key: TagKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over all keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (TagKey, &TagValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of values in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A tag that can be used for reading and writing.
pub trait Tag {
    /// Get the schema used by this tag.
    fn schema(&self) -> TagSchema;
    /// Get the value for the tag key.
    fn get(&self, key: TagKey) -> Option<TagValue>;
    /// Set the value for the tag key.
    fn set(&mut self, key: TagKey, value: &TagValue);
    /// Remove all values from this tag.
    fn clear(&mut self);
    /// Write the tag to the file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&mut self, path: &Path) -> crate::Result<()>;

    /// Read all values present in this tag.
    fn tag_set(&self) -> TagSet {
        let mut tag_set = TagSet::new(self.schema());
        for key in TagKey::ALL {
            if let Some(value) = self.get(key) {
                tag_set.insert(key, value);
            }
        }
        tag_set
    }
}

/// Read the tag from the file at the given path.
///
/// # Errors
///
/// Returns an error if the file type is unsupported or the file cannot be read.
pub fn read_tag_from_path(path: impl AsRef<Path>) -> crate::Result<Box<dyn Tag>> {
    let path = path.as_ref();
    match TagSchema::for_path(path)? {
        #[cfg(feature = "mp4")]
        TagSchema::Atom => {
            mp4::Mp4Tag::read_from_path(path).map(|tag| -> Box<dyn Tag> { Box::new(tag) })
        }
        #[cfg(feature = "flac")]
        TagSchema::Generic => {
            flac::FlacTag::read_from_path(path).map(|tag| -> Box<dyn Tag> { Box::new(tag) })
        }
        #[allow(unreachable_patterns)]
        _ => Err(crate::Error::UnknownFileType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(all(feature = "flac", feature = "mp4"))]
    fn test_schema_for_path() {
        assert_eq!(TagSchema::for_path("a/b.flac").unwrap(), TagSchema::Generic);
        assert_eq!(TagSchema::for_path("a/b.FLAC").unwrap(), TagSchema::Generic);
        assert_eq!(TagSchema::for_path("b.m4a").unwrap(), TagSchema::Atom);
        assert_eq!(TagSchema::for_path("b.mp4").unwrap(), TagSchema::Atom);
    }

    #[test]
    fn test_schema_for_unsupported_path() {
        assert!(matches!(
            TagSchema::for_path("song.wav"),
            Err(crate::Error::UnknownFileType)
        ));
        assert!(matches!(
            TagSchema::for_path("song"),
            Err(crate::Error::UnknownFileType)
        ));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(TagSchema::Atom.key_name(TagKey::ReleaseYear), Some("\u{a9}day"));
        assert_eq!(TagSchema::Generic.key_name(TagKey::ReleaseYear), Some("YEAR"));
        assert!(TagSchema::Atom.key_name(TagKey::TotalTracks).is_none());
        assert!(TagKey::ALL
            .into_iter()
            .all(|key| TagSchema::Generic.key_name(key).is_some()));
    }

    #[test]
    fn test_tag_set_insert_replaces() {
        let mut tag_set = TagSet::new(TagSchema::Generic);
        tag_set.insert(TagKey::Album, TagValue::Text("First".to_string()));
        tag_set.insert(TagKey::Album, TagValue::Text("Second".to_string()));
        assert_eq!(tag_set.len(), 1);
        assert_eq!(
            tag_set.get(TagKey::Album).and_then(TagValue::as_text),
            Some("Second")
        );
    }

    #[test]
    fn test_tag_value_display() {
        assert_eq!(TagValue::Text("x".to_string()).to_string(), "x");
        assert_eq!(TagValue::Pair(3, 12).to_string(), "3/12");
    }
}
