// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The [`TaggedFile`] struct represents an audio file and its tag.

use crate::tag::{read_tag_from_path, Tag, TagSchema, TagSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// An audio file with a tag of a supported schema.
pub struct TaggedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// The tag read from the file.
    tag: Box<dyn Tag>,
}

impl fmt::Debug for TaggedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("TaggedFile")
            .field("path", &self.path)
            .field("schema", &self.tag.schema())
            .finish()
    }
}

impl TaggedFile {
    /// Read the file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownFileType`] if the file type is not supported, or an error if
    /// the tag cannot be read.
    pub fn read_from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let tag = read_tag_from_path(path)?;
        Ok(TaggedFile {
            path: path.to_path_buf(),
            tag,
        })
    }

    /// The schema of this file's tag.
    #[must_use]
    pub fn schema(&self) -> TagSchema {
        self.tag.schema()
    }

    /// The values currently present in the tag.
    #[must_use]
    pub fn tag_set(&self) -> TagSet {
        self.tag.tag_set()
    }

    /// Remove all existing values from the tag and replace them with the given set.
    ///
    /// The changes are not written to disk until [`TaggedFile::write_tags`] is called.
    pub fn replace_tags(&mut self, tag_set: &TagSet) {
        debug_assert_eq!(tag_set.schema(), self.schema());
        self.tag.clear();
        for (key, value) in tag_set.iter() {
            log::debug!("Setting {key:?} to {value}");
            self.tag.set(key, value);
        }
    }

    /// Write the tag back to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_tags(&mut self) -> crate::Result<()> {
        log::info!("Writing tags to {}", self.path.display());
        self.tag.write(&self.path)
    }
}
