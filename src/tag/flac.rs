// Copyright (c) 2022 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for FLAC tags.

#![cfg(feature = "flac")]

use crate::tag::{Tag, TagKey, TagSchema, TagValue};
use std::path::Path;

/// FLAC tag.
pub struct FlacTag {
    /// The underlying tag data.
    data: metaflac::Tag,
}

impl FlacTag {
    /// Create an empty tag.
    #[cfg(test)]
    pub fn new() -> Self {
        FlacTag {
            data: metaflac::Tag::new(),
        }
    }

    /// Read the FLAC tag from the path
    pub fn read_from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let data = metaflac::Tag::read_from_path(path)?;
        Ok(FlacTag { data })
    }
}

impl Tag for FlacTag {
    fn schema(&self) -> TagSchema {
        TagSchema::Generic
    }

    fn get(&self, key: TagKey) -> Option<TagValue> {
        TagSchema::Generic
            .key_name(key)
            .and_then(|key| self.data.get_vorbis(key))
            .and_then(|mut iterator| iterator.next())
            .map(|value| TagValue::Text(value.to_string()))
    }

    fn set(&mut self, key: TagKey, value: &TagValue) {
        if let Some(key) = TagSchema::Generic.key_name(key) {
            self.data.set_vorbis(key, vec![value.to_string()]);
        }
    }

    fn clear(&mut self) {
        self.data.remove_blocks(metaflac::BlockType::VorbisComment);
    }

    fn write(&mut self, path: &Path) -> crate::Result<()> {
        self.data.write_to_path(path)?;
        Ok(())
    }
}
