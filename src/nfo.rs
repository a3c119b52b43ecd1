// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! NFO sidecar files, i.e. small XML documents read by media library software.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use regex::Regex;
use std::io;
use std::path::Path;

/// Matches bracketed annotations (e.g. `[wimpLink artistId="1"]`) in biographies.
const ANNOTATION_PATTERN: &str = r"\[.*?\]";

/// An NFO document consisting of a root element with text-only child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfoDocument {
    /// Name of the root element.
    pub root: &'static str,
    /// Child elements and their text, in document order.
    pub children: Vec<(&'static str, String)>,
}

impl NfoDocument {
    /// Create a document without children.
    #[must_use]
    pub fn new(root: &'static str) -> Self {
        Self {
            root,
            children: Vec::new(),
        }
    }

    /// Append a child element if a non-empty value is present.
    fn push_optional(
        &mut self,
        name: &'static str,
        value: Option<&str>,
        transform: impl FnOnce(&str) -> String,
    ) {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.children.push((name, transform(value)));
        }
    }

    /// Serialize the document as XML without declaration and indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml(&self) -> crate::Result<String> {
        let mut writer = Writer::new(Vec::new());
        if self.children.is_empty() {
            // Self-closing root without a space before the slash, e.g. `<album/>`.
            writer.write_event(Event::Empty(BytesStart::new(self.root)))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new(self.root)))?;
            for (name, text) in &self.children {
                writer.write_event(Event::Start(BytesStart::new(*name)))?;
                writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                    text.as_str(),
                ))))?;
                writer.write_event(Event::End(BytesEnd::new(*name)))?;
            }
            writer.write_event(Event::End(BytesEnd::new(self.root)))?;
        }
        let xml = String::from_utf8(writer.into_inner())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(xml)
    }

    /// Write the document to the given path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write_to_path(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        log::info!("Writing {} NFO to {}", self.root, path.display());
        tokio::fs::write(path, self.to_xml()?).await?;
        Ok(())
    }
}

/// Build the NFO document for an album.
///
/// Absent or empty values produce no element.
#[must_use]
pub fn build_album_nfo(name: Option<&str>, year: Option<&str>) -> NfoDocument {
    let mut document = NfoDocument::new("album");
    document.push_optional("title", name, str::to_string);
    document.push_optional("year", year, str::to_string);
    document
}

/// Build the NFO document for an artist.
///
/// Absent or empty values produce no element. Bracketed annotations are stripped from the
/// biography; the whitespace around them is kept.
#[must_use]
pub fn build_artist_nfo(name: Option<&str>, biography: Option<&str>) -> NfoDocument {
    let mut document = NfoDocument::new("artist");
    document.push_optional("name", name, str::to_string);
    document.push_optional("biography", biography, strip_annotations);
    document
}

/// Remove all bracketed annotations from the text.
fn strip_annotations(text: &str) -> String {
    Regex::new(ANNOTATION_PATTERN).map_or_else(
        |_| text.to_string(),
        |re| re.replace_all(text, "").into_owned(),
    )
}
