// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Response types of the TIDAL REST API and their conversion into records.

use crate::config::CatalogConfig;
use crate::release::{Album, ArtistProfile};
use crate::track::{Artist, Track};
use crate::util::parse_partial_date_from_str;
use serde::Deserialize;

/// Response to a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session ID that has to be passed with each request.
    pub session_id: String,
    /// Country code of the account, used to select the regional catalog.
    pub country_code: String,
}

/// Artist object (also used for artist references inside tracks and albums).
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    /// Artist ID.
    pub id: u64,
    /// Artist name.
    pub name: String,
    /// Picture UUID.
    #[serde(default)]
    pub picture: Option<String>,
}

/// Album reference inside a track.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumReference {
    /// Album ID.
    pub id: u64,
}

/// Track object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    /// Track ID.
    pub id: u64,
    /// Track title.
    pub title: String,
    /// Track number on the volume.
    #[serde(default)]
    pub track_number: Option<u16>,
    /// Volume (disc) number.
    #[serde(default)]
    pub volume_number: Option<u16>,
    /// Main artist.
    #[serde(default)]
    pub artist: Option<ArtistResponse>,
    /// All credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistResponse>,
    /// The album containing this track.
    pub album: AlbumReference,
}

/// Album object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    /// Album ID.
    pub id: u64,
    /// Album title.
    pub title: String,
    /// Main artist.
    #[serde(default)]
    pub artist: Option<ArtistResponse>,
    /// All credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistResponse>,
    /// Number of tracks.
    #[serde(default)]
    pub number_of_tracks: Option<u16>,
    /// Number of volumes (discs).
    #[serde(default)]
    pub number_of_volumes: Option<u16>,
    /// Release date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Cover UUID.
    #[serde(default)]
    pub cover: Option<String>,
}

/// Artist biography.
#[derive(Debug, Clone, Deserialize)]
pub struct BiographyResponse {
    /// Biography text.
    #[serde(default)]
    pub text: Option<String>,
}

/// The catalog uses both `null` and `0` for unknown numbers.
fn positive(value: Option<u16>) -> Option<u16> {
    value.filter(|&n| n > 0)
}

/// Build the URL of a square image from its UUID.
pub fn image_url(config: &CatalogConfig, uuid: &str, size: u16) -> String {
    format!(
        "{location}{path}/{size}x{size}.jpg",
        location = config.image_location,
        path = uuid.replace('-', "/"),
    )
}

impl From<ArtistResponse> for Artist {
    fn from(artist: ArtistResponse) -> Self {
        Artist {
            id: artist.id,
            name: artist.name,
        }
    }
}

impl TryFrom<TrackResponse> for Track {
    type Error = crate::Error;

    fn try_from(track: TrackResponse) -> crate::Result<Self> {
        let artists: Vec<Artist> = if track.artists.is_empty() {
            track.artist.into_iter().map(Artist::from).collect()
        } else {
            track.artists.into_iter().map(Artist::from).collect()
        };
        if artists.is_empty() {
            return Err(crate::Error::MalformedResponse("track without artists"));
        }

        Ok(Track {
            id: track.id,
            name: track.title,
            artists,
            track_number: positive(track.track_number),
            disc_number: positive(track.volume_number),
            album_id: track.album.id,
        })
    }
}

impl AlbumResponse {
    /// Convert the response into an [`Album`].
    ///
    /// # Errors
    ///
    /// Fails if the response neither contains a main artist nor a list of artists.
    pub fn into_album(self, config: &CatalogConfig) -> crate::Result<Album> {
        let artist = self
            .artist
            .or_else(|| self.artists.into_iter().next())
            .map(Artist::from)
            .ok_or(crate::Error::MalformedResponse("album without artist"))?;

        Ok(Album {
            id: self.id,
            name: self.title,
            artist,
            release_date: self
                .release_date
                .as_deref()
                .and_then(parse_partial_date_from_str),
            total_tracks: positive(self.number_of_tracks),
            total_discs: positive(self.number_of_volumes),
            cover_url: self
                .cover
                .as_deref()
                .map(|uuid| image_url(config, uuid, config.album_cover_size)),
        })
    }
}

impl ArtistResponse {
    /// Convert the response into an [`ArtistProfile`] with the given biography.
    #[must_use]
    pub fn into_profile(
        self,
        config: &CatalogConfig,
        biography: Option<BiographyResponse>,
    ) -> ArtistProfile {
        ArtistProfile {
            id: self.id,
            name: self.name,
            image_url: self
                .picture
                .as_deref()
                .map(|uuid| image_url(config, uuid, config.artist_image_size)),
            biography: biography
                .and_then(|bio| bio.text)
                .filter(|text| !text.is_empty()),
        }
    }
}
