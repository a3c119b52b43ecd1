// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! TIDAL catalog client.

mod dto;

use crate::config::CatalogConfig;
use crate::release::{Album, ArtistProfile};
use crate::track::Track;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;

/// User agent sent with each request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An authenticated TIDAL session.
///
/// The session is created once per invocation using [`Session::login`] and used read-only
/// afterwards.
#[derive(Debug)]
pub struct Session<'a> {
    /// Catalog configuration.
    config: &'a CatalogConfig,
    /// HTTP client.
    client: Client,
    /// Session ID returned by the login request.
    session_id: String,
    /// Country code of the logged-in account.
    country_code: String,
}

impl<'a> Session<'a> {
    /// Log in with the given username and password.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AuthenticationFailed`] if the credentials are rejected, or a
    /// request error if the catalog cannot be reached.
    pub async fn login(
        config: &'a CatalogConfig,
        username: &str,
        password: &str,
    ) -> crate::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let client_unique_key = format!("{:x}", rand::random::<u64>());
        let url = format!("{}login/username", config.api_location);
        log::debug!("Logging in as {username}");

        let response = client
            .post(&url)
            .form(&[
                ("username", username),
                ("password", password),
                ("token", config.api_token.as_str()),
                ("clientUniqueKey", client_unique_key.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(crate::Error::AuthenticationFailed(status));
        }

        let login: dto::LoginResponse = response.json().await?;
        log::info!("Logged in (country code: {})", login.country_code);
        Ok(Self {
            config,
            client,
            session_id: login.session_id,
            country_code: login.country_code,
        })
    }

    /// Fetch and deserialize the resource at `path`, returning `None` if it does not exist.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> crate::Result<Option<T>> {
        let url = format!("{}{path}", self.config.api_location);
        log::debug!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("sessionId", self.session_id.as_str()),
                ("countryCode", self.country_code.as_str()),
            ])
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(crate::Error::UnexpectedStatus { status, url }),
        }
    }

    /// Fetch the entity of the given kind, failing with [`crate::Error::NotFound`] if it does not
    /// exist.
    async fn fetch_entity<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        id: u64,
    ) -> crate::Result<T> {
        self.fetch(&format!("{kind}s/{id}"))
            .await?
            .ok_or(crate::Error::NotFound { kind, id })
    }

    /// Look up a track by ID.
    ///
    /// # Errors
    ///
    /// Fails if the track does not exist or the request fails.
    pub async fn track(&self, id: u64) -> crate::Result<Track> {
        let response: dto::TrackResponse = self.fetch_entity("track", id).await?;
        Track::try_from(response)
    }

    /// Look up an album by ID.
    ///
    /// # Errors
    ///
    /// Fails if the album does not exist or the request fails.
    pub async fn album(&self, id: u64) -> crate::Result<Album> {
        let response: dto::AlbumResponse = self.fetch_entity("album", id).await?;
        response.into_album(self.config)
    }

    /// Look up an artist and their biography by ID.
    ///
    /// A missing biography is not an error.
    ///
    /// # Errors
    ///
    /// Fails if the artist does not exist or any request fails.
    pub async fn artist(&self, id: u64) -> crate::Result<ArtistProfile> {
        let response: dto::ArtistResponse = self.fetch_entity("artist", id).await?;
        let biography: Option<dto::BiographyResponse> =
            self.fetch(&format!("artists/{id}/bio")).await?;
        if biography.is_none() {
            log::debug!("Artist {id} has no biography");
        }
        Ok(response.into_profile(self.config, biography))
    }

    /// Download the file at `url` and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the server does not respond with a success status, or the
    /// file cannot be written.
    pub async fn download(&self, url: &str, path: impl AsRef<Path>) -> crate::Result<()> {
        log::debug!("Downloading {url} to {}", path.as_ref().display());
        let content = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        tokio::fs::write(path, &content).await?;
        Ok(())
    }
}
