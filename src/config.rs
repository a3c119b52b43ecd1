// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Configuration utils.

use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Encountered when the configuration cannot be loaded.
#[derive(Error, Debug)]
#[error("Configuration Error: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// Default configuration TOML string.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Prefix for environment variables that override configuration values.
const ENVIRONMENT_PREFIX: &str = "TI_TAG";

/// Configuration for the TIDAL catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the REST API, including the trailing slash.
    pub api_location: String,
    /// Application token sent along with the login request.
    pub api_token: String,
    /// Base URL for cover and artist pictures, including the trailing slash.
    pub image_location: String,
    /// Edge length (in pixels) of downloaded album covers.
    pub album_cover_size: u16,
    /// Edge length (in pixels) of downloaded artist images.
    pub artist_image_size: u16,
}

/// Configuration for loudness normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoudnessConfig {
    /// Name or path of the `loudgain` executable.
    pub program: String,
}

/// The main configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for catalog lookups.
    pub catalog: CatalogConfig,
    /// Configuration for loudness normalization.
    pub loudness: LoudnessConfig,
}

impl Config {
    /// Build the configuration from the defaults, an optional file and the environment.
    fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        if let Some(path) = path {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Load the configuration from a file located at the given path.
    ///
    /// Values not set in the file are taken from the default configuration.
    ///
    /// # Errors
    ///
    /// This method can fail if the file cannot be accessed or if it contains malformed
    /// configuration markup.
    pub fn load_from_path<T: AsRef<Path>>(path: T) -> crate::Result<Self> {
        let config = Self::load(Some(path.as_ref()))?;
        Ok(config)
    }

    /// Load the configuration from the user's XDG config directory (if a config file exists
    /// there), falling back to the defaults.
    ///
    /// # Errors
    ///
    /// This method can fail if the config file exists but contains malformed configuration
    /// markup.
    pub fn load_from_user_dirs() -> crate::Result<Self> {
        let path = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))
            .find_config_file("config.toml");
        let config = Self::load(path.as_deref())?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load(None).expect("Failed to load default config")
    }
}
