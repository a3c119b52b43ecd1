// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Error and result types.

use std::io;
use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum ErrorType {
    /// Configuration error.
    #[error("Configuration Error ({0})")]
    Config(#[from] crate::config::ConfigError),
    /// I/O Error.
    #[error("Input/Output error ({:?})", .0)]
    Io(#[from] io::Error),
    /// File has an unknown file extension.
    #[error("File has unknown file type")]
    UnknownFileType,
    /// Errors raised by the [`metaflac`] crate.
    #[cfg(feature = "flac")]
    #[error("Failed to access FLAC tag: {0}")]
    Flac(#[from] metaflac::Error),
    /// Errors raised by the [`mp4ameta`] crate.
    #[cfg(feature = "mp4")]
    #[error("Failed to access MP4 tag: {0}")]
    Mp4(#[from] mp4ameta::Error),
    /// An HTTP request to the catalog failed.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The catalog rejected the username/password combination.
    #[error("Authentication failed (HTTP {0})")]
    AuthenticationFailed(reqwest::StatusCode),
    /// The catalog does not know the requested entity.
    #[error("No {kind} with ID {id} found")]
    NotFound {
        /// Kind of entity (e.g. `track`).
        kind: &'static str,
        /// The ID that was looked up.
        id: u64,
    },
    /// The catalog returned an unexpected HTTP status.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        /// The status code.
        status: reqwest::StatusCode,
        /// The requested URL.
        url: String,
    },
    /// The catalog sent a response that lacks required data.
    #[error("Malformed catalog response: {0}")]
    MalformedResponse(&'static str),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, ErrorType>;
