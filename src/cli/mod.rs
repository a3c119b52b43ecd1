// Copyright (c) 2024 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Command line interface.

mod album;
mod artist;
mod track;

use crate::tidal::Session;
use crate::Config;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

/// Command line Arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TIDAL username.
    username: String,
    /// TIDAL password.
    password: String,
    /// Show debug information.
    #[arg(short, long)]
    verbose: bool,
    /// Path to configuration file.
    #[arg(short, long, required = false)]
    config_path: Option<PathBuf>,
    /// Command to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Tag an audio file with track metadata.
    Track(track::Args),
    /// Write an album NFO, download the cover and normalize loudness of the album files.
    Album(album::Args),
    /// Write an artist NFO and download the artist image.
    Artist(artist::Args),
}

impl Args {
    /// Get the desired log level, depending on the verbose flag passed on the command line.
    fn log_level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Get the current configuration.
    fn config(&self) -> crate::Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_from_path(path),
            None => Config::load_from_user_dirs(),
        }
    }
}

/// Download an image to `path`, or skip the download if the catalog has none.
async fn download_image(
    session: &Session<'_>,
    url: Option<&str>,
    path: &Path,
    description: &str,
) -> crate::Result<()> {
    match url {
        Some(url) => {
            session.download(url, path).await?;
            log::info!("Saved {description} to {}", path.display());
        }
        None => log::warn!("No {description} available, skipping download"),
    }
    Ok(())
}

/// Main entry point.
///
/// # Errors
///
/// Can returns errors if the command line arguments are incorrect or the executed programs lead to
/// an error.
pub async fn main() -> crate::Result<()> {
    let args = Args::parse();

    if TermLogger::init(
        args.log_level_filter(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger is already initialized");
    }

    let config = args.config()?;
    let session = Session::login(&config.catalog, &args.username, &args.password).await?;

    match args.command {
        Command::Track(cmd_args) => track::run(&session, cmd_args).await,
        Command::Album(cmd_args) => album::run(&config, &session, cmd_args).await,
        Command::Artist(cmd_args) => artist::run(&session, cmd_args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_track() {
        let args =
            Args::try_parse_from(["ti-tag", "user", "secret", "track", "77646169", "a.flac"])
                .unwrap();
        assert_eq!(args.username, "user");
        assert_eq!(args.password, "secret");
        assert!(!args.verbose);
        assert!(args.config_path.is_none());
        let Command::Track(track) = args.command else {
            panic!("expected track command");
        };
        assert_eq!(track.track_id, 77_646_169);
        assert_eq!(track.file, PathBuf::from("a.flac"));
    }

    #[test]
    fn test_parse_album() {
        let args = Args::try_parse_from([
            "ti-tag",
            "-v",
            "--config-path",
            "my.toml",
            "user",
            "secret",
            "album",
            "1",
            "album.nfo",
            "cover.jpg",
            "01.flac",
            "02.flac",
        ])
        .unwrap();
        assert_eq!(args.log_level_filter(), LevelFilter::Debug);
        assert_eq!(args.config_path, Some(PathBuf::from("my.toml")));
        let Command::Album(album) = args.command else {
            panic!("expected album command");
        };
        assert_eq!(album.album_id, 1);
        assert_eq!(album.nfo, PathBuf::from("album.nfo"));
        assert_eq!(album.cover, PathBuf::from("cover.jpg"));
        assert_eq!(
            album.files,
            vec![PathBuf::from("01.flac"), PathBuf::from("02.flac")]
        );
    }

    #[test]
    fn test_parse_album_requires_files() {
        assert!(Args::try_parse_from([
            "ti-tag",
            "user",
            "secret",
            "album",
            "1",
            "album.nfo",
            "cover.jpg"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_artist() {
        let args = Args::try_parse_from([
            "ti-tag",
            "user",
            "secret",
            "artist",
            "8847",
            "artist.nfo",
            "folder.jpg",
        ])
        .unwrap();
        let Command::Artist(artist) = args.command else {
            panic!("expected artist command");
        };
        assert_eq!(artist.artist_id, 8847);
        assert_eq!(artist.file, PathBuf::from("artist.nfo"));
        assert_eq!(artist.image, PathBuf::from("folder.jpg"));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        let unknown_command = ["ti-tag", "user", "secret", "playlist", "1"];
        assert!(Args::try_parse_from(unknown_command).is_err());
        let invalid_id = ["ti-tag", "user", "secret", "track", "abc", "a.flac"];
        assert!(Args::try_parse_from(invalid_id).is_err());
    }

    #[test]
    fn test_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[loudness]\nprogram = \"rgain\"\n").unwrap();
        let path = path.to_string_lossy();
        let args = Args::try_parse_from([
            "ti-tag", "-c", &*path, "user", "secret", "artist", "1", "a.nfo", "a.jpg",
        ])
        .unwrap();
        assert_eq!(args.config().unwrap().loudness.program, "rgain");
    }
}
