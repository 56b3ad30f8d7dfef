// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Manager.
//!
//! A terminal-based playlist manager.
//!
//! This application keeps an ordered list of songs and stores it in a plain
//! text file, so the playlist survives restarts.
//!
//! It is organised in three layers:
//!
//! * The **Commander** reads menu choices from the terminal and reports the
//!   outcome of each one.
//! * The **Playlist** owns the ordered songs and all of the reordering logic.
//! * The **Storage** layer maps songs to lines of the playlist file, appending
//!   new songs and rewriting the file when the order changes.
//!
//! ## Architecture
//!
//! Everything runs on the main thread. Each change to the playlist is written
//! to the file before control returns to the menu, so there is nothing to save
//! at exit.

mod commander;
mod config;
mod model;
mod storage;
mod util;

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    commander::Commander, config::AppConfig, model::playlist::Playlist, storage::PlaylistFile,
};

/// The entry point of the application.
///
/// Loads the configuration, sets up logging, loads the playlist and hands
/// control to the menu until the user exits.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config);

    if let Some(path) = config::config_path() {
        info!(path = %path.display(), "using configuration");
    }

    let file = PlaylistFile::new(&config.playlist_file);
    let mut playlist = Playlist::load(file).context("Failed to load playlist")?;

    println!("Playlist Manager (persistent)");

    let stdin = io::stdin();
    let mut commander = Commander::new(stdin.lock(), io::stdout());

    commander
        .run(&mut playlist)
        .context("Application error occurred")
}

/// Installs the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, otherwise from the configured
/// log level. Log lines go to stderr so they stay out of the menu output.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
