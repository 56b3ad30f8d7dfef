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

//! Playlist state management.
//!
//! This module provides the ordered list of songs making up the playlist,
//! and keeps the playlist file in step with it after every change.
//!
//! Adding a song appends a single line to the file, every other change
//! rewrites the whole file. A failed write is logged and the in-memory change
//! is kept, the next successful rewrite brings the file back in line.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::{
    model::{Song, sanitise_title},
    storage::{PlaylistFile, StorageError},
};

pub(crate) struct Playlist {
    songs: Vec<Song>,
    /// `None` once the largest id has been handed out.
    next_id: Option<u64>,
    file: PlaylistFile,
}

impl Playlist {
    /// Loads the playlist from its backing file.
    ///
    /// File order is preserved. The next id is one more than the largest id
    /// found, or 1 if there are no songs. A record repeating an id that was
    /// already loaded is dropped. A record holding `u64::MAX` is kept, but no
    /// further songs can be added after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read. A missing file
    /// gives an empty playlist.
    pub(crate) fn load(file: PlaylistFile) -> Result<Self, StorageError> {
        let mut seen = HashSet::new();
        let songs: Vec<Song> = file
            .read_all()?
            .into_iter()
            .filter(|song| seen.insert(song.id))
            .collect();

        let next_id = songs
            .iter()
            .map(|song| song.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        info!(
            path = %file.path().display(),
            songs = songs.len(),
            next_id = ?next_id,
            "loaded playlist"
        );

        Ok(Self {
            songs,
            next_id,
            file,
        })
    }

    /// Adds a song to the end of the playlist and appends it to the file.
    ///
    /// The title is sanitised before the song is created, see
    /// [`sanitise_title`].
    ///
    /// Returns `None`, and changes nothing, if every id has been used.
    pub(crate) fn add(&mut self, title: &str) -> Option<Song> {
        let Some(id) = self.next_id else {
            warn!("no song ids left, not adding song");
            return None;
        };

        let song = Song::new(id, &sanitise_title(title));
        self.next_id = id.checked_add(1);
        self.songs.push(song.clone());

        debug!(id, "added song");
        self.persist(self.file.append_one(&song));

        Some(song)
    }

    /// Removes the song with the given id, returning it if it was found.
    pub(crate) fn remove(&mut self, id: u64) -> Option<Song> {
        let index = self.position(id)?;
        let song = self.songs.remove(index);

        debug!(id, "removed song");
        self.rewrite();

        Some(song)
    }

    /// Moves the song with the given id one position towards the start of the
    /// playlist.
    ///
    /// Returns `false`, and changes nothing, if the id is not found or the song
    /// is already first.
    pub(crate) fn move_up(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.swap(index - 1, index);
                true
            }
            _ => false,
        }
    }

    /// Moves the song with the given id one position towards the end of the
    /// playlist.
    ///
    /// Returns `false`, and changes nothing, if the id is not found or the song
    /// is already last.
    pub(crate) fn move_down(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.songs.len() => {
                self.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.songs.clear();

        debug!("cleared playlist");
        self.rewrite();
    }

    /// The songs in playback order.
    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.songs.swap(a, b);

        debug!(
            first = self.songs[a].id,
            second = self.songs[b].id,
            "reordered songs"
        );
        self.rewrite();
    }

    fn rewrite(&self) {
        self.persist(self.file.rewrite_all(&self.songs));
    }

    fn persist(&self, result: Result<(), StorageError>) {
        if let Err(e) = result {
            let cause = std::error::Error::source(&e)
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(%cause, "{e}");
        }
    }
}
