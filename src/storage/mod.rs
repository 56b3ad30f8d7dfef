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

//! Data access layer.
//!
//! This module handles all interactions with the playlist file: reading the
//! stored songs at startup and writing them back after every change.
//!
//! # Format
//!
//! Plain text, one record per line, `<id><TAB><title>`. See [`record`].
//!
//! # Write strategies
//!
//! * [`PlaylistFile::append_one`] - opens the file in append mode and writes a
//!   single line. Used when a song is added to the end of the playlist.
//! * [`PlaylistFile::rewrite_all`] - truncates the file and writes every
//!   record. Used whenever a song is removed or the order changes.
//!
//! The file is opened and closed within each call. Rewrites are not atomic,
//! an interrupted rewrite leaves a truncated prefix of the playlist behind.

pub(crate) mod record;

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::trace;

use crate::model::Song;

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("failed to read playlist file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to playlist file {}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rewrite playlist file {}", path.display())]
    Rewrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The backing store for a playlist.
#[derive(Debug, Clone)]
pub(crate) struct PlaylistFile {
    path: PathBuf,
}

impl PlaylistFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the playlist file, in file order.
    ///
    /// A missing file is not an error, it yields an empty playlist. Lines that
    /// cannot be mapped to a [`Song`] are skipped. Invalid UTF-8 is decoded
    /// lossily rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the file exists but cannot be opened
    /// or read.
    pub(crate) fn read_all(&self) -> Result<Vec<Song>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.read_error(e)),
        };

        let mut reader = BufReader::new(file);
        let mut songs = Vec::new();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| self.read_error(e))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buffer);
            match Song::from_line(&line) {
                Some(song) => songs.push(song),
                None => trace!(line_number, "skipping malformed playlist line"),
            }
        }

        Ok(songs)
    }

    /// Appends a single record to the end of the playlist file, creating the
    /// file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Append`] if the file cannot be opened or
    /// written.
    pub(crate) fn append_one(&self, song: &Song) -> Result<(), StorageError> {
        let append = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            song.write_line(&mut file)
        };

        append().map_err(|source| StorageError::Append {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the contents of the playlist file with the given records, in
    /// order. An empty slice truncates the file.
    ///
    /// Writing stops at the first failure, so the file may be left holding
    /// only a prefix of `songs`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Rewrite`] if the file cannot be created or
    /// written.
    pub(crate) fn rewrite_all(&self, songs: &[Song]) -> Result<(), StorageError> {
        let rewrite = || -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            for song in songs {
                song.write_line(&mut writer)?;
            }
            writer.flush()
        };

        rewrite().map_err(|source| StorageError::Rewrite {
            path: self.path.clone(),
            source,
        })
    }

    fn read_error(&self, source: io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_reads_as_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = PlaylistFile::new(dir.path().join("playlist.txt"));

        assert!(file.read_all()?.is_empty());
        assert!(!file.path().exists());

        Ok(())
    }

    #[test]
    fn reads_records_in_file_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        fs::write(&path, "5\tOld Song\n1\tFirst\n")?;

        let songs = PlaylistFile::new(&path).read_all()?;

        assert_eq!(songs, vec![Song::new(5, "Old Song"), Song::new(1, "First")]);

        Ok(())
    }

    #[test]
    fn skips_malformed_lines() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        fs::write(&path, "garbage\n2\tKept\n\nx\tbad id\n3\tLast without newline")?;

        let songs = PlaylistFile::new(&path).read_all()?;

        assert_eq!(songs, vec![Song::new(2, "Kept"), Song::new(3, "Last without newline")]);

        Ok(())
    }

    #[test]
    fn decodes_invalid_utf8_lossily() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        fs::write(&path, b"4\tCaf\xe9\n")?;

        let songs = PlaylistFile::new(&path).read_all()?;

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, 4);
        assert!(songs[0].title.starts_with("Caf"));

        Ok(())
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let result = PlaylistFile::new(dir.path()).read_all();

        assert!(matches!(result, Err(StorageError::Read { .. })));

        Ok(())
    }

    #[test]
    fn append_creates_then_extends() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        let file = PlaylistFile::new(&path);

        file.append_one(&Song::new(1, "A"))?;
        file.append_one(&Song::new(2, "B"))?;

        assert_eq!(fs::read_to_string(&path)?, "1\tA\n2\tB\n");

        Ok(())
    }

    #[test]
    fn rewrite_replaces_contents() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        fs::write(&path, "1\tA\n2\tB\n3\tC\n")?;
        let file = PlaylistFile::new(&path);

        file.rewrite_all(&[Song::new(3, "C"), Song::new(1, "A")])?;

        assert_eq!(fs::read_to_string(&path)?, "3\tC\n1\tA\n");

        Ok(())
    }

    #[test]
    fn rewrite_with_no_songs_truncates() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("playlist.txt");
        fs::write(&path, "1\tA\n")?;

        PlaylistFile::new(&path).rewrite_all(&[])?;

        assert_eq!(fs::read_to_string(&path)?, "");

        Ok(())
    }

    #[test]
    fn writes_into_missing_directory_fail() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = PlaylistFile::new(dir.path().join("missing").join("playlist.txt"));

        assert!(matches!(
            file.append_one(&Song::new(1, "A")),
            Err(StorageError::Append { .. })
        ));
        assert!(matches!(
            file.rewrite_all(&[Song::new(1, "A")]),
            Err(StorageError::Rewrite { .. })
        ));

        Ok(())
    }
}
