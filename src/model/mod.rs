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

//! Domain models and core data structures.
//!
//! This module defines the song record held by the playlist, along with the
//! rules a title must satisfy before it can be stored.

pub(crate) mod playlist;

/// Maximum number of characters kept from a song title.
pub(crate) const MAX_TITLE_LEN: usize = 199;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: u64,
    pub(crate) title: String,
}

impl Song {
    pub(crate) fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: truncate_title(title),
        }
    }
}

/// Makes a user supplied title safe to store.
///
/// Tabs and line terminators are the field separator and record terminator
/// of the playlist file, so each one is replaced by a single space. The
/// result is then truncated to [`MAX_TITLE_LEN`] characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitise_title("Side A\tTrack 1"), "Side A Track 1");
/// ```
pub(crate) fn sanitise_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '\t' | '\r' | '\n' => ' ',
            c => c,
        })
        .collect();

    truncate_title(&cleaned)
}

/// Truncates a title to [`MAX_TITLE_LEN`] characters, on a character boundary.
pub(crate) fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(MAX_TITLE_LEN) {
        Some((end, _)) => title[..end].to_string(),
        None => title.to_string(),
    }
}
