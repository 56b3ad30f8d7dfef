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

use crate::model::Song;

/// Formats a song as one line of the playlist listing.
///
/// The position is 1-based and right aligned in a three character column, so
/// that short playlists line up neatly.
///
/// # Arguments
///
/// * `position` - The 1-based position of the song in the playlist.
/// * `song` - The song to describe.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_entry(1, &Song::new(4, "So What")), "  1) #4 - So What");
/// ```
pub(crate) fn format_entry(position: usize, song: &Song) -> String {
    format!("{:3}) {}", position, format_song(song))
}

/// Formats a song as `#<id> - <title>`.
pub(crate) fn format_song(song: &Song) -> String {
    format!("#{} - {}", song.id, song.title)
}
