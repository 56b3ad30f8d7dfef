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

//! Playlist file line mapping for domain models.
//!
//! This module provides the conversion logic between single lines of the
//! playlist file and [`Song`] records. A line has the shape
//! `<id><TAB><title>` and is terminated by a newline.

use std::io::{self, Write};

use crate::model::Song;

const FIELD_SEPARATOR: char = '\t';

impl Song {
    /// Maps one line of the playlist file to a [`Song`].
    ///
    /// Trailing line terminators are stripped from the title and the title is
    /// truncated to the maximum title length.
    ///
    /// Returns `None` for a malformed line, which the caller skips:
    /// * The line has no field separator.
    /// * The id field is not a non-negative decimal integer.
    pub(crate) fn from_line(line: &str) -> Option<Self> {
        let (id, title) = line.split_once(FIELD_SEPARATOR)?;
        let id = id.trim().parse().ok()?;
        let title = title.trim_end_matches(['\r', '\n']);

        Some(Song::new(id, title))
    }

    /// Writes this record as one line of the playlist file.
    pub(crate) fn write_line<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}{}{}", self.id, FIELD_SEPARATOR, self.title)
    }
}
