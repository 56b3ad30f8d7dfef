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

//! Menu choices offered by the interactive shell.

pub(crate) const MENU: &str = "\n1) Add song\n2) Remove song by id\n3) Show playlist\n4) Move up\n5) Move down\n6) Clear playlist\n0) Exit\nChoose: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    AddSong,
    RemoveSong,
    ShowPlaylist,
    MoveUp,
    MoveDown,
    ClearPlaylist,
    Exit,
}

/// Why a line of input did not select a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuError {
    /// The input was not a number.
    NotANumber,
    /// The input was a number with no menu entry.
    Unknown,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Result<Self, MenuError> {
        let number: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;

        match number {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::AddSong),
            2 => Ok(MenuChoice::RemoveSong),
            3 => Ok(MenuChoice::ShowPlaylist),
            4 => Ok(MenuChoice::MoveUp),
            5 => Ok(MenuChoice::MoveDown),
            6 => Ok(MenuChoice::ClearPlaylist),
            _ => Err(MenuError::Unknown),
        }
    }
}
