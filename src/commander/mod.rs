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

//! Interactive menu shell.
//!
//! This module implements the numbered text menu used to drive the playlist.
//! Each line read from the input is translated into a single call on the
//! [`Playlist`], and the outcome is reported back on the output.
//!
//! The shell holds no playlist state of its own. Every change is persisted by
//! the playlist as it is made, so leaving the shell needs no extra work.

mod menu;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::{
    commander::menu::{MENU, MenuChoice, MenuError},
    model::playlist::Playlist,
    util::format::{format_entry, format_song},
};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub(crate) struct Commander<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Commander<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    /// Playlist file errors are not returned, the playlist logs those itself.
    pub(crate) fn run(&mut self, playlist: &mut Playlist) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.handle_choice(choice, playlist)?
                }
                Err(MenuError::NotANumber) => {
                    writeln!(self.output, "Invalid input.")?;
                    Flow::Continue
                }
                Err(MenuError::Unknown) => {
                    writeln!(self.output, "Invalid.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting.")?;
        self.output.flush()?;

        Ok(())
    }

    fn handle_choice(&mut self, choice: MenuChoice, playlist: &mut Playlist) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => return Ok(Flow::Exit),

            MenuChoice::AddSong => {
                let Some(title) = self.prompt("Enter song title: ")? else {
                    return Ok(Flow::Exit);
                };
                if title.is_empty() {
                    writeln!(self.output, "Empty title.")?;
                } else {
                    match playlist.add(&title) {
                        Some(song) => writeln!(self.output, "Added: {}", format_song(&song))?,
                        None => writeln!(self.output, "Cannot add song (no ids left).")?,
                    }
                }
            }

            MenuChoice::RemoveSong => {
                let Some(id) = self.prompt_id("Enter song id: ")? else {
                    return Ok(Flow::Exit);
                };
                match id {
                    Some(id) => match playlist.remove(id) {
                        Some(song) => writeln!(self.output, "Removed: {}", format_song(&song))?,
                        None => writeln!(self.output, "Song #{id} not found.")?,
                    },
                    None => writeln!(self.output, "Invalid.")?,
                }
            }

            MenuChoice::ShowPlaylist => self.show_playlist(playlist)?,

            MenuChoice::MoveUp => {
                let Some(id) = self.prompt_id("Enter song id to move up: ")? else {
                    return Ok(Flow::Exit);
                };
                match id {
                    Some(id) if playlist.move_up(id) => writeln!(self.output, "Moved up.")?,
                    Some(_) => {
                        writeln!(self.output, "Cannot move up (maybe head or not found).")?
                    }
                    None => writeln!(self.output, "Invalid.")?,
                }
            }

            MenuChoice::MoveDown => {
                let Some(id) = self.prompt_id("Enter song id to move down: ")? else {
                    return Ok(Flow::Exit);
                };
                match id {
                    Some(id) if playlist.move_down(id) => writeln!(self.output, "Moved down.")?,
                    Some(_) => writeln!(self.output, "Cannot move down (last or not found).")?,
                    None => writeln!(self.output, "Invalid.")?,
                }
            }

            MenuChoice::ClearPlaylist => {
                let Some(answer) = self.prompt("Confirm clear playlist? (y/N): ")? else {
                    return Ok(Flow::Exit);
                };
                if matches!(answer.chars().next(), Some('y' | 'Y')) {
                    playlist.clear();
                    writeln!(self.output, "Playlist cleared.")?;
                } else {
                    writeln!(self.output, "Cancelled.")?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn show_playlist(&mut self, playlist: &Playlist) -> Result<()> {
        if playlist.is_empty() {
            writeln!(self.output, "Playlist empty.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Playlist ---")?;
        for (index, song) in playlist.songs().iter().enumerate() {
            writeln!(self.output, "{}", format_entry(index + 1, song))?;
        }

        Ok(())
    }

    /// Writes a prompt and reads the reply. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        self.read_line()
    }

    /// Prompts for a song id. The inner `None` means the reply was not a
    /// valid id.
    fn prompt_id(&mut self, text: &str) -> Result<Option<Option<u64>>> {
        Ok(self.prompt(text)?.map(|reply| reply.trim().parse().ok()))
    }

    /// Reads one line of input without its terminator. Bytes that are not
    /// valid UTF-8 are decoded lossily. Returns `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buffer);

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use tempfile::TempDir;

    use super::*;
    use crate::storage::PlaylistFile;

    fn session(dir: &TempDir, script: impl AsRef<[u8]>) -> anyhow::Result<(Playlist, String)> {
        let mut playlist = Playlist::load(PlaylistFile::new(dir.path().join("playlist.txt")))?;
        let mut output = Vec::new();

        Commander::new(Cursor::new(script.as_ref()), &mut output).run(&mut playlist)?;

        Ok((playlist, String::from_utf8(output)?))
    }

    #[test]
    fn adds_and_shows_songs() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, "1\nSo What\n1\nBlue in Green\n3\n0\n")?;

        assert_eq!(playlist.songs().len(), 2);
        assert!(output.contains("Added: #1 - So What"));
        assert!(output.contains("Added: #2 - Blue in Green"));
        assert!(output.contains("--- Playlist ---\n  1) #1 - So What\n  2) #2 - Blue in Green\n"));
        assert!(output.ends_with("Exiting.\n"));

        Ok(())
    }

    #[test]
    fn rejects_empty_title() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, "1\n\n0\n")?;

        assert!(playlist.is_empty());
        assert!(output.contains("Empty title."));

        Ok(())
    }

    #[test]
    fn reports_invalid_choices() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (_, output) = session(&dir, "abc\n9\n0\n")?;

        assert!(output.contains("Invalid input."));
        assert!(output.contains("Invalid.\n"));

        Ok(())
    }

    #[test]
    fn removes_and_reorders() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let script = "1\nA\n1\nB\n1\nC\n5\n1\n4\n1\n4\n1\n2\n2\n2\n7\n2\nx\n0\n";

        let (playlist, output) = session(&dir, script)?;

        assert!(output.contains("Moved down."));
        assert!(output.contains("Moved up."));
        assert!(output.contains("Cannot move up (maybe head or not found)."));
        assert!(output.contains("Removed: #2 - B"));
        assert!(output.contains("Song #7 not found."));
        assert!(output.contains("Invalid.\n"));

        let ids: Vec<u64> = playlist.songs().iter().map(|song| song.id).collect();
        assert_eq!(ids, vec![1, 3]);

        Ok(())
    }

    #[test]
    fn clear_needs_confirmation() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, "1\nA\n6\nn\n3\n6\ny\n3\n0\n")?;

        assert!(output.contains("Cancelled."));
        assert!(output.contains("Playlist cleared."));
        assert!(output.contains("Playlist empty."));
        assert!(playlist.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("playlist.txt"))?, "");

        Ok(())
    }

    #[test]
    fn end_of_input_exits() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, "1\nA\n4\n")?;

        assert_eq!(playlist.songs().len(), 1);
        assert!(output.ends_with("Exiting.\n"));

        Ok(())
    }

    #[test]
    fn state_survives_a_new_session() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        session(&dir, "1\nA\n1\nB\n5\n1\n0\n")?;

        let (playlist, output) = session(&dir, "1\nC\n3\n0\n")?;

        assert!(output.contains("Added: #3 - C"));
        assert!(output.contains("  1) #2 - B\n  2) #1 - A\n  3) #3 - C\n"));
        assert_eq!(playlist.songs().len(), 3);

        Ok(())
    }

    #[test]
    fn accepts_titles_that_are_not_utf8() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, b"1\nCaf\xe9\n3\n0\n")?;

        assert_eq!(playlist.songs().len(), 1);
        assert!(playlist.songs()[0].title.starts_with("Caf"));
        assert!(output.contains("Added: #1 - Caf"));
        assert!(output.ends_with("Exiting.\n"));

        Ok(())
    }

    #[test]
    fn clear_checks_only_the_first_character() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let (playlist, output) = session(&dir, "1\nA\n6\n y\n6\nyes please\n0\n")?;

        assert!(output.contains("Cancelled."));
        assert!(output.contains("Playlist cleared."));
        assert!(playlist.is_empty());

        Ok(())
    }

    #[test]
    fn reports_when_ids_run_out() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("playlist.txt"), format!("{}\tBig\n", u64::MAX))?;

        let (playlist, output) = session(&dir, "1\nMore\n0\n")?;

        assert!(output.contains("Cannot add song (no ids left)."));
        assert_eq!(playlist.songs().len(), 1);

        Ok(())
    }
}
