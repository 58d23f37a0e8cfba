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

//! Terminal emulator background control.
//!
//! Uses the OSC 11 and OSC 111 escape sequences, which most modern terminals
//! (XTerm, iTerm2, Alacritty, Kitty) understand. Terminals that do not simply
//! ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Hex form of an RGB colour, e.g. `#1e1e1e`.
///
/// Named and indexed colours have no fixed RGB value and give `None`.
pub(crate) fn hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}

/// Paints the whole terminal window, so no outline shows around the UI.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    let Some(hex) = hex(colour) else {
        return Ok(());
    };
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{hex}\x07")?;
    stdout.flush()
}

/// Puts back the user's own background colour.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_have_a_hex_form() {
        assert_eq!(hex(Color::Rgb(20, 30, 255)).as_deref(), Some("#141eff"));
        assert_eq!(hex(Color::Blue), None);
    }
}
