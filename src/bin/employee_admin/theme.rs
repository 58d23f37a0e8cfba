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

//! Colour palette for the admin screens.

use ratatui::style::{Color, Style};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) uname_fg: Color,
    pub(crate) department_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 30, 45),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(250, 189, 47),
            highlight_bg: Color::Rgb(40, 70, 120),

            text_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(162, 161, 166),
            uname_fg: Color::Rgb(255, 215, 0),
            department_fg: Color::Rgb(179, 157, 219),
            error_fg: Color::Rgb(240, 90, 90),
        }
    }

    /// Border style for a panel, brighter when the panel has focus.
    pub(crate) fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border_colour)
        } else {
            Style::default().fg(self.border_colour)
        }
    }
}
