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

//! Screen layout and frame composition.
//!
//! [`draw`] is called after every event. It splits the screen into the user
//! table, the user form, the role panel and a one line status bar, and asks
//! each panel to draw itself into its area.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer layout: panels, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Panels: user table on top, form and roles side by side underneath
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(outer[0]);

    let editors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(panels[1]);

    app.panels.user_list.borrow_mut().draw(f, panels[0], &app.theme);
    app.panels.user_form.borrow_mut().draw(f, editors[0], &app.theme);
    app.panels.role_panel.borrow_mut().draw(f, editors[1], &app.theme);

    status::draw_status(f, outer[1], app);
}
