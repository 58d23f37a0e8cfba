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

//! The status line: key hints for the focused panel, or the last error.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus, components::FormMode};

fn hints(app: &App) -> &'static str {
    match app.focus {
        Focus::UserList => "j/k move  enter select  n new  d delete  tab next  q quit",
        Focus::UserForm if app.panels.user_form.borrow().is_enabled() => {
            match app.panels.user_form.borrow().mode() {
                FormMode::Add => "up/down field  left/right department  enter add  esc cancel  tab next",
                FormMode::Edit => "up/down field  left/right department  enter update  esc cancel  tab next",
            }
        }
        Focus::RolePanel if app.panels.role_panel.borrow().is_enabled() => {
            "left/right role  a add  j/k move  r remove  tab next  q quit"
        }
        Focus::UserForm | Focus::RolePanel => "select or create a user first  tab next  q quit",
    }
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = match &app.status {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_fg)),
        None => Paragraph::new(hints(app)).style(Style::default().fg(app.theme.muted_fg)),
    };

    f.render_widget(line, container[0]);
}
