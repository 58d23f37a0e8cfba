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

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::{components::UserList, render::Render, theme::Theme};

impl Render for UserList {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selected_user.as_deref();

        let rows = self.users.iter().map(|user| {
            let marker = if Some(user.uname.as_str()) == selected {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(user.uname.as_str()).style(Style::default().fg(theme.uname_fg))),
                Cell::from(Line::from(user.fname.as_str()).style(Style::default().fg(theme.text_fg))),
                Cell::from(Line::from(user.lname.as_str()).style(Style::default().fg(theme.text_fg))),
                Cell::from(Line::from(user.email.as_str()).style(Style::default().fg(theme.muted_fg))),
                Cell::from(Line::from(user.department.label()).style(Style::default().fg(theme.department_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(18),
                Constraint::Percentage(18),
                Constraint::Percentage(18),
                Constraint::Percentage(26),
                Constraint::Percentage(20),
            ],
        )
        .header(
            Row::new(vec!["", "User Name", "First Name", "Last Name", "Email", "Department"])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        .block(
            Block::default()
                .title(" Users ")
                .borders(Borders::ALL)
                .border_style(theme.border(self.is_active))
                .padding(Padding::horizontal(1)),
        );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
