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
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{CONFIRM, DEPARTMENT, FIELD_LABELS, FormMode, PASSWORD};
use crate::{components::UserForm, render::Render, theme::Theme};

const LABEL_WIDTH: u16 = 13;

impl Render for UserForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match (self.enabled, self.mode) {
            (false, _) => " User ",
            (true, FormMode::Add) => " New User ",
            (true, FormMode::Edit) => " Edit User ",
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border(self.is_active))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1); FIELD_LABELS.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let value_style = if self.enabled {
            Style::default().fg(theme.text_fg)
        } else {
            Style::default().fg(theme.muted_fg)
        };

        for (i, label) in FIELD_LABELS.iter().enumerate() {
            let value = match i {
                DEPARTMENT => format!("< {} >", self.department),
                PASSWORD | CONFIRM => "*".repeat(self.inputs[i].value().chars().count()),
                _ => self.inputs[i].value().to_owned(),
            };

            let focused = self.enabled && i == self.field;
            let label_style = if focused {
                Style::default().bold().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.muted_fg)
            };

            let line = Line::from(vec![
                Span::styled(format!("{label:<width$}", width = LABEL_WIDTH as usize), label_style),
                Span::styled(value, value_style),
            ]);
            f.render_widget(Paragraph::new(line), rows[i]);

            if focused && self.captures_input() && i != DEPARTMENT {
                let cursor_x = rows[i].x + LABEL_WIDTH + self.inputs[i].visual_cursor() as u16;
                f.set_cursor_position((cursor_x, rows[i].y));
            }
        }

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error_fg)),
                rows[FIELD_LABELS.len() + 1],
            );
        }
    }
}
