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
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{components::RolePanel, render::Render, theme::Theme};

impl Render for RolePanel {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match &self.user {
            Some(user) if self.enabled => format!(" Roles: {} ", user.uname),
            _ => " Roles ".to_owned(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border(self.is_active))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = self
            .user_roles
            .iter()
            .map(|role| ListItem::new(role.label()).style(Style::default().fg(theme.text_fg)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        if self.enabled {
            let picker = Line::from(vec![
                Span::styled("Add: ", Style::default().fg(theme.muted_fg)),
                Span::styled(format!("< {} >", self.chosen_role()), Style::default().bold().fg(theme.accent_colour)),
            ]);
            f.render_widget(Paragraph::new(picker), chunks[1]);
        }
    }
}
