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

//! The user table.
//!
//! Shows every stored user and tracks two things: the highlighted row, which
//! moves with the cursor keys, and the selected user, which only changes
//! when a row is activated. Activations are reported as [`UserListAction`]s.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::UserVo;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UserListAction {
    Select(String),
    New,
    Delete(String),
}

pub(crate) struct UserList {
    users: Vec<UserVo>,
    selected_user: Option<String>,
    pub(crate) table_state: TableState,
    pub(crate) is_active: bool,
}

impl UserList {
    pub(crate) fn new() -> Self {
        Self {
            users: vec![],
            selected_user: None,
            table_state: TableState::new(),
            is_active: false,
        }
    }

    pub(crate) fn users(&self) -> &[UserVo] {
        &self.users
    }

    pub(crate) fn set_users(&mut self, users: Vec<UserVo>) {
        self.users = users;
        if self.users.is_empty() {
            self.table_state.select(None);
        } else if let Some(i) = self.table_state.selected() {
            self.table_state.select(Some(i.min(self.users.len() - 1)));
        }
    }

    pub(crate) fn selected_user(&self) -> Option<&str> {
        self.selected_user.as_deref()
    }

    pub(crate) fn de_select(&mut self) {
        self.selected_user = None;
    }

    fn highlighted(&self) -> Option<&UserVo> {
        self.table_state.selected().and_then(|i| self.users.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.users.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.users.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_users;

    #[test]
    fn shrinking_the_list_keeps_the_highlight_in_range() {
        let mut list = UserList::new();
        list.set_users(demo_users());
        list.table_state.select(Some(2));

        list.set_users(demo_users().into_iter().take(1).collect());
        assert_eq!(list.table_state.selected(), Some(0));

        list.set_users(vec![]);
        assert_eq!(list.table_state.selected(), None);
    }

    #[test]
    fn navigation_wraps() {
        let mut list = UserList::new();
        list.set_users(demo_users());

        list.goto_previous();
        assert_eq!(list.table_state.selected(), Some(2));
        list.goto_next();
        assert_eq!(list.table_state.selected(), Some(0));
    }
}
