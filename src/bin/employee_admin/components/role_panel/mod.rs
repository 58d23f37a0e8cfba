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

//! The role panel.
//!
//! Lists the roles of the selected user and offers a picker over every role
//! for granting a new one.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::{Role, UserVo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RolePanelAction {
    Add(Role),
    Remove(Role),
}

pub(crate) struct RolePanel {
    user: Option<UserVo>,
    user_roles: Vec<Role>,
    role_choice: usize,
    pub(crate) list_state: ListState,
    enabled: bool,
    pub(crate) is_active: bool,
}

impl RolePanel {
    pub(crate) fn new() -> Self {
        Self {
            user: None,
            user_roles: vec![],
            role_choice: 0,
            list_state: ListState::default(),
            enabled: false,
            is_active: false,
        }
    }

    pub(crate) fn user(&self) -> Option<&UserVo> {
        self.user.as_ref()
    }

    pub(crate) fn set_user(&mut self, user: Option<UserVo>) {
        self.user = user;
    }

    pub(crate) fn user_roles(&self) -> &[Role] {
        &self.user_roles
    }

    pub(crate) fn set_user_roles(&mut self, roles: Vec<Role>) {
        self.user_roles = roles;
        if self.user_roles.is_empty() {
            self.list_state.select(None);
        } else if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.min(self.user_roles.len() - 1)));
        }
    }

    /// The role currently shown in the picker.
    pub(crate) fn chosen_role(&self) -> Role {
        Role::ALL[self.role_choice % Role::ALL.len()]
    }

    pub(crate) fn clear_form(&mut self) {
        self.user = None;
        self.user_roles.clear();
        self.reset_selection();
    }

    pub(crate) fn reset_selection(&mut self) {
        self.role_choice = 0;
        self.list_state.select(None);
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_forgets_the_user_and_roles() {
        let mut panel = RolePanel::new();
        panel.set_user(Some(UserVo::default()));
        panel.set_user_roles(vec![Role::Sales]);
        panel.role_choice = 4;

        panel.clear_form();

        assert!(panel.user().is_none());
        assert!(panel.user_roles().is_empty());
        assert_eq!(panel.chosen_role(), Role::AccountsPayable);
    }
}
