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

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{RolePanel, RolePanelAction},
    model::Role,
};

impl RolePanel {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<RolePanelAction> {
        if !self.enabled || self.user.is_none() {
            return None;
        }
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.role_choice = (self.role_choice + Role::ALL.len() - 1) % Role::ALL.len();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.role_choice = (self.role_choice + 1) % Role::ALL.len();
                None
            }

            KeyCode::Char('j') | KeyCode::Down => {
                if !self.user_roles.is_empty() {
                    let i = self.list_state.selected().map_or(0, |i| (i + 1) % self.user_roles.len());
                    self.list_state.select(Some(i));
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.user_roles.is_empty() {
                    let len = self.user_roles.len();
                    let i = self.list_state.selected().map_or(len - 1, |i| (i + len - 1) % len);
                    self.list_state.select(Some(i));
                }
                None
            }

            KeyCode::Char('a') | KeyCode::Enter => Some(RolePanelAction::Add(self.chosen_role())),

            KeyCode::Char('r') | KeyCode::Delete => self
                .list_state
                .selected()
                .and_then(|i| self.user_roles.get(i))
                .map(|role| RolePanelAction::Remove(*role)),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::UserVo;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn panel_for_user() -> RolePanel {
        let mut panel = RolePanel::new();
        panel.set_enabled(true);
        panel.set_user(Some(UserVo::default()));
        panel.set_user_roles(vec![Role::Payroll, Role::EmployeeBenefits]);
        panel
    }

    #[test]
    fn picker_wraps_in_both_directions() {
        let mut panel = panel_for_user();
        panel.process_event(&key(KeyCode::Left));
        assert_eq!(panel.chosen_role(), Role::Returns);
        panel.process_event(&key(KeyCode::Right));
        panel.process_event(&key(KeyCode::Right));
        assert_eq!(panel.chosen_role(), Role::AccountsReceivable);

        assert_eq!(
            panel.process_event(&key(KeyCode::Char('a'))),
            Some(RolePanelAction::Add(Role::AccountsReceivable))
        );
    }

    #[test]
    fn remove_takes_the_highlighted_role() {
        let mut panel = panel_for_user();
        assert_eq!(panel.process_event(&key(KeyCode::Char('r'))), None);

        panel.process_event(&key(KeyCode::Up));
        assert_eq!(
            panel.process_event(&key(KeyCode::Char('r'))),
            Some(RolePanelAction::Remove(Role::EmployeeBenefits))
        );
    }

    #[test]
    fn disabled_panel_does_nothing() {
        let mut panel = panel_for_user();
        panel.set_enabled(false);
        assert_eq!(panel.process_event(&key(KeyCode::Char('a'))), None);
    }
}
