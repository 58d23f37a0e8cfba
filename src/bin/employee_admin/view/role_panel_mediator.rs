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

use std::{cell::RefCell, rc::Rc};

use mediate::{Binding, Mediator, Notification, Notifier, Result};

use crate::{
    components::{RolePanel, RolePanelAction},
    model::{RoleAssignment, RoleVo, UserVo, role_proxy},
    names::{mediators::ROLE_PANEL_MEDIATOR, notes},
};

pub(crate) struct RolePanelMediator {
    role_panel: Rc<RefCell<RolePanel>>,
    binding: Binding,
}

impl RolePanelMediator {
    pub(crate) fn new(role_panel: Rc<RefCell<RolePanel>>) -> Self {
        Self {
            role_panel,
            binding: Binding::new(),
        }
    }

    pub(crate) fn handle_action(&self, action: RolePanelAction) -> Result<()> {
        let Some(uname) = self.selected_uname() else {
            return Ok(());
        };

        match action {
            RolePanelAction::Add(role) => {
                // The grant comes back as addRoleResult, which refreshes the list
                self.binding.send_notification(
                    Notification::new(notes::ADD_ROLE).with_body(RoleAssignment { uname, role }),
                )?;
            }
            RolePanelAction::Remove(role) => {
                role_proxy(&self.binding)?.remove_role_from_user(&uname, role);
                self.update_user_role_list()?;
            }
        }

        self.role_panel.borrow_mut().reset_selection();
        Ok(())
    }

    fn selected_uname(&self) -> Option<String> {
        self.role_panel.borrow().user().map(|user| user.uname.clone())
    }

    fn update_user_role_list(&self) -> Result<()> {
        let Some(uname) = self.selected_uname() else {
            return Ok(());
        };
        let roles = role_proxy(&self.binding)?.user_roles(&uname);
        self.role_panel.borrow_mut().set_user_roles(roles);
        Ok(())
    }

    fn clear_and_disable(&self) {
        let mut role_panel = self.role_panel.borrow_mut();
        role_panel.clear_form();
        role_panel.set_enabled(false);
    }
}

impl Mediator for RolePanelMediator {
    fn mediator_name(&self) -> &str {
        ROLE_PANEL_MEDIATOR
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn list_notification_interests(&self) -> Vec<String> {
        vec![
            notes::NEW_USER.into(),
            notes::USER_ADDED.into(),
            notes::USER_UPDATED.into(),
            notes::USER_DELETED.into(),
            notes::CANCEL_SELECTED.into(),
            notes::USER_SELECTED.into(),
            notes::ADD_ROLE_RESULT.into(),
        ]
    }

    fn handle_notification(&self, note: &Notification) -> Result<()> {
        match note.name() {
            notes::USER_ADDED => {
                if let Some(user) = note.body::<UserVo>() {
                    role_proxy(&self.binding)?.add_item(RoleVo::new(&user.uname, vec![]));
                }
                self.clear_and_disable();
            }

            notes::NEW_USER | notes::USER_UPDATED | notes::USER_DELETED | notes::CANCEL_SELECTED => {
                self.clear_and_disable();
            }

            notes::USER_SELECTED => {
                {
                    let mut role_panel = self.role_panel.borrow_mut();
                    role_panel.clear_form();
                    role_panel.set_enabled(true);
                    role_panel.set_user(note.body::<UserVo>().cloned());
                }
                self.update_user_role_list()?;
            }

            notes::ADD_ROLE_RESULT => self.update_user_role_list()?,

            _ => {}
        }
        Ok(())
    }
}
