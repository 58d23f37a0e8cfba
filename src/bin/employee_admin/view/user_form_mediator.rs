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
    components::{FormMode, UserForm, UserFormAction},
    model::{UserVo, user_proxy},
    names::{mediators::USER_FORM_MEDIATOR, notes},
};

pub(crate) struct UserFormMediator {
    user_form: Rc<RefCell<UserForm>>,
    binding: Binding,
}

impl UserFormMediator {
    pub(crate) fn new(user_form: Rc<RefCell<UserForm>>) -> Self {
        Self {
            user_form,
            binding: Binding::new(),
        }
    }

    pub(crate) fn handle_action(&self, action: UserFormAction) -> Result<()> {
        let user = self.user_form.borrow().user();
        match action {
            UserFormAction::Add => {
                user_proxy(&self.binding)?.add_item(user.clone());
                self.binding
                    .send_notification(Notification::new(notes::USER_ADDED).with_body(user))?;
            }
            UserFormAction::Update => {
                user_proxy(&self.binding)?.update_item(user.clone());
                self.binding
                    .send_notification(Notification::new(notes::USER_UPDATED).with_body(user))?;
            }
            UserFormAction::Cancel => {
                self.binding
                    .send_notification(Notification::new(notes::CANCEL_SELECTED))?;
            }
        }

        let mut user_form = self.user_form.borrow_mut();
        user_form.clear_form();
        user_form.set_enabled(false);
        user_form.set_mode(FormMode::Add);
        Ok(())
    }
}

impl Mediator for UserFormMediator {
    fn mediator_name(&self) -> &str {
        USER_FORM_MEDIATOR
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn list_notification_interests(&self) -> Vec<String> {
        vec![
            notes::NEW_USER.into(),
            notes::USER_DELETED.into(),
            notes::USER_SELECTED.into(),
        ]
    }

    fn handle_notification(&self, note: &Notification) -> Result<()> {
        let mut user_form = self.user_form.borrow_mut();
        match note.name() {
            notes::NEW_USER => {
                user_form.clear_form();
                user_form.set_user(note.body::<UserVo>().unwrap_or(&UserVo::default()));
                user_form.set_mode(FormMode::Add);
                user_form.set_enabled(true);
                user_form.set_focus();
            }
            notes::USER_DELETED => {
                user_form.clear_form();
                user_form.set_enabled(false);
            }
            notes::USER_SELECTED => {
                user_form.clear_form();
                if let Some(user) = note.body::<UserVo>() {
                    user_form.set_user(user);
                }
                user_form.set_mode(FormMode::Edit);
                user_form.set_enabled(true);
                user_form.set_focus();
            }
            _ => {}
        }
        Ok(())
    }
}
