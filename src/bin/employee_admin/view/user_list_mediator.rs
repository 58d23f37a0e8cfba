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
use tracing::warn;

use crate::{
    components::{UserList, UserListAction},
    model::{UserVo, user_proxy},
    names::{mediators::USER_LIST_MEDIATOR, notes},
};

pub(crate) struct UserListMediator {
    user_list: Rc<RefCell<UserList>>,
    binding: Binding,
}

impl UserListMediator {
    pub(crate) fn new(user_list: Rc<RefCell<UserList>>) -> Self {
        Self {
            user_list,
            binding: Binding::new(),
        }
    }

    pub(crate) fn handle_action(&self, action: UserListAction) -> Result<()> {
        match action {
            UserListAction::New => self
                .binding
                .send_notification(Notification::new(notes::NEW_USER).with_body(UserVo::default())),

            UserListAction::Select(uname) => self.send_user(notes::USER_SELECTED, &uname),

            UserListAction::Delete(uname) => self.send_user(notes::DELETE_USER, &uname),
        }
    }

    fn send_user(&self, name: &str, uname: &str) -> Result<()> {
        let Some(user) = user_proxy(&self.binding)?.user(uname) else {
            warn!(uname, "Selected user is no longer stored");
            return Ok(());
        };
        self.binding
            .send_notification(Notification::new(name).with_body(user))
    }

    fn refresh(&self) -> Result<()> {
        let users = user_proxy(&self.binding)?.users();
        let mut user_list = self.user_list.borrow_mut();
        user_list.set_users(users);
        user_list.de_select();
        Ok(())
    }
}

impl Mediator for UserListMediator {
    fn mediator_name(&self) -> &str {
        USER_LIST_MEDIATOR
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn list_notification_interests(&self) -> Vec<String> {
        vec![
            notes::CANCEL_SELECTED.into(),
            notes::USER_UPDATED.into(),
            notes::USER_ADDED.into(),
            notes::USER_DELETED.into(),
        ]
    }

    fn handle_notification(&self, note: &Notification) -> Result<()> {
        match note.name() {
            notes::CANCEL_SELECTED => {
                self.user_list.borrow_mut().de_select();
                Ok(())
            }
            notes::USER_UPDATED | notes::USER_ADDED | notes::USER_DELETED => self.refresh(),
            _ => Ok(()),
        }
    }

    fn on_register(&self) {
        if let Err(err) = self.refresh() {
            warn!(%err, "User list registered before the user store");
        }
    }
}
