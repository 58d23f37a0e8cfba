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

//! The user store.

use std::cell::RefCell;

use mediate::{Binding, Proxy};
use tracing::debug;

use crate::{model::UserVo, names::proxies::USER_PROXY};

#[derive(Default)]
pub(crate) struct UserProxy {
    users: RefCell<Vec<UserVo>>,
    binding: Binding,
}

impl UserProxy {
    pub(crate) fn new(users: Vec<UserVo>) -> Self {
        Self {
            users: RefCell::new(users),
            binding: Binding::new(),
        }
    }

    pub(crate) fn users(&self) -> Vec<UserVo> {
        self.users.borrow().clone()
    }

    pub(crate) fn user(&self, uname: &str) -> Option<UserVo> {
        self.users
            .borrow()
            .iter()
            .find(|user| user.uname == uname)
            .cloned()
    }

    pub(crate) fn add_item(&self, user: UserVo) {
        debug!(uname = %user.uname, "Adding user");
        self.users.borrow_mut().push(user);
    }

    /// Replaces the stored user with the same user name, if there is one.
    pub(crate) fn update_item(&self, user: UserVo) -> bool {
        let mut users = self.users.borrow_mut();
        match users.iter_mut().find(|u| u.uname == user.uname) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    pub(crate) fn delete_item(&self, uname: &str) -> bool {
        let mut users = self.users.borrow_mut();
        let before = users.len();
        users.retain(|user| user.uname != uname);
        before != users.len()
    }
}

impl Proxy for UserProxy {
    fn proxy_name(&self) -> &str {
        USER_PROXY
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }
}
