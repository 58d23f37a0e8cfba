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

//! The role store.
//!
//! Holds one [`RoleVo`] per user. Granting a role broadcasts
//! `addRoleResult` with a `bool` body saying whether the role was new.

use std::cell::RefCell;

use mediate::{Binding, Notification, Notifier, Proxy, Result};
use tracing::debug;

use crate::{
    model::{Role, RoleVo},
    names::{notes::ADD_ROLE_RESULT, proxies::ROLE_PROXY},
};

#[derive(Default)]
pub(crate) struct RoleProxy {
    roles: RefCell<Vec<RoleVo>>,
    binding: Binding,
}

impl RoleProxy {
    pub(crate) fn new(roles: Vec<RoleVo>) -> Self {
        Self {
            roles: RefCell::new(roles),
            binding: Binding::new(),
        }
    }

    pub(crate) fn add_item(&self, entry: RoleVo) {
        self.roles.borrow_mut().push(entry);
    }

    pub(crate) fn delete_item(&self, uname: &str) {
        self.roles.borrow_mut().retain(|entry| entry.uname != uname);
    }

    pub(crate) fn does_user_have_role(&self, uname: &str, role: Role) -> bool {
        self.roles
            .borrow()
            .iter()
            .any(|entry| entry.uname == uname && entry.roles.contains(&role))
    }

    /// Grants `role` to `uname` and broadcasts the outcome.
    ///
    /// The role list is released before the broadcast, so handlers are free
    /// to read it back.
    pub(crate) fn add_role_to_user(&self, uname: &str, role: Role) -> Result<()> {
        let added = {
            let mut roles = self.roles.borrow_mut();
            match roles.iter_mut().find(|entry| entry.uname == uname) {
                Some(entry) if !entry.roles.contains(&role) => {
                    entry.roles.push(role);
                    true
                }
                Some(_) => false,
                None => {
                    roles.push(RoleVo::new(uname, vec![role]));
                    true
                }
            }
        };

        debug!(uname, %role, added, "Granting role");
        self.binding
            .send_notification(Notification::new(ADD_ROLE_RESULT).with_body(added))
    }

    pub(crate) fn remove_role_from_user(&self, uname: &str, role: Role) {
        if let Some(entry) = self
            .roles
            .borrow_mut()
            .iter_mut()
            .find(|entry| entry.uname == uname)
        {
            entry.roles.retain(|r| *r != role);
        }
    }

    pub(crate) fn user_roles(&self, uname: &str) -> Vec<Role> {
        self.roles
            .borrow()
            .iter()
            .find(|entry| entry.uname == uname)
            .map(|entry| entry.roles.clone())
            .unwrap_or_default()
    }
}

impl Proxy for RoleProxy {
    fn proxy_name(&self) -> &str {
        ROLE_PROXY
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use mediate::{Error, Facade};

    use super::*;

    #[test]
    fn roles_are_per_user() {
        let proxy = RoleProxy::new(vec![
            RoleVo::new("lstooge", vec![Role::Payroll]),
            RoleVo::new("cstooge", vec![Role::Sales]),
        ]);

        assert!(proxy.does_user_have_role("lstooge", Role::Payroll));
        assert!(!proxy.does_user_have_role("lstooge", Role::Sales));

        proxy.remove_role_from_user("lstooge", Role::Payroll);
        assert!(proxy.user_roles("lstooge").is_empty());

        proxy.delete_item("cstooge");
        assert!(proxy.user_roles("cstooge").is_empty());
    }

    #[test]
    fn granting_a_role_reports_whether_it_was_new() {
        let facade = Facade::new();
        let proxy = Rc::new(RoleProxy::new(vec![RoleVo::new("mstooge", vec![])]));
        facade.register_proxy(proxy.clone());

        let results = Rc::new(RefCell::new(Vec::<bool>::new()));
        let sink = Rc::clone(&results);
        facade.view().register_observer(
            ADD_ROLE_RESULT,
            mediate::Observer::new(
                move |note| {
                    sink.borrow_mut().extend(note.body::<bool>());
                    Ok(())
                },
                mediate::Context::of(&results),
            ),
        );

        proxy.add_role_to_user("mstooge", Role::Shipping).unwrap();
        proxy.add_role_to_user("mstooge", Role::Shipping).unwrap();

        assert_eq!(*results.borrow(), vec![true, false]);
        assert_eq!(proxy.user_roles("mstooge"), vec![Role::Shipping]);
    }

    #[test]
    fn unregistered_proxy_cannot_broadcast() {
        let proxy = RoleProxy::default();
        let err = proxy.add_role_to_user("lstooge", Role::Payroll).unwrap_err();
        assert!(matches!(err, Error::Detached(_)));
        assert_eq!(proxy.user_roles("lstooge"), vec![Role::Payroll]);
    }
}
