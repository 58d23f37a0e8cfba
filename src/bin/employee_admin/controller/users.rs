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

//! Commands that change users and their roles.

use mediate::{Binding, Command, Notification, Notifier, Result};
use tracing::info;

use crate::{
    model::{RoleAssignment, UserVo, role_proxy, user_proxy},
    names::notes,
};

/// Removes the user in the body, and their roles, then announces it.
#[derive(Default)]
pub(crate) struct DeleteUserCommand {
    binding: Binding,
}

impl Command for DeleteUserCommand {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        let Some(user) = note.body::<UserVo>() else {
            return Ok(());
        };

        info!(uname = %user.uname, "Deleting user");
        user_proxy(&self.binding)?.delete_item(&user.uname);
        role_proxy(&self.binding)?.delete_item(&user.uname);

        self.binding
            .send_notification(Notification::new(notes::USER_DELETED).with_body(user.clone()))
    }
}

/// Grants the role in a [`RoleAssignment`] body.
#[derive(Default)]
pub(crate) struct AddRoleCommand {
    binding: Binding,
}

impl Command for AddRoleCommand {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        match note.body::<RoleAssignment>() {
            Some(assignment) => {
                role_proxy(&self.binding)?.add_role_to_user(&assignment.uname, assignment.role)
            }
            None => Ok(()),
        }
    }
}
