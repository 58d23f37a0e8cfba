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

//! Application startup.
//!
//! The `startup` notification carries a [`StartupBody`]. The model is
//! prepared first so the mediators can read the stores when they register.

use std::rc::Rc;

use anyhow::anyhow;
use mediate::{Binding, Command, Error, MacroCommand, Notification, Result};
use tracing::info;

use crate::{
    components::Panels,
    model::{RoleProxy, UserProxy, demo_roles, demo_users},
    view::{RolePanelMediator, UserFormMediator, UserListMediator},
};

pub(crate) struct StartupBody {
    pub(crate) panels: Panels,
    pub(crate) seed_demo_data: bool,
}

fn startup_body(note: &Notification) -> Result<&StartupBody> {
    note.body::<StartupBody>()
        .ok_or_else(|| Error::from(anyhow!("{} carries no startup body", note.name())))
}

pub(crate) struct StartupCommand(MacroCommand);

impl Default for StartupCommand {
    fn default() -> Self {
        Self(
            MacroCommand::new()
                .with_sub_command::<PrepareModelCommand>()
                .with_sub_command::<PrepareViewCommand>(),
        )
    }
}

impl Command for StartupCommand {
    fn binding(&self) -> &Binding {
        self.0.binding()
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        self.0.execute(note)?;
        info!("Startup complete");
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct PrepareModelCommand {
    binding: Binding,
}

impl Command for PrepareModelCommand {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        let body = startup_body(note)?;
        let model = self
            .binding
            .model()
            .ok_or(Error::Detached("PrepareModelCommand"))?;

        let (users, roles) = if body.seed_demo_data {
            (demo_users(), demo_roles())
        } else {
            (vec![], vec![])
        };
        info!(users = users.len(), "Preparing model");

        model.register_proxy(Rc::new(UserProxy::new(users)));
        model.register_proxy(Rc::new(RoleProxy::new(roles)));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct PrepareViewCommand {
    binding: Binding,
}

impl Command for PrepareViewCommand {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        let panels = &startup_body(note)?.panels;
        let view = self
            .binding
            .view()
            .ok_or(Error::Detached("PrepareViewCommand"))?;

        view.register_mediator(Rc::new(UserListMediator::new(Rc::clone(&panels.user_list))));
        view.register_mediator(Rc::new(UserFormMediator::new(Rc::clone(&panels.user_form))));
        view.register_mediator(Rc::new(RolePanelMediator::new(Rc::clone(&panels.role_panel))));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_prepared_before_the_view() {
        let command = StartupCommand::default();
        assert_eq!(command.0.sub_command_count(), 2);
        assert!(!command.binding().is_attached());
    }

    #[test]
    fn preparing_outside_a_controller_is_detached() {
        let note = Notification::new("startup").with_body(StartupBody {
            panels: Panels::new(),
            seed_demo_data: true,
        });
        let err = PrepareModelCommand::default().execute(&note).unwrap_err();
        assert!(matches!(err, Error::Detached("PrepareModelCommand")));
    }
}
