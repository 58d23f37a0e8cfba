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

//! Application commands and facade wiring.

mod startup;
mod users;

pub(crate) use startup::{StartupBody, StartupCommand};
pub(crate) use users::{AddRoleCommand, DeleteUserCommand};

use mediate::{Facade, Notification, Result};

use crate::{components::Panels, names::notes};

/// A facade with every application command mapped.
pub(crate) fn application_facade() -> Facade {
    let facade = Facade::new();
    facade.register_command::<StartupCommand>(notes::STARTUP);
    facade.register_command::<DeleteUserCommand>(notes::DELETE_USER);
    facade.register_command::<AddRoleCommand>(notes::ADD_ROLE);
    facade
}

/// Registers the proxies and mediators for `panels`.
pub(crate) fn startup(facade: &Facade, panels: Panels, seed_demo_data: bool) -> Result<()> {
    facade.send_notification(Notification::new(notes::STARTUP).with_body(StartupBody {
        panels,
        seed_demo_data,
    }))
}
