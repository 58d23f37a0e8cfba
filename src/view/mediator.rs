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

use crate::{AsAny, Binding, Notification, Result};

/// Name used by mediators that do not pick their own.
pub const MEDIATOR_NAME: &str = "Mediator";

/// Bridges a view component to the notification bus.
///
/// A mediator declares the notification names it is interested in; the
/// [`View`] subscribes it to each of them when it is registered and
/// unsubscribes it when it is removed. Handlers take `&self`, so a mediator
/// keeps any mutable state behind a `Cell` or `RefCell`.
///
/// [`View`]: crate::View
pub trait Mediator: AsAny {
    fn mediator_name(&self) -> &str {
        MEDIATOR_NAME
    }

    fn binding(&self) -> &Binding;

    fn list_notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    fn handle_notification(&self, note: &Notification) -> Result<()> {
        let _ = note;
        Ok(())
    }

    fn on_register(&self) {}

    fn on_remove(&self) {}
}
