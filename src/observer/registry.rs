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

//! Notification name to observer list mapping.
//!
//! # Invariants
//!
//! 1. Observers for a name are notified in registration order.
//! 2. A broadcast works on a snapshot of the list taken before the first
//!    callback runs. Registrations and removals made by a callback apply to
//!    the next broadcast, never the current one.
//! 3. A name with no observers has no entry.

use std::{cell::RefCell, collections::HashMap};

use tracing::trace;

use crate::{
    Notification, Result,
    observer::{Context, Observer},
};

#[derive(Default)]
pub struct ObserverRegistry {
    observers: RefCell<HashMap<String, Vec<Observer>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer` to the list for `name`.
    ///
    /// No de-duplication is done; registering the same context twice under
    /// one name means it is notified twice.
    pub fn register(&self, name: impl Into<String>, observer: Observer) {
        self.observers
            .borrow_mut()
            .entry(name.into())
            .or_default()
            .push(observer);
    }

    /// Notifies every observer registered for the notification's name.
    ///
    /// The first observer to fail stops the broadcast and its error is
    /// returned. Unknown names are ignored.
    pub fn notify(&self, note: &Notification) -> Result<()> {
        let snapshot = match self.observers.borrow().get(note.name()) {
            Some(observers) => observers.clone(),
            None => return Ok(()),
        };

        trace!(name = note.name(), observers = snapshot.len(), "Broadcasting notification");

        for observer in &snapshot {
            observer.notify_observer(note)?;
        }
        Ok(())
    }

    /// Removes the most recently registered observer for `name` owned by
    /// `context`.
    ///
    /// At most one observer is removed. Unknown names and contexts are
    /// ignored.
    pub fn remove(&self, name: &str, context: Context) {
        let removed = {
            let mut observers = self.observers.borrow_mut();
            let Some(list) = observers.get_mut(name) else {
                return;
            };

            let removed = list
                .iter()
                .rposition(|observer| observer.compare_notify_context(context))
                .map(|index| list.remove(index));

            if list.is_empty() {
                observers.remove(name);
            }
            removed
        };

        // Dropped outside the borrow: the callback may hold the last handle
        // to its owner.
        drop(removed);
    }

    pub fn has_observers(&self, name: &str) -> bool {
        self.observers.borrow().contains_key(name)
    }

    pub fn observer_count(&self, name: &str) -> usize {
        self.observers.borrow().get(name).map_or(0, Vec::len)
    }

    /// Number of names with at least one observer.
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}
