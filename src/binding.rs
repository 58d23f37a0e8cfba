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

//! Back-references injected into mediators, proxies and commands.
//!
//! Participants embed a [`Binding`] and hand it out from their `binding()`
//! method. The framework fills it in when the participant is registered (or,
//! for commands, constructed) and clears it on removal. References are weak:
//! a participant never keeps the model or view alive.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{Error, Model, Notification, Result, View};

/// Something that can send notifications.
///
/// The provided method fails with [`Error::Abstract`]; implementors that can
/// actually reach a view override it.
pub trait Notifier {
    fn send_notification(&self, note: Notification) -> Result<()> {
        let _ = note;
        Err(Error::Abstract("Notifier::send_notification"))
    }
}

#[derive(Default)]
pub struct Binding {
    model: RefCell<Weak<Model>>,
    view: RefCell<Weak<View>>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<Rc<Model>> {
        self.model.borrow().upgrade()
    }

    /// The view this participant notifies through.
    ///
    /// Proxies are only given a model; they reach the view the model is
    /// linked to.
    pub fn view(&self) -> Option<Rc<View>> {
        self.view
            .borrow()
            .upgrade()
            .or_else(|| self.model()?.view())
    }

    pub fn is_attached(&self) -> bool {
        self.model().is_some() || self.view().is_some()
    }

    pub(crate) fn attach(&self, model: Weak<Model>, view: Weak<View>) {
        *self.model.borrow_mut() = model;
        *self.view.borrow_mut() = view;
    }

    pub(crate) fn attach_model(&self, model: Weak<Model>) {
        *self.model.borrow_mut() = model;
    }

    /// Copies another binding's references, as a macro command does for its
    /// sub-commands.
    pub(crate) fn inherit(&self, other: &Binding) {
        self.attach(other.model.borrow().clone(), other.view.borrow().clone());
    }

    pub(crate) fn detach(&self) {
        self.attach(Weak::new(), Weak::new());
    }
}

impl Notifier for Binding {
    fn send_notification(&self, note: Notification) -> Result<()> {
        let view = self.view().ok_or(Error::Detached("notifier"))?;
        view.notify_observers(&note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Notifier for Bare {}

    #[test]
    fn bare_notifier_fails_loudly() {
        let err = Bare.send_notification(Notification::new("A")).unwrap_err();
        assert!(matches!(err, Error::Abstract("Notifier::send_notification")));
    }

    #[test]
    fn detached_binding_cannot_notify() {
        let binding = Binding::new();
        assert!(!binding.is_attached());

        let err = binding.send_notification(Notification::new("A")).unwrap_err();
        assert!(matches!(err, Error::Detached(_)));
    }

    #[test]
    fn model_only_binding_reaches_the_linked_view() {
        let model = Model::new();
        let view = View::new();
        model.set_view(&view);

        let binding = Binding::new();
        binding.attach_model(Rc::downgrade(&model));

        let reached = binding.view().unwrap();
        assert!(Rc::ptr_eq(&reached, &view));
    }

    #[test]
    fn references_do_not_keep_components_alive() {
        let binding = Binding::new();
        {
            let view = View::new();
            binding.attach(Weak::new(), Rc::downgrade(&view));
            assert!(binding.view().is_some());
        }
        assert!(binding.view().is_none());
    }
}
