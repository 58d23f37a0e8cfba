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

//! The mediator registry and the main notification bus.
//!
//! Every notification sent through the [`Facade`](crate::Facade) is
//! broadcast by the [`View`]'s observer registry. Mediators subscribe to it
//! when registered, and the [`Controller`](crate::Controller) subscribes to
//! it once for each notification name it has a command for.
//!
//! # Invariants
//!
//! 1. A mediator name is registered at most once. Registering a second
//!    mediator under a taken name is ignored; the first one stays.
//! 2. A registered mediator has exactly one observer per declared interest,
//!    all sharing the mediator as their context.
//! 3. Removing a mediator removes those observers, so it receives nothing
//!    further.

mod mediator;

pub use mediator::{MEDIATOR_NAME, Mediator};

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{AsAny, Context, Model, Notification, Observer, ObserverRegistry, Result};

pub struct View {
    observers: ObserverRegistry,
    mediators: RefCell<HashMap<String, Rc<dyn Mediator>>>,
    model: RefCell<Weak<Model>>,
    this: Weak<View>,
}

impl View {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            observers: ObserverRegistry::new(),
            mediators: RefCell::new(HashMap::new()),
            model: RefCell::new(Weak::new()),
            this: this.clone(),
        })
    }

    pub fn model(&self) -> Option<Rc<Model>> {
        self.model.borrow().upgrade()
    }

    /// Sets the model handed to mediators registered from now on.
    pub fn set_model(&self, model: &Rc<Model>) {
        *self.model.borrow_mut() = Rc::downgrade(model);
    }

    pub fn register_observer(&self, name: impl Into<String>, observer: Observer) {
        self.observers.register(name, observer);
    }

    /// Broadcasts `note` to every observer registered for its name.
    pub fn notify_observers(&self, note: &Notification) -> Result<()> {
        self.observers.notify(note)
    }

    pub fn remove_observer(&self, name: &str, context: Context) {
        self.observers.remove(name, context);
    }

    /// Number of observers currently registered for `name`.
    pub fn observer_count(&self, name: &str) -> usize {
        self.observers.observer_count(name)
    }

    /// Registers `mediator` and subscribes it to its notification interests.
    ///
    /// Does nothing if a mediator with the same name is already registered.
    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        let name = mediator.mediator_name().to_owned();
        {
            let mut mediators = self.mediators.borrow_mut();
            if mediators.contains_key(&name) {
                debug!(mediator = %name, "Mediator already registered, ignoring");
                return;
            }
            mediators.insert(name.clone(), Rc::clone(&mediator));
        }

        let interests = mediator.list_notification_interests();
        if !interests.is_empty() {
            let target = Rc::clone(&mediator);
            let observer = Observer::new(
                move |note| target.handle_notification(note),
                Context::of(&mediator),
            );
            for interest in interests {
                self.register_observer(interest, observer.clone());
            }
        }

        mediator
            .binding()
            .attach(self.model.borrow().clone(), self.this.clone());
        mediator.on_register();

        debug!(mediator = %name, "Registered mediator");
    }

    /// Returns the mediator registered under `name`, or `None`.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.mediators.borrow().get(name).cloned()
    }

    /// Returns the mediator registered under `name` if it is an `M`.
    pub fn retrieve_mediator_as<M: Mediator>(&self, name: &str) -> Option<Rc<M>> {
        self.retrieve_mediator(name)?.into_any().downcast::<M>().ok()
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediators.borrow().contains_key(name)
    }

    /// Removes and returns the mediator registered under `name`.
    ///
    /// The mediator is unsubscribed from every interest, its `on_remove`
    /// hook runs and its binding is cleared. Unknown names return `None`.
    pub fn remove_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        let mediator = self.retrieve_mediator(name)?;

        let context = Context::of(&mediator);
        for interest in mediator.list_notification_interests().iter().rev() {
            self.remove_observer(interest, context);
        }

        self.mediators.borrow_mut().remove(name);
        mediator.on_remove();
        mediator.binding().detach();

        debug!(mediator = %name, "Removed mediator");
        Some(mediator)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::{Binding, Notifier};

    #[derive(Default)]
    struct RecordingMediator {
        name: String,
        interests: Vec<String>,
        binding: Binding,
        received: RefCell<Vec<String>>,
        registered: Cell<u32>,
        removed: Cell<u32>,
    }

    impl RecordingMediator {
        fn new(name: &str, interests: &[&str]) -> Rc<Self> {
            Rc::new(Self {
                name: name.to_owned(),
                interests: interests.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            })
        }
    }

    impl Mediator for RecordingMediator {
        fn mediator_name(&self) -> &str {
            &self.name
        }

        fn binding(&self) -> &Binding {
            &self.binding
        }

        fn list_notification_interests(&self) -> Vec<String> {
            self.interests.clone()
        }

        fn handle_notification(&self, note: &Notification) -> Result<()> {
            self.received.borrow_mut().push(note.name().to_owned());
            Ok(())
        }

        fn on_register(&self) {
            self.registered.set(self.registered.get() + 1);
        }

        fn on_remove(&self) {
            self.removed.set(self.removed.get() + 1);
        }
    }

    #[test]
    fn registered_mediator_receives_its_interests_only() {
        let view = View::new();
        let m = RecordingMediator::new("M", &["A", "B"]);
        view.register_mediator(m.clone());

        for name in ["A", "C", "B"] {
            view.notify_observers(&Notification::new(name)).unwrap();
        }

        assert_eq!(*m.received.borrow(), vec!["A", "B"]);
        assert_eq!(m.registered.get(), 1);
    }

    #[test]
    fn second_registration_under_a_name_is_ignored() {
        let view = View::new();
        let first = RecordingMediator::new("M", &["A"]);
        let second = RecordingMediator::new("M", &["A"]);

        view.register_mediator(first.clone());
        view.register_mediator(second.clone());

        let found = view.retrieve_mediator_as::<RecordingMediator>("M").unwrap();
        assert!(Rc::ptr_eq(&found, &first));
        assert!(view.has_mediator("M"));
        assert_eq!(second.registered.get(), 0);

        view.notify_observers(&Notification::new("A")).unwrap();
        assert_eq!(first.received.borrow().len(), 1);
        assert!(second.received.borrow().is_empty());
    }

    #[test]
    fn register_attaches_model_and_view() {
        let model = Model::new();
        let view = View::new();
        view.set_model(&model);

        let m = RecordingMediator::new("M", &[]);
        view.register_mediator(m.clone());

        assert!(Rc::ptr_eq(&m.binding.model().unwrap(), &model));
        assert!(Rc::ptr_eq(&m.binding.view().unwrap(), &view));
    }

    #[test]
    fn removed_mediator_is_unsubscribed_and_detached() {
        let view = View::new();
        let m = RecordingMediator::new("M", &["A", "B"]);
        view.register_mediator(m.clone());

        let removed = view.remove_mediator("M").unwrap();
        assert_eq!(Context::of(&removed), Context::of(&m));
        assert_eq!(m.removed.get(), 1);
        assert!(!m.binding.is_attached());
        assert!(view.retrieve_mediator("M").is_none());

        view.notify_observers(&Notification::new("A")).unwrap();
        view.notify_observers(&Notification::new("B")).unwrap();
        assert!(m.received.borrow().is_empty());
    }

    #[test]
    fn removing_a_mediator_leaves_other_subscribers_alone() {
        let view = View::new();
        let a = RecordingMediator::new("first", &["A"]);
        let b = RecordingMediator::new("second", &["A"]);
        view.register_mediator(a.clone());
        view.register_mediator(b.clone());

        view.remove_mediator("first");
        view.notify_observers(&Notification::new("A")).unwrap();

        assert!(a.received.borrow().is_empty());
        assert_eq!(*b.received.borrow(), vec!["A"]);
    }

    #[test]
    fn remove_unknown_mediator_is_none() {
        let view = View::new();
        assert!(view.remove_mediator("missing").is_none());
    }

    #[test]
    fn mediator_without_interests_adds_no_observers() {
        let view = View::new();
        view.register_mediator(RecordingMediator::new("M", &[]));
        assert!(view.observers.is_empty());
    }

    struct SelfRemovingMediator {
        binding: Binding,
        calls: Cell<u32>,
    }

    impl Mediator for SelfRemovingMediator {
        fn mediator_name(&self) -> &str {
            "self-removing"
        }

        fn binding(&self) -> &Binding {
            &self.binding
        }

        fn list_notification_interests(&self) -> Vec<String> {
            vec!["A".into()]
        }

        fn handle_notification(&self, _note: &Notification) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if let Some(view) = self.binding.view() {
                view.remove_mediator(self.mediator_name());
            }
            Ok(())
        }
    }

    #[test]
    fn mediator_can_remove_itself_while_handling() {
        let view = View::new();
        let leaving = Rc::new(SelfRemovingMediator {
            binding: Binding::new(),
            calls: Cell::new(0),
        });
        let staying = RecordingMediator::new("staying", &["A"]);

        view.register_mediator(leaving.clone());
        view.register_mediator(staying.clone());

        view.notify_observers(&Notification::new("A")).unwrap();
        view.notify_observers(&Notification::new("A")).unwrap();

        assert_eq!(leaving.calls.get(), 1);
        assert_eq!(staying.received.borrow().len(), 2);
    }

    #[test]
    fn mediator_can_send_from_its_handler() {
        let view = View::new();
        let echo = Rc::new(EchoMediator::default());
        let listener = RecordingMediator::new("listener", &["ping", "pong"]);

        view.register_mediator(listener.clone());
        view.register_mediator(echo.clone());

        view.notify_observers(&Notification::new("ping")).unwrap();
        assert_eq!(*listener.received.borrow(), vec!["ping", "pong"]);
    }

    #[derive(Default)]
    struct EchoMediator {
        binding: Binding,
    }

    impl Mediator for EchoMediator {
        fn mediator_name(&self) -> &str {
            "echo"
        }

        fn binding(&self) -> &Binding {
            &self.binding
        }

        fn list_notification_interests(&self) -> Vec<String> {
            vec!["ping".into()]
        }

        fn handle_notification(&self, _note: &Notification) -> Result<()> {
            self.binding.send_notification(Notification::new("pong"))
        }
    }
}
