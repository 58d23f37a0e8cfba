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

//! The proxy registry.
//!
//! The [`Model`] keeps proxies by name. Registering a proxy under a name that
//! is already taken replaces the previous one without calling its
//! `on_remove` hook.
//!
//! The model also owns an observer registry of its own. Proxies do not
//! notify through it: they reach the [`View`] the model is linked to, which
//! is the registry that mediators and commands subscribe to.

mod proxy;

pub use proxy::{DataProxy, PROXY_NAME, Proxy};

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{AsAny, Context, Notification, Observer, ObserverRegistry, Result, View};

pub struct Model {
    observers: ObserverRegistry,
    proxies: RefCell<HashMap<String, Rc<dyn Proxy>>>,
    view: RefCell<Weak<View>>,
    this: Weak<Model>,
}

impl Model {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            observers: ObserverRegistry::new(),
            proxies: RefCell::new(HashMap::new()),
            view: RefCell::new(Weak::new()),
            this: this.clone(),
        })
    }

    pub fn view(&self) -> Option<Rc<View>> {
        self.view.borrow().upgrade()
    }

    /// Links the view that registered proxies send notifications through.
    pub fn set_view(&self, view: &Rc<View>) {
        *self.view.borrow_mut() = Rc::downgrade(view);
    }

    pub fn register_observer(&self, name: impl Into<String>, observer: Observer) {
        self.observers.register(name, observer);
    }

    pub fn notify_observers(&self, note: &Notification) -> Result<()> {
        self.observers.notify(note)
    }

    pub fn remove_observer(&self, name: &str, context: Context) {
        self.observers.remove(name, context);
    }

    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        let name = proxy.proxy_name().to_owned();
        let replaced = self
            .proxies
            .borrow_mut()
            .insert(name.clone(), Rc::clone(&proxy));
        if replaced.is_some() {
            debug!(proxy = %name, "Replaced registered proxy");
        }

        proxy.binding().attach_model(self.this.clone());
        proxy.on_register();

        debug!(proxy = %name, "Registered proxy");
    }

    /// Returns the proxy registered under `name`, or `None`.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.proxies.borrow().get(name).cloned()
    }

    /// Returns the proxy registered under `name` if it is a `P`.
    pub fn retrieve_proxy_as<P: Proxy>(&self, name: &str) -> Option<Rc<P>> {
        self.retrieve_proxy(name)?.into_any().downcast::<P>().ok()
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxies.borrow().contains_key(name)
    }

    /// Removes and returns the proxy registered under `name`.
    ///
    /// The proxy's `on_remove` hook runs and its binding is cleared before it
    /// is handed back. Unknown names return `None`.
    pub fn remove_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        let proxy = self.proxies.borrow_mut().remove(name)?;

        proxy.on_remove();
        proxy.binding().detach();

        debug!(proxy = %name, "Removed proxy");
        Some(proxy)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{Binding, Notifier};

    #[derive(Default)]
    struct CountingProxy {
        name: &'static str,
        binding: Binding,
        registered: Cell<u32>,
        removed: Cell<u32>,
    }

    impl Proxy for CountingProxy {
        fn proxy_name(&self) -> &str {
            self.name
        }

        fn binding(&self) -> &Binding {
            &self.binding
        }

        fn on_register(&self) {
            self.registered.set(self.registered.get() + 1);
        }

        fn on_remove(&self) {
            self.removed.set(self.removed.get() + 1);
        }
    }

    fn proxy(name: &'static str) -> Rc<CountingProxy> {
        Rc::new(CountingProxy {
            name,
            ..Default::default()
        })
    }

    #[test]
    fn register_sets_back_reference_and_calls_hook() {
        let model = Model::new();
        let p = proxy("P");
        model.register_proxy(p.clone());

        assert_eq!(p.registered.get(), 1);
        assert!(Rc::ptr_eq(&p.binding.model().unwrap(), &model));
        assert!(model.has_proxy("P"));
    }

    #[test]
    fn register_overwrites_existing_name() {
        let model = Model::new();
        let first = proxy("P");
        let second = proxy("P");

        model.register_proxy(first.clone());
        model.register_proxy(second.clone());

        let found = model.retrieve_proxy_as::<CountingProxy>("P").unwrap();
        assert!(Rc::ptr_eq(&found, &second));
        assert_eq!(first.removed.get(), 0);
    }

    #[test]
    fn remove_returns_instance_and_clears_binding() {
        let model = Model::new();
        let p = proxy("P");
        model.register_proxy(p.clone());

        let removed = model.remove_proxy("P").unwrap();
        let removed = removed.into_any().downcast::<CountingProxy>().ok().unwrap();

        assert!(Rc::ptr_eq(&removed, &p));
        assert_eq!(p.removed.get(), 1);
        assert!(p.binding.model().is_none());
        assert!(model.retrieve_proxy("P").is_none());
    }

    #[test]
    fn remove_unknown_is_none() {
        let model = Model::new();
        assert!(model.remove_proxy("missing").is_none());
        assert!(!model.has_proxy("missing"));
    }

    #[test]
    fn retrieve_as_wrong_type_is_none() {
        let model = Model::new();
        model.register_proxy(Rc::new(DataProxy::new("P", 1_u32)));

        assert!(model.retrieve_proxy_as::<DataProxy<String>>("P").is_none());
        assert!(model.retrieve_proxy_as::<DataProxy<u32>>("P").is_some());
    }

    #[test]
    fn proxy_notifies_through_the_linked_view() {
        let model = Model::new();
        let view = View::new();
        model.set_view(&view);

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        view.register_observer(
            "changed",
            Observer::new(
                move |_| {
                    counter.set(counter.get() + 1);
                    Ok(())
                },
                Context::of(&hits),
            ),
        );

        let p = proxy("P");
        model.register_proxy(p.clone());
        p.binding.send_notification(Notification::new("changed")).unwrap();

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn own_registry_is_independent_of_the_view() {
        let model = Model::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        model.register_observer(
            "A",
            Observer::new(
                move |_| {
                    counter.set(counter.get() + 1);
                    Ok(())
                },
                Context::of(&hits),
            ),
        );

        model.notify_observers(&Notification::new("A")).unwrap();
        model.remove_observer("A", Context::of(&hits));
        model.notify_observers(&Notification::new("A")).unwrap();

        assert_eq!(hits.get(), 1);
    }
}
