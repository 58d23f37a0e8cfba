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

//! The single entry point for application code.
//!
//! A [`Facade`] owns one [`Model`], one [`View`] and one [`Controller`].
//! Each is created the first time it is needed and linked to whichever of
//! the other two already exist, so the order in which they come into being
//! does not matter.

use std::{cell::OnceCell, rc::Rc};

use crate::{
    Command, Controller, Mediator, Model, Notification, Notifier, Proxy, Result, View,
};

#[derive(Default)]
pub struct Facade {
    model: OnceCell<Rc<Model>>,
    view: OnceCell<Rc<View>>,
    controller: OnceCell<Rc<Controller>>,
}

impl Facade {
    /// Creates a facade with its model, view and controller in place.
    pub fn new() -> Self {
        let facade = Self::default();
        facade.model();
        facade.view();
        facade.controller();
        facade
    }

    pub fn model(&self) -> &Rc<Model> {
        self.model.get_or_init(|| {
            let model = Model::new();
            if let Some(view) = self.view.get() {
                model.set_view(view);
                view.set_model(&model);
            }
            if let Some(controller) = self.controller.get() {
                controller.set_model(&model);
            }
            model
        })
    }

    pub fn view(&self) -> &Rc<View> {
        self.view.get_or_init(|| {
            let view = View::new();
            if let Some(model) = self.model.get() {
                view.set_model(model);
                model.set_view(&view);
            }
            if let Some(controller) = self.controller.get() {
                controller.set_view(&view);
            }
            view
        })
    }

    pub fn controller(&self) -> &Rc<Controller> {
        self.controller.get_or_init(|| {
            let controller = Controller::new();
            if let Some(view) = self.view.get() {
                controller.set_view(view);
            }
            if let Some(model) = self.model.get() {
                controller.set_model(model);
            }
            controller
        })
    }

    pub fn register_command<C: Command + Default + 'static>(&self, name: impl Into<String>) {
        self.controller().register_command::<C>(name);
    }

    pub fn register_command_with(
        &self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Command> + 'static,
    ) {
        self.controller().register_command_with(name, factory);
    }

    pub fn remove_command(&self, name: &str) {
        self.controller().remove_command(name);
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.controller().has_command(name)
    }

    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        self.model().register_proxy(proxy);
    }

    pub fn retrieve_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.model().retrieve_proxy(name)
    }

    pub fn retrieve_proxy_as<P: Proxy>(&self, name: &str) -> Option<Rc<P>> {
        self.model().retrieve_proxy_as::<P>(name)
    }

    pub fn remove_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.model().remove_proxy(name)
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.model().has_proxy(name)
    }

    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        self.view().register_mediator(mediator);
    }

    pub fn retrieve_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.view().retrieve_mediator(name)
    }

    pub fn retrieve_mediator_as<M: Mediator>(&self, name: &str) -> Option<Rc<M>> {
        self.view().retrieve_mediator_as::<M>(name)
    }

    pub fn remove_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.view().remove_mediator(name)
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.view().has_mediator(name)
    }

    /// Broadcasts a notification through the view.
    ///
    /// Accepts a bare name as well as a built [`Notification`]:
    ///
    /// ```
    /// use mediate::{Facade, Notification};
    ///
    /// let facade = Facade::new();
    /// facade.send_notification("startup").unwrap();
    /// facade
    ///     .send_notification(Notification::new("userAdded").with_body(7_u32).with_kind("edit"))
    ///     .unwrap();
    /// ```
    pub fn send_notification(&self, note: impl Into<Notification>) -> Result<()> {
        self.view().notify_observers(&note.into())
    }
}

impl Notifier for Facade {
    fn send_notification(&self, note: Notification) -> Result<()> {
        self.view().notify_observers(&note)
    }
}
