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

//! Notification to command dispatch.
//!
//! The [`Controller`] maps notification names to [`CommandFactory`]s. For
//! each mapped name it keeps exactly one observer registered with the
//! [`View`]; when that name is broadcast, a new command is built from the
//! current factory, bound to the controller's model and view, and executed.
//!
//! Mapping a name that is already mapped only swaps the factory, so a
//! notification never runs more than one command.

mod command;

pub use command::{Command, CommandFactory, MacroCommand, factory_of};

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use tracing::{debug, trace};

use crate::{Context, Model, Notification, Observer, Result, View};

pub struct Controller {
    commands: RefCell<HashMap<String, CommandFactory>>,
    model: RefCell<Weak<Model>>,
    view: RefCell<Weak<View>>,
    this: Weak<Controller>,
}

impl Controller {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            commands: RefCell::new(HashMap::new()),
            model: RefCell::new(Weak::new()),
            view: RefCell::new(Weak::new()),
            this: this.clone(),
        })
    }

    pub fn model(&self) -> Option<Rc<Model>> {
        self.model.borrow().upgrade()
    }

    pub fn set_model(&self, model: &Rc<Model>) {
        *self.model.borrow_mut() = Rc::downgrade(model);
    }

    pub fn view(&self) -> Option<Rc<View>> {
        self.view.borrow().upgrade()
    }

    /// Sets the view that commands are dispatched from.
    ///
    /// Names mapped before the view was set are subscribed now. Moving to a
    /// different view unsubscribes them from the old one first.
    pub fn set_view(&self, view: &Rc<View>) {
        let previous = self.view.replace(Rc::downgrade(view));
        if Weak::ptr_eq(&previous, &Rc::downgrade(view)) {
            return;
        }

        let names: Vec<String> = self.commands.borrow().keys().cloned().collect();
        if let Some(previous) = previous.upgrade() {
            for name in &names {
                previous.remove_observer(name, self.context());
            }
        }
        for name in names {
            view.register_observer(name, self.observer());
        }
    }

    /// Builds and runs the command mapped to the notification's name.
    ///
    /// Does nothing if no command is mapped.
    pub fn execute_command(&self, note: &Notification) -> Result<()> {
        let factory = self.commands.borrow().get(note.name()).cloned();
        let Some(factory) = factory else {
            return Ok(());
        };

        let command = factory();
        command
            .binding()
            .attach(self.model.borrow().clone(), self.view.borrow().clone());

        trace!(name = note.name(), "Executing command");
        command.execute(note)
    }

    /// Maps `name` to commands of type `C`.
    pub fn register_command<C: Command + Default + 'static>(&self, name: impl Into<String>) {
        self.register_factory(name.into(), factory_of::<C>());
    }

    /// Maps `name` to commands built by `factory`.
    pub fn register_command_with(
        &self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Command> + 'static,
    ) {
        self.register_factory(name.into(), Rc::new(factory));
    }

    fn register_factory(&self, name: String, factory: CommandFactory) {
        let mapped = self.commands.borrow().contains_key(&name);
        if !mapped {
            if let Some(view) = self.view() {
                view.register_observer(name.clone(), self.observer());
            }
        }

        debug!(name = %name, replaced = mapped, "Registered command");
        self.commands.borrow_mut().insert(name, factory);
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.borrow().contains_key(name)
    }

    /// Unmaps `name` and unsubscribes it from the view.
    pub fn remove_command(&self, name: &str) {
        if !self.has_command(name) {
            return;
        }

        if let Some(view) = self.view() {
            view.remove_observer(name, self.context());
        }
        self.commands.borrow_mut().remove(name);

        debug!(name = %name, "Removed command");
    }

    fn context(&self) -> Context {
        Context::of_ref(self)
    }

    fn observer(&self) -> Observer {
        let controller = self.this.clone();
        Observer::new(
            move |note| match controller.upgrade() {
                Some(controller) => controller.execute_command(note),
                None => Ok(()),
            },
            self.context(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{Binding, Notifier};

    thread_local! {
        static EXECUTED: RefCell<Vec<(&'static str, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn executed() -> Vec<(&'static str, String)> {
        EXECUTED.with(|executed| executed.borrow().clone())
    }

    fn reset_executed() {
        EXECUTED.with(|executed| executed.borrow_mut().clear());
    }

    macro_rules! recording_command {
        ($name:ident) => {
            #[derive(Default)]
            struct $name {
                binding: Binding,
            }

            impl Command for $name {
                fn binding(&self) -> &Binding {
                    &self.binding
                }

                fn execute(&self, note: &Notification) -> Result<()> {
                    EXECUTED.with(|executed| {
                        executed
                            .borrow_mut()
                            .push((stringify!($name), note.name().to_owned()))
                    });
                    Ok(())
                }
            }
        };
    }

    recording_command!(CommandA);
    recording_command!(CommandB);

    fn wired() -> (Rc<Model>, Rc<View>, Rc<Controller>) {
        let model = Model::new();
        let view = View::new();
        let controller = Controller::new();
        controller.set_model(&model);
        controller.set_view(&view);
        (model, view, controller)
    }

    #[test]
    fn registered_command_runs_on_its_notification() {
        reset_executed();
        let (_model, view, controller) = wired();
        controller.register_command::<CommandA>("X");

        view.notify_observers(&Notification::new("X")).unwrap();
        view.notify_observers(&Notification::new("Y")).unwrap();

        assert_eq!(executed(), vec![("CommandA", "X".to_owned())]);
    }

    #[test]
    fn re_registering_replaces_without_double_subscribing() {
        reset_executed();
        let (_model, view, controller) = wired();
        controller.register_command::<CommandA>("X");
        controller.register_command::<CommandB>("X");

        view.notify_observers(&Notification::new("X")).unwrap();

        assert_eq!(executed(), vec![("CommandB", "X".to_owned())]);
        assert_eq!(view.observer_count("X"), 1);
    }

    #[test]
    fn removed_command_no_longer_runs() {
        reset_executed();
        let (_model, view, controller) = wired();
        controller.register_command::<CommandA>("X");
        controller.remove_command("X");

        view.notify_observers(&Notification::new("X")).unwrap();

        assert!(executed().is_empty());
        assert!(!controller.has_command("X"));
        assert_eq!(view.observer_count("X"), 0);
    }

    #[test]
    fn remove_unknown_command_is_a_no_op() {
        let (_model, _view, controller) = wired();
        controller.remove_command("missing");
        assert!(!controller.has_command("missing"));
    }

    #[test]
    fn view_set_after_registration_still_dispatches() {
        reset_executed();
        let view = View::new();
        let controller = Controller::new();
        controller.register_command::<CommandA>("X");
        controller.set_view(&view);
        controller.set_view(&view);

        view.notify_observers(&Notification::new("X")).unwrap();

        assert_eq!(executed(), vec![("CommandA", "X".to_owned())]);
        assert_eq!(view.observer_count("X"), 1);
    }

    #[test]
    fn moving_to_another_view_unsubscribes_the_old_one() {
        reset_executed();
        let (_model, old_view, controller) = wired();
        controller.register_command::<CommandA>("X");

        let new_view = View::new();
        controller.set_view(&new_view);

        old_view.notify_observers(&Notification::new("X")).unwrap();
        assert!(executed().is_empty());

        new_view.notify_observers(&Notification::new("X")).unwrap();
        assert_eq!(executed().len(), 1);
    }

    #[derive(Default)]
    struct ForwardingCommand {
        binding: Binding,
    }

    impl Command for ForwardingCommand {
        fn binding(&self) -> &Binding {
            &self.binding
        }

        fn execute(&self, _note: &Notification) -> Result<()> {
            assert!(self.binding.model().is_some());
            self.binding.send_notification(Notification::new("forwarded"))
        }
    }

    #[test]
    fn command_is_bound_and_can_send() {
        reset_executed();
        let (_model, view, controller) = wired();
        controller.register_command::<ForwardingCommand>("X");
        controller.register_command::<CommandA>("forwarded");

        view.notify_observers(&Notification::new("X")).unwrap();

        assert_eq!(executed(), vec![("CommandA", "forwarded".to_owned())]);
    }

    #[test]
    fn factory_closure_builds_a_fresh_command_each_time() {
        let (_model, view, controller) = wired();
        let built = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&built);
        controller.register_command_with("X", move || {
            counter.set(counter.get() + 1);
            Box::new(CommandA::default()) as Box<dyn Command>
        });

        view.notify_observers(&Notification::new("X")).unwrap();
        view.notify_observers(&Notification::new("X")).unwrap();

        assert_eq!(built.get(), 2);
    }
}
