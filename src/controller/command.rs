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

//! Commands and command factories.
//!
//! A command is built fresh for every notification it handles, given the
//! controller's model and view through its [`Binding`], executed once and
//! dropped. Nothing carries over from one execution to the next.

use std::rc::Rc;

use crate::{Binding, Error, Notification, Result};

pub trait Command {
    fn binding(&self) -> &Binding;

    /// Runs the command.
    ///
    /// The provided implementation fails with [`Error::Abstract`].
    fn execute(&self, note: &Notification) -> Result<()> {
        let _ = note;
        Err(Error::Abstract("Command::execute"))
    }
}

/// Builds a new command instance.
pub type CommandFactory = Rc<dyn Fn() -> Box<dyn Command>>;

/// A factory for any default-constructible command.
pub fn factory_of<C: Command + Default + 'static>() -> CommandFactory {
    Rc::new(|| Box::new(C::default()) as Box<dyn Command>)
}

/// Runs a fixed sequence of sub-commands.
///
/// Each sub-command is built when the macro command executes, handed the
/// macro command's model and view, and run with the same notification, in
/// the order it was added. The first sub-command to fail stops the sequence
/// and its error is returned; later sub-commands do not run.
#[derive(Default)]
pub struct MacroCommand {
    sub_commands: Vec<CommandFactory>,
    binding: Binding,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sub_command<C: Command + Default + 'static>(&mut self) {
        self.sub_commands.push(factory_of::<C>());
    }

    pub fn add_sub_command_with(&mut self, factory: impl Fn() -> Box<dyn Command> + 'static) {
        self.sub_commands.push(Rc::new(factory));
    }

    /// Builder form of [`MacroCommand::add_sub_command`].
    pub fn with_sub_command<C: Command + Default + 'static>(mut self) -> Self {
        self.add_sub_command::<C>();
        self
    }

    pub fn sub_command_count(&self) -> usize {
        self.sub_commands.len()
    }
}

impl Command for MacroCommand {
    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn execute(&self, note: &Notification) -> Result<()> {
        for factory in &self.sub_commands {
            let command = factory();
            command.binding().inherit(&self.binding);
            command.execute(note)?;
        }
        Ok(())
    }
}
