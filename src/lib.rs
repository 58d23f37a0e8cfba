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

//! # Mediate.
//!
//! A small Model-View-Controller notification framework.
//!
//! Application code talks to a single [`Facade`], which composes three
//! collaborating registries:
//!
//! * The **[`Model`]** holds named [`Proxy`] instances, each owning a slice of
//!   application data.
//! * The **[`View`]** holds named [`Mediator`] instances and the observer
//!   registry that every notification is broadcast through.
//! * The **[`Controller`]** maps notification names to [`Command`] factories
//!   and runs a fresh command each time a matching notification is sent.
//!
//! ## Dispatch
//!
//! Everything is single-threaded and synchronous. Sending a [`Notification`]
//! invokes every interested [`Observer`] before returning, in registration
//! order. A handler may send further notifications, which run to completion
//! before the outer broadcast continues. The list of observers is
//! snapshotted before a broadcast starts, so handlers are free to register or
//! remove observers (including themselves) while being notified.
//!
//! Shared ownership uses `Rc`, back-references use `Weak`, and every registry
//! uses interior mutability so that all operations take `&self`. None of the
//! types here are `Send`; confine a facade to the thread that created it.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use mediate::{DataProxy, Facade};
//!
//! let facade = Facade::new();
//! facade.register_proxy(Rc::new(DataProxy::new("settings", 42_u32)));
//!
//! let settings = facade.retrieve_proxy_as::<DataProxy<u32>>("settings").unwrap();
//! assert_eq!(settings.data(), 42);
//! ```

pub mod binding;
pub mod controller;
pub mod error;
pub mod facade;
pub mod model;
pub mod notification;
pub mod observer;
pub mod view;

pub use binding::{Binding, Notifier};
pub use controller::{Command, CommandFactory, Controller, MacroCommand};
pub use error::{Error, Result};
pub use facade::Facade;
pub use model::{DataProxy, Model, PROXY_NAME, Proxy};
pub use notification::{Body, Notification};
pub use observer::{Context, Observer, ObserverRegistry};
pub use view::{MEDIATOR_NAME, Mediator, View};

use std::{any::Any, rc::Rc};

/// Upcast support for shared trait objects.
///
/// Registries store `Rc<dyn Mediator>` and `Rc<dyn Proxy>`; this lets callers
/// get the concrete type back with [`Rc::downcast`]. It is implemented for
/// every `'static` type, so participants never implement it by hand.
pub trait AsAny: Any {
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
