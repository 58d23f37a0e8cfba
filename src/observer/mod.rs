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

//! Observers and the registry that broadcasts to them.
//!
//! An [`Observer`] pairs a callback with the identity of the object that owns
//! it (its [`Context`]). Two observers are equal when they share a context,
//! regardless of the callback, which is what lets an owner unsubscribe
//! without keeping hold of the observer it registered.

mod registry;

pub use registry::ObserverRegistry;

use std::{fmt, rc::Rc};

use crate::{Notification, Result};

/// Identity of an observer's owner.
///
/// This is the address of the owning value and is only compared, never
/// dereferenced. It stays meaningful for as long as the owner is alive, which
/// the registries guarantee by holding the owner (or a handle to it) for as
/// long as its observers are registered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context(*const ());

impl Context {
    /// The identity of a shared value.
    pub fn of<T: ?Sized>(owner: &Rc<T>) -> Self {
        Self(Rc::as_ptr(owner).cast::<()>())
    }

    /// The identity of a borrowed value.
    ///
    /// For a value living inside an `Rc` this is the same as
    /// [`Context::of`] on that `Rc`.
    pub fn of_ref<T: ?Sized>(owner: &T) -> Self {
        Self((owner as *const T).cast::<()>())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context({:p})", self.0)
    }
}

type NotifyFn = dyn Fn(&Notification) -> Result<()>;

/// A callback bound to the context that owns it.
///
/// Cloning an observer shares the callback.
#[derive(Clone)]
pub struct Observer {
    notify: Rc<NotifyFn>,
    context: Context,
}

impl Observer {
    pub fn new(notify: impl Fn(&Notification) -> Result<()> + 'static, context: Context) -> Self {
        Self {
            notify: Rc::new(notify),
            context,
        }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    pub fn notify_observer(&self, note: &Notification) -> Result<()> {
        (self.notify)(note)
    }

    pub fn compare_notify_context(&self, context: Context) -> bool {
        self.context == context
    }
}

impl PartialEq for Observer {
    fn eq(&self, other: &Self) -> bool {
        self.compare_notify_context(other.context)
    }
}

impl Eq for Observer {}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
