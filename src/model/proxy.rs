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

//! The proxy contract and a ready-made data proxy.

use std::cell::RefCell;

use crate::{AsAny, Binding};

/// Name used by proxies that do not pick their own.
pub const PROXY_NAME: &str = "Proxy";

/// A named holder of application data, registered with the [`Model`].
///
/// Proxies notify through their binding; once registered it reaches the view
/// the model is linked to.
///
/// [`Model`]: crate::Model
pub trait Proxy: AsAny {
    fn proxy_name(&self) -> &str {
        PROXY_NAME
    }

    fn binding(&self) -> &Binding;

    fn on_register(&self) {}

    fn on_remove(&self) {}
}

/// A proxy that simply owns a value of type `T`.
pub struct DataProxy<T> {
    name: String,
    data: RefCell<T>,
    binding: Binding,
}

impl<T: 'static> DataProxy<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            data: RefCell::new(data),
            binding: Binding::new(),
        }
    }

    /// A proxy registered under [`PROXY_NAME`].
    pub fn unnamed(data: T) -> Self {
        Self::new(PROXY_NAME, data)
    }

    pub fn data(&self) -> T
    where
        T: Clone,
    {
        self.data.borrow().clone()
    }

    /// Access the data by reference without cloning.
    pub fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.data.borrow())
    }

    pub fn set_data(&self, data: T) {
        *self.data.borrow_mut() = data;
    }

    /// Modify the data in place.
    pub fn update_data<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.data.borrow_mut())
    }
}

impl<T: 'static> Proxy for DataProxy<T> {
    fn proxy_name(&self) -> &str {
        &self.name
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_proxy_uses_the_default_name() {
        let proxy = DataProxy::unnamed(1_u8);
        assert_eq!(proxy.proxy_name(), PROXY_NAME);
    }

    #[test]
    fn data_can_be_replaced_and_updated() {
        let proxy = DataProxy::new("numbers", vec![1, 2]);
        proxy.update_data(|numbers| numbers.push(3));
        assert_eq!(proxy.data(), vec![1, 2, 3]);

        proxy.set_data(vec![]);
        assert!(proxy.with_data(Vec::is_empty));
    }
}
