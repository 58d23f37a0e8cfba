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

//! Framework errors.
//!
//! Lookups that miss are not errors: they return `None` or `false`. Errors
//! are reserved for contract violations and for failures raised by
//! application handlers while a notification is being dispatched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An abstract hook was invoked without being overridden.
    #[error("{0} is abstract and must be overridden")]
    Abstract(&'static str),

    /// A participant tried to send a notification while not attached to a
    /// view.
    #[error("{0} is not attached to a view")]
    Detached(&'static str),

    /// A handler, command or proxy failed.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
