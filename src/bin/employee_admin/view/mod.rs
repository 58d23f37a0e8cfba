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

//! Mediators for the three panels.
//!
//! A mediator turns its panel's actions into proxy calls and notifications,
//! and updates the panel when notifications it is interested in arrive.

mod role_panel_mediator;
mod user_form_mediator;
mod user_list_mediator;

pub(crate) use role_panel_mediator::RolePanelMediator;
pub(crate) use user_form_mediator::UserFormMediator;
pub(crate) use user_list_mediator::UserListMediator;
