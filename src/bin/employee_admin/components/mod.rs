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

//! Terminal view components.
//!
//! Each component keeps its own state, turns key presses into an action
//! enum, and draws itself. None of them talk to the framework; their
//! mediators do that.

mod role_panel;
mod user_form;
mod user_list;

use std::{cell::RefCell, rc::Rc};

pub(crate) use role_panel::{RolePanel, RolePanelAction};
pub(crate) use user_form::{FormMode, UserForm, UserFormAction};
pub(crate) use user_list::{UserList, UserListAction};

/// The three panels, shared between their mediators and the renderer.
#[derive(Clone)]
pub(crate) struct Panels {
    pub(crate) user_list: Rc<RefCell<UserList>>,
    pub(crate) user_form: Rc<RefCell<UserForm>>,
    pub(crate) role_panel: Rc<RefCell<RolePanel>>,
}

impl Panels {
    pub(crate) fn new() -> Self {
        Self {
            user_list: Rc::new(RefCell::new(UserList::new())),
            user_form: Rc::new(RefCell::new(UserForm::new())),
            role_panel: Rc::new(RefCell::new(RolePanel::new())),
        }
    }
}
