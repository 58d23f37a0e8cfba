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

//! Notification, proxy and mediator names shared by the application.

pub(crate) mod notes {
    pub(crate) const STARTUP: &str = "startup";
    pub(crate) const NEW_USER: &str = "newUser";
    pub(crate) const DELETE_USER: &str = "deleteUser";
    pub(crate) const CANCEL_SELECTED: &str = "cancelSelected";
    pub(crate) const USER_SELECTED: &str = "userSelected";
    pub(crate) const USER_ADDED: &str = "userAdded";
    pub(crate) const USER_UPDATED: &str = "userUpdated";
    pub(crate) const USER_DELETED: &str = "userDeleted";
    pub(crate) const ADD_ROLE: &str = "addRole";
    pub(crate) const ADD_ROLE_RESULT: &str = "addRoleResult";
}

pub(crate) mod proxies {
    pub(crate) const USER_PROXY: &str = "userProxy";
    pub(crate) const ROLE_PROXY: &str = "roleProxy";
}

pub(crate) mod mediators {
    pub(crate) const USER_LIST_MEDIATOR: &str = "userListMediator";
    pub(crate) const USER_FORM_MEDIATOR: &str = "userFormMediator";
    pub(crate) const ROLE_PANEL_MEDIATOR: &str = "rolePanelMediator";
}
