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

//! Employee data.
//!
//! Value objects and the two proxies that own them. Nothing here knows about
//! the terminal.

mod role_proxy;
mod user_proxy;
mod vo;

use std::rc::Rc;

use anyhow::anyhow;
use mediate::{Binding, Error, Proxy, Result};

pub(crate) use role_proxy::RoleProxy;
pub(crate) use user_proxy::UserProxy;
pub(crate) use vo::{Department, Role, RoleAssignment, RoleVo, UserVo};

use crate::names::proxies::{ROLE_PROXY, USER_PROXY};

fn lookup<P: Proxy>(binding: &Binding, name: &str) -> Result<Rc<P>> {
    binding
        .model()
        .and_then(|model| model.retrieve_proxy_as::<P>(name))
        .ok_or_else(|| Error::from(anyhow!("{name} is not registered")))
}

/// The registered [`UserProxy`], reached through a participant's binding.
pub(crate) fn user_proxy(binding: &Binding) -> Result<Rc<UserProxy>> {
    lookup(binding, USER_PROXY)
}

pub(crate) fn role_proxy(binding: &Binding) -> Result<Rc<RoleProxy>> {
    lookup(binding, ROLE_PROXY)
}

/// The users the application starts with when demo data is enabled.
pub(crate) fn demo_users() -> Vec<UserVo> {
    vec![
        UserVo::new("lstooge", "Larry", "Stooge", "larry@stooges.com", "ijk456", Department::Accounting),
        UserVo::new("cstooge", "Curly", "Stooge", "curly@stooges.com", "xyz987", Department::Sales),
        UserVo::new("mstooge", "Moe", "Stooge", "moe@stooges.com", "abc123", Department::Plant),
    ]
}

/// Role entries matching [`demo_users`].
pub(crate) fn demo_roles() -> Vec<RoleVo> {
    vec![
        RoleVo::new("lstooge", vec![Role::Payroll, Role::EmployeeBenefits]),
        RoleVo::new(
            "cstooge",
            vec![Role::AccountsPayable, Role::AccountsReceivable, Role::GeneralLedger],
        ),
        RoleVo::new(
            "mstooge",
            vec![Role::Inventory, Role::Production, Role::Sales, Role::Shipping],
        ),
    ]
}
