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

//! Value objects carried in notification bodies.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Department {
    #[default]
    None,
    Accounting,
    Sales,
    Plant,
    Shipping,
    QualityControl,
}

impl Department {
    pub(crate) const ALL: [Department; 6] = [
        Department::None,
        Department::Accounting,
        Department::Sales,
        Department::Plant,
        Department::Shipping,
        Department::QualityControl,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Department::None => "--None Selected--",
            Department::Accounting => "Accounting",
            Department::Sales => "Sales",
            Department::Plant => "Plant",
            Department::Shipping => "Shipping",
            Department::QualityControl => "Quality Control",
        }
    }

    /// The next department in [`Department::ALL`], wrapping around.
    pub(crate) fn next(self) -> Self {
        let i = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub(crate) fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Role {
    AccountsPayable,
    AccountsReceivable,
    EmployeeBenefits,
    GeneralLedger,
    Payroll,
    Inventory,
    Production,
    QualityControl,
    Sales,
    Orders,
    Customers,
    Shipping,
    Returns,
}

impl Role {
    pub(crate) const ALL: [Role; 13] = [
        Role::AccountsPayable,
        Role::AccountsReceivable,
        Role::EmployeeBenefits,
        Role::GeneralLedger,
        Role::Payroll,
        Role::Inventory,
        Role::Production,
        Role::QualityControl,
        Role::Sales,
        Role::Orders,
        Role::Customers,
        Role::Shipping,
        Role::Returns,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Role::AccountsPayable => "Accounts Payable",
            Role::AccountsReceivable => "Accounts Receivable",
            Role::EmployeeBenefits => "Employee Benefits",
            Role::GeneralLedger => "General Ledger",
            Role::Payroll => "Payroll",
            Role::Inventory => "Inventory",
            Role::Production => "Production",
            Role::QualityControl => "Quality Control",
            Role::Sales => "Sales",
            Role::Orders => "Orders",
            Role::Customers => "Customers",
            Role::Shipping => "Shipping",
            Role::Returns => "Returns",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct UserVo {
    pub(crate) uname: String,
    pub(crate) fname: String,
    pub(crate) lname: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) department: Department,
}

impl UserVo {
    pub(crate) fn new(
        uname: &str,
        fname: &str,
        lname: &str,
        email: &str,
        password: &str,
        department: Department,
    ) -> Self {
        Self {
            uname: uname.to_owned(),
            fname: fname.to_owned(),
            lname: lname.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            department,
        }
    }

    /// A user can be stored once it has a user name, a password and a
    /// department.
    pub(crate) fn is_valid(&self) -> bool {
        !self.uname.trim().is_empty()
            && !self.password.is_empty()
            && self.department != Department::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RoleVo {
    pub(crate) uname: String,
    pub(crate) roles: Vec<Role>,
}

impl RoleVo {
    pub(crate) fn new(uname: &str, roles: Vec<Role>) -> Self {
        Self {
            uname: uname.to_owned(),
            roles,
        }
    }
}

/// Body of an `addRole` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoleAssignment {
    pub(crate) uname: String,
    pub(crate) role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_cycles_both_ways() {
        assert_eq!(Department::None.next(), Department::Accounting);
        assert_eq!(Department::QualityControl.next(), Department::None);
        assert_eq!(Department::None.previous(), Department::QualityControl);
    }

    #[test]
    fn user_needs_name_password_and_department() {
        let mut user = UserVo::new("lstooge", "Larry", "Stooge", "", "ijk456", Department::None);
        assert!(!user.is_valid());

        user.department = Department::Accounting;
        assert!(user.is_valid());

        user.password.clear();
        assert!(!user.is_valid());
    }
}
