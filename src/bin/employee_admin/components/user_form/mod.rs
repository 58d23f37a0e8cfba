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

//! The user editing form.
//!
//! Five text fields, a password confirmation and a department picker. The
//! form is disabled until a user is selected or a new one is started; in
//! edit mode the user name cannot be changed.

mod event;
mod render;

use tui_input::Input;

use crate::model::{Department, UserVo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserFormAction {
    Add,
    Update,
    Cancel,
}

pub(crate) const FIELD_LABELS: [&str; 7] = [
    "User Name",
    "First Name",
    "Last Name",
    "Email",
    "Password",
    "Confirm",
    "Department",
];

const UNAME: usize = 0;
const FNAME: usize = 1;
const LNAME: usize = 2;
const EMAIL: usize = 3;
const PASSWORD: usize = 4;
const CONFIRM: usize = 5;
const DEPARTMENT: usize = 6;

pub(crate) struct UserForm {
    inputs: [Input; 6],
    department: Department,
    field: usize,
    mode: FormMode,
    enabled: bool,
    focus_requested: bool,
    error: Option<String>,
    pub(crate) is_active: bool,
}

impl UserForm {
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            department: Department::None,
            field: UNAME,
            mode: FormMode::Add,
            enabled: false,
            focus_requested: false,
            error: None,
            is_active: false,
        }
    }

    /// The user described by the current field values.
    pub(crate) fn user(&self) -> UserVo {
        UserVo {
            uname: self.inputs[UNAME].value().trim().to_owned(),
            fname: self.inputs[FNAME].value().to_owned(),
            lname: self.inputs[LNAME].value().to_owned(),
            email: self.inputs[EMAIL].value().to_owned(),
            password: self.inputs[PASSWORD].value().to_owned(),
            department: self.department,
        }
    }

    pub(crate) fn set_user(&mut self, user: &UserVo) {
        self.inputs = [
            Input::new(user.uname.clone()),
            Input::new(user.fname.clone()),
            Input::new(user.lname.clone()),
            Input::new(user.email.clone()),
            Input::new(user.password.clone()),
            Input::new(user.password.clone()),
        ];
        self.department = user.department;
    }

    pub(crate) fn clear_form(&mut self) {
        for input in &mut self.inputs {
            input.reset();
        }
        self.department = Department::None;
        self.field = UNAME;
        self.error = None;
    }

    pub(crate) fn mode(&self) -> FormMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Moves to the first editable field and asks the application for
    /// keyboard focus.
    pub(crate) fn set_focus(&mut self) {
        self.field = self.first_field();
        self.focus_requested = true;
    }

    /// Returns `true` once after [`UserForm::set_focus`].
    pub(crate) fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Whether key presses should be kept away from global shortcuts.
    pub(crate) fn captures_input(&self) -> bool {
        self.enabled && self.is_active
    }

    fn first_field(&self) -> usize {
        match self.mode {
            FormMode::Add => UNAME,
            FormMode::Edit => FNAME,
        }
    }

    /// Checks the fields before they are submitted.
    fn validate(&self) -> Result<UserVo, &'static str> {
        if self.inputs[PASSWORD].value() != self.inputs[CONFIRM].value() {
            return Err("Your password and confirmation password do not match.");
        }
        let user = self.user();
        if !user.is_valid() {
            return Err("User name, password and department are required.");
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_users;

    #[test]
    fn set_user_then_read_back() {
        let mut form = UserForm::new();
        let moe = demo_users().remove(2);
        form.set_user(&moe);

        assert_eq!(form.user(), moe);
        assert!(form.validate().is_ok());

        form.clear_form();
        assert_eq!(form.user(), UserVo::default());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut form = UserForm::new();
        form.set_user(&demo_users().remove(0));
        form.inputs[CONFIRM] = Input::new("other".into());

        assert!(form.validate().unwrap_err().contains("do not match"));
    }

    #[test]
    fn focus_request_is_taken_once() {
        let mut form = UserForm::new();
        form.set_mode(FormMode::Edit);
        form.set_focus();

        assert_eq!(form.field, FNAME);
        assert!(form.take_focus_request());
        assert!(!form.take_focus_request());
    }
}
