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

//! Key handling for the user form.
//!
//! Up and down move between fields, left and right change the department,
//! Enter submits and Esc cancels. Everything else goes to the text field
//! under the cursor.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use super::{DEPARTMENT, FormMode, UNAME};
use crate::components::{UserForm, UserFormAction};

impl UserForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<UserFormAction> {
        if !self.enabled {
            return None;
        }
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc => return Some(UserFormAction::Cancel),

            KeyCode::Enter => {
                return match self.validate() {
                    Ok(_) => {
                        self.error = None;
                        Some(match self.mode {
                            FormMode::Add => UserFormAction::Add,
                            FormMode::Edit => UserFormAction::Update,
                        })
                    }
                    Err(message) => {
                        self.error = Some(message.to_owned());
                        None
                    }
                };
            }

            KeyCode::Down => {
                self.field = if self.field == DEPARTMENT {
                    self.first_field()
                } else {
                    self.field + 1
                };
            }
            KeyCode::Up => {
                self.field = if self.field == self.first_field() {
                    DEPARTMENT
                } else {
                    self.field - 1
                };
            }

            KeyCode::Left if self.field == DEPARTMENT => {
                self.department = self.department.previous();
            }
            KeyCode::Right | KeyCode::Char(' ') if self.field == DEPARTMENT => {
                self.department = self.department.next();
            }

            _ if self.field == DEPARTMENT => {}
            _ if self.field == UNAME && self.mode == FormMode::Edit => {}

            _ => {
                self.inputs[self.field].handle_event(event);
            }
        }

        None
    }
}
