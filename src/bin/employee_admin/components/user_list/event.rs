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

//! Key handling for the user table.

use crossterm::event::{Event, KeyCode};

use crate::components::{UserList, UserListAction};

impl UserList {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<UserListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous();
                None
            }

            KeyCode::Enter => {
                let uname = self.highlighted()?.uname.clone();
                self.selected_user = Some(uname.clone());
                Some(UserListAction::Select(uname))
            }

            KeyCode::Char('n') => {
                self.de_select();
                Some(UserListAction::New)
            }

            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_user
                .clone()
                .map(UserListAction::Delete),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::demo_users;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_selects_the_highlighted_user() {
        let mut list = UserList::new();
        list.set_users(demo_users());

        assert_eq!(list.process_event(&key(KeyCode::Enter)), None);

        list.process_event(&key(KeyCode::Down));
        list.process_event(&key(KeyCode::Down));
        assert_eq!(
            list.process_event(&key(KeyCode::Enter)),
            Some(UserListAction::Select("cstooge".into()))
        );
        assert_eq!(list.selected_user(), Some("cstooge"));
    }

    #[test]
    fn delete_needs_a_selection() {
        let mut list = UserList::new();
        list.set_users(demo_users());
        assert_eq!(list.process_event(&key(KeyCode::Char('d'))), None);

        list.process_event(&key(KeyCode::Down));
        list.process_event(&key(KeyCode::Enter));
        assert_eq!(
            list.process_event(&key(KeyCode::Char('d'))),
            Some(UserListAction::Delete("lstooge".into()))
        );
    }

    #[test]
    fn new_clears_the_selection() {
        let mut list = UserList::new();
        list.set_users(demo_users());
        list.process_event(&key(KeyCode::Down));
        list.process_event(&key(KeyCode::Enter));

        assert_eq!(
            list.process_event(&key(KeyCode::Char('n'))),
            Some(UserListAction::New)
        );
        assert_eq!(list.selected_user(), None);
    }
}
