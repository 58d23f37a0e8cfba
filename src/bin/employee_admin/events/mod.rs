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

//! The main event loop and key routing.
//!
//! Keys go to the focused panel first. A panel that produces an action has
//! it handled by that panel's mediator, which is where the framework takes
//! over. Global shortcuts only apply when the form is not taking text.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mediate::{Facade, Mediator};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use crate::{
    App, Focus,
    names::mediators::{ROLE_PANEL_MEDIATOR, USER_FORM_MEDIATOR, USER_LIST_MEDIATOR},
    render::draw,
    view::{RolePanelMediator, UserFormMediator, UserListMediator},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,
    ExitApplication,
}

/// Runs until an exit event arrives or every sender is gone, redrawing
/// after each event.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        (KeyCode::Tab, _) => {
            app.set_focus(app.focus.next());
            return Ok(());
        }
        (KeyCode::BackTab, _) => {
            app.set_focus(app.focus.previous());
            return Ok(());
        }
        _ => {}
    }

    let captured = app.panels.user_form.borrow().captures_input();
    let event = Event::Key(key);

    // Each panel borrow ends before its mediator runs, since the mediator's
    // notifications update the panels.
    let outcome = match app.focus {
        Focus::UserList => {
            let action = app.panels.user_list.borrow_mut().process_event(&event);
            action.map(|action| {
                debug!(?action, "User list action");
                with_mediator(&app.facade, USER_LIST_MEDIATOR, |m: &UserListMediator| {
                    m.handle_action(action)
                })
            })
        }
        Focus::UserForm => {
            let action = app.panels.user_form.borrow_mut().process_event(&event);
            action.map(|action| {
                debug!(?action, "User form action");
                with_mediator(&app.facade, USER_FORM_MEDIATOR, |m: &UserFormMediator| {
                    m.handle_action(action)
                })
            })
        }
        Focus::RolePanel => {
            let action = app.panels.role_panel.borrow_mut().process_event(&event);
            action.map(|action| {
                debug!(?action, "Role panel action");
                with_mediator(&app.facade, ROLE_PANEL_MEDIATOR, |m: &RolePanelMediator| {
                    m.handle_action(action)
                })
            })
        }
    };

    if let Some(result) = outcome {
        app.report(result);
    }

    if app.panels.user_form.borrow_mut().take_focus_request() {
        app.set_focus(Focus::UserForm);
    }

    if !captured {
        if let KeyCode::Char('q') = key.code {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

fn with_mediator<M: Mediator>(
    facade: &Facade,
    name: &str,
    f: impl FnOnce(&M) -> mediate::Result<()>,
) -> mediate::Result<()> {
    match facade.retrieve_mediator_as::<M>(name) {
        Some(mediator) => f(&mediator),
        None => {
            error!(mediator = name, "Mediator is not registered");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AdminConfig, names::proxies::USER_PROXY};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            process_key_event(app, key(*code)).unwrap();
        }
    }

    fn started() -> App {
        let mut app = App::new(AdminConfig::default());
        app.start().unwrap();
        app
    }

    fn exit_requested(app: &App) -> bool {
        app.event_rx
            .try_iter()
            .any(|event| matches!(event, AppEvent::ExitApplication))
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = started();
        assert_eq!(app.focus, Focus::UserList);

        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.focus, Focus::RolePanel);
        assert!(app.panels.role_panel.borrow().is_active);
        assert!(!app.panels.user_list.borrow().is_active);

        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.focus, Focus::UserForm);
    }

    #[test]
    fn selecting_a_user_moves_focus_to_the_form() {
        let mut app = started();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);

        assert_eq!(app.focus, Focus::UserForm);
        assert_eq!(app.panels.user_form.borrow().user().uname, "lstooge");
    }

    #[test]
    fn form_keeps_q_for_itself() {
        let mut app = started();
        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.focus, Focus::UserForm);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!exit_requested(&app));
        assert_eq!(app.panels.user_form.borrow().user().uname, "q");

        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(exit_requested(&app));
    }

    #[test]
    fn creating_a_user_from_the_keyboard() {
        let mut app = started();
        press(&mut app, &[KeyCode::Char('n')]);
        for c in "sstooge".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Up, KeyCode::Right, KeyCode::Up]);
        press(&mut app, &[KeyCode::Char('x')]);
        press(&mut app, &[KeyCode::Up]);
        press(&mut app, &[KeyCode::Char('x'), KeyCode::Enter]);

        assert!(app.status.is_none());
        let users: std::rc::Rc<crate::model::UserProxy> =
            app.facade.retrieve_proxy_as(USER_PROXY).unwrap();
        assert!(users.user("sstooge").is_some());
    }

    #[test]
    fn deleting_from_the_list() {
        let mut app = started();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::BackTab]);
        assert_eq!(app.focus, Focus::UserList);

        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.panels.user_list.borrow().users().len(), 2);
    }
}
