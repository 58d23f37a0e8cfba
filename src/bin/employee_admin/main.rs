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

//! # Employee Admin.
//!
//! A terminal employee administration screen built on `mediate`.
//!
//! Users are listed in a table, edited in a form and granted roles in a
//! side panel. The panels never call each other: each is wrapped by a
//! mediator, the stores are proxies, and multi-step operations are
//! commands, all coordinated by notifications through one facade.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the facade, the panels and the terminal.
//! * An **Input Thread** forwards key presses over a `std::sync::mpsc`
//!   channel.
//! * A **Tick Thread** sends a periodic redraw.
//!
//! The framework is single threaded, so only plain events cross threads.

mod components;
mod config;
mod controller;
mod events;
mod logging;
mod model;
mod names;
mod render;
mod theme;
mod util;
mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mediate::Facade;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    components::Panels,
    config::AdminConfig,
    events::{AppEvent, process_events},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    UserList,
    UserForm,
    RolePanel,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::UserList => Focus::UserForm,
            Focus::UserForm => Focus::RolePanel,
            Focus::RolePanel => Focus::UserList,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::UserList => Focus::RolePanel,
            Focus::UserForm => Focus::UserList,
            Focus::RolePanel => Focus::UserForm,
        }
    }
}

/// Application state.
struct App {
    pub config: AdminConfig,
    pub theme: Theme,

    pub facade: Facade,
    pub panels: Panels,
    pub focus: Focus,

    /// Last error raised while handling a key, cleared by the next success.
    pub status: Option<String>,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,
}

impl App {
    pub fn new(config: AdminConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut app = Self {
            config,
            theme: Theme::default(),
            facade: controller::application_facade(),
            panels: Panels::new(),
            focus: Focus::UserList,
            status: None,
            event_tx,
            event_rx,
        };
        app.set_focus(Focus::UserList);
        app
    }

    /// Sends `startup`, which registers the stores and panel mediators.
    pub fn start(&self) -> mediate::Result<()> {
        controller::startup(&self.facade, self.panels.clone(), self.config.seed_demo_data)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.panels.user_list.borrow_mut().is_active = focus == Focus::UserList;
        self.panels.user_form.borrow_mut().is_active = focus == Focus::UserForm;
        self.panels.role_panel.borrow_mut().is_active = focus == Focus::RolePanel;
    }

    pub fn report(&mut self, result: mediate::Result<()>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                error!(%err, "Action failed");
                self.status = Some(err.to_string());
            }
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, runs startup and then hands the
/// terminal to the event loop, restoring it however the loop ends.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config).context("Failed to initialise logging")?;

    let mut app = App::new(config);
    app.start().context("Failed to start application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("Exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal: background colour, raw mode and the alternate
/// screen.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Without this the UI gets a thin outline in the default background
    util::term::set_terminal_bg(app.theme.background_colour).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Reverses [`setup_terminal`] and shows the cursor again.
///
/// Best effort: runs during cleanup, so failures are ignored.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Spawns the input and tick threads, then runs the event loop.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw key events to application events
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Periodic redraw, e.g. after a terminal resize
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    process_events(terminal, app)
}
