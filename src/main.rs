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

//! # Movie Search TUI.
//!
//! A terminal front end for searching The Movie Database by title.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background task layer that talks to the remote search service.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * A **Task Worker** runs each search request off the UI thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the run fails. Communication between
//! the UI and background workers is handled via `std::sync::mpsc` channels.

mod components;
mod config;
mod events;
mod model;
mod render;
mod service;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    components::{MovieGridState, SearchBar, Toaster},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::search::SearchSession,
    service::TmdbClient,
    tasks::{AppTask, spawn_task_worker},
    theme::Theme,
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub session: SearchSession,

    pub search_bar: SearchBar,
    pub movie_grid: MovieGridState,
    pub toaster: Toaster,

    /// Tick counter, drives the loading spinner.
    pub frame: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let toaster = Toaster::new(Duration::from_millis(config.toast_duration_ms));

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            task_tx,
            session: SearchSession::new(),
            search_bar: SearchBar::new(),
            movie_grid: MovieGridState::new(),
            toaster,
            frame: 0,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration, enables logging when asked to, sets up the
/// communication channels, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    util::logging::init_tracing(&config)?;

    let token = config::api_token();
    if token.is_empty() {
        warn!("No TMDB_TOKEN available, searches will be rejected by the service");
    }
    let client = TmdbClient::new(&config, token).context("Failed to create movie service client")?;

    let (task_tx, task_rx) = mpsc::channel();
    let mut app = App::new(config, task_tx);

    info!(base_url = %app.config.api_base_url, "Starting");

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, Arc::new(client), task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour))
        .context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also makes the cursor visible again.
///
/// This is best-effort and does not return a result, as it runs during
/// cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to run searches against the movie service.
/// * An input thread to poll for keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Arc<TmdbClient>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    spawn_task_worker(client, task_rx, app.event_tx.clone());

    // Translate raw key presses to application events. Release and repeat
    // events are dropped, some terminals report them.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Terminal input failed: {e}")));
                    break;
                }
            }
        }
    });

    // Periodic tick, this is effectively the minimum "frame rate" for the TUI
    // and the resolution of toast expiry.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    process_events(terminal, app)
}
