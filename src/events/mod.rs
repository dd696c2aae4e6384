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

//! Application event handling.
//!
//! Every state change happens on the UI thread in response to an [`AppEvent`].
//! Events arrive from the key reader, the tick thread, the task worker, and
//! from the handlers themselves when a key press is turned into intent.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes raw key presses to the component that owns
//!   them, and turns the resulting actions into events.
//! * [`handlers`]: Applies events to the search session, the grid cursor and
//!   the toaster.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{
        Movie, SearchPage,
        search::FetchToken,
    },
    render::draw,
    service::FetchError,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SubmitQuery(String),
    ChangePage(u32),

    SelectMovie(Movie),
    CloseDetail,

    SearchFinished {
        token: FetchToken,
        outcome: Result<SearchPage, FetchError>,
    },

    Tick,

    ExitApplication,

    Error(String),
    /// Ends the event loop with an error, the terminal can no longer be used.
    FatalError(String),
}

/// Which part of the screen receives key presses when no overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::SubmitQuery(query) => handle_submit_query(app, query)?,
        AppEvent::ChangePage(page) => handle_change_page(app, page)?,
        AppEvent::SelectMovie(movie) => handle_select_movie(app, movie),
        AppEvent::CloseDetail => handle_close_detail(app),
        AppEvent::SearchFinished { token, outcome } => handle_search_finished(app, token, outcome),
        AppEvent::Tick => handle_tick(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::FatalError(message) => bail!(message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyModifiers};
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        config::AppConfig,
        model::{movie, search::FetchState},
        tasks::AppTask,
    };

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn key(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    /// Feeds every queued event back through the handlers, the way the main
    /// loop would, stopping at a quit request.
    fn drain(app: &mut App) -> bool {
        while let Ok(event) = app.event_rx.try_recv() {
            if matches!(event, AppEvent::ExitApplication) {
                return true;
            }
            handle_event(app, event).unwrap();
        }
        false
    }

    fn dispatched(task_rx: &Receiver<AppTask>) -> Vec<(String, u32)> {
        task_rx
            .try_iter()
            .map(|AppTask::Search(r)| (r.query, r.page))
            .collect()
    }

    fn answer(app: &mut App, task_rx: &Receiver<AppTask>, results: usize, total_pages: u32) {
        let requests: Vec<_> = task_rx.try_iter().collect();
        for AppTask::Search(request) in requests {
            let page = SearchPage {
                page: request.page,
                results: (1..=results as u64).map(|id| movie(id, "Batman")).collect(),
                total_pages,
                total_results: results as u64,
            };
            handle_event(
                app,
                AppEvent::SearchFinished {
                    token: request.token,
                    outcome: Ok(page),
                },
            )
            .unwrap();
        }
    }

    fn messages(app: &App) -> Vec<String> {
        app.toaster.toasts().map(|t| t.notice.message.clone()).collect()
    }

    #[test]
    fn typing_and_enter_dispatches_a_search() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "  batman ");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);

        assert_eq!(dispatched(&task_rx), vec![("batman".to_string(), 1)]);
        assert!(app.session.is_loading());
        assert_eq!(app.focus, Focus::Results);
    }

    #[test]
    fn blank_submission_only_warns() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "   ");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);

        assert!(dispatched(&task_rx).is_empty());
        assert_eq!(*app.session.state(), FetchState::Idle);
        assert_eq!(messages(&app), ["Please enter your search query."]);
        assert_eq!(app.focus, Focus::SearchInput);
    }

    #[test]
    fn results_arrive_and_open_in_the_detail_overlay() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "batman");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);
        answer(&mut app, &task_rx, 3, 1);

        assert_eq!(app.session.results().len(), 3);
        assert_eq!(messages(&app), ["Movies found successfully!"]);

        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        drain(&mut app);
        assert_eq!(app.session.selected().map(|m| m.id), Some(2));

        // The overlay captures keys, 'q' closes it rather than quitting.
        key(&mut app, KeyCode::Char('q'));
        assert!(!drain(&mut app));
        assert!(app.session.selected().is_none());
        assert_eq!(app.session.results().len(), 3);
    }

    #[test]
    fn pager_keys_request_the_next_page() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "batman");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);
        answer(&mut app, &task_rx, 20, 5);

        key(&mut app, KeyCode::Char('n'));
        drain(&mut app);
        assert_eq!(dispatched(&task_rx), vec![("batman".to_string(), 2)]);
        assert_eq!(app.session.page(), 2);
        assert_eq!(app.session.results().len(), 20);
    }

    #[test]
    fn single_page_ignores_pager_keys() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "batman");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);
        answer(&mut app, &task_rx, 3, 1);

        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::End);
        drain(&mut app);
        assert!(dispatched(&task_rx).is_empty());
    }

    #[test]
    fn failure_becomes_an_error_toast() {
        let (mut app, task_rx) = test_app();

        type_text(&mut app, "batman");
        key(&mut app, KeyCode::Enter);
        drain(&mut app);

        let AppTask::Search(request) = task_rx.try_recv().unwrap();
        handle_event(
            &mut app,
            AppEvent::SearchFinished {
                token: request.token,
                outcome: Err(FetchError::Unauthorized(StatusCode::UNAUTHORIZED)),
            },
        )
        .unwrap();

        assert!(matches!(app.session.state(), FetchState::Error(_)));
        assert_eq!(app.toaster.toasts().count(), 1);
    }

    #[test]
    fn q_in_search_input_is_text_not_quit() {
        let (mut app, _task_rx) = test_app();

        key(&mut app, KeyCode::Char('q'));
        assert!(!drain(&mut app));
        assert_eq!(app.search_bar.value(), "q");

        key(&mut app, KeyCode::Esc);
        key(&mut app, KeyCode::Char('q'));
        assert!(drain(&mut app));
    }

    #[test]
    fn slash_returns_to_search_input() {
        let (mut app, _task_rx) = test_app();

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Results);

        key(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::SearchInput);
        assert_eq!(app.search_bar.value(), "");
    }

    #[test]
    fn lost_terminal_input_ends_the_loop() {
        let (mut app, _task_rx) = test_app();

        let result = handle_event(
            &mut app,
            AppEvent::FatalError("Terminal input failed: broken pipe".to_string()),
        );

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Terminal input failed: broken pipe");
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let (mut app, _task_rx) = test_app();

        handle_event(
            &mut app,
            AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();

        assert!(drain(&mut app));
        assert_eq!(app.search_bar.value(), "");
    }
}
