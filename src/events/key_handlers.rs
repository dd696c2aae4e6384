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

//! Keyboard routing.
//!
//! Keys go to exactly one owner. The detail overlay, while shown, captures
//! everything. Otherwise the focused search input takes every key, and the
//! results area shares keys between the grid, the pager and a few global
//! bindings whose key sets do not overlap.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    components::{MovieGridAction, MovieModal, MovieModalAction, Pager, PagerAction, SearchBarAction},
    events::{AppEvent, Focus},
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if let Some(movie) = app.session.selected() {
        if let Some(MovieModalAction::Close) = MovieModal::new(movie).process_event(&event) {
            app.event_tx.send(AppEvent::CloseDetail)?;
        }
        return Ok(());
    }

    match app.focus {
        Focus::SearchInput => process_search_input_key(app, &event),
        Focus::Results => process_results_key(app, key, &event),
    }
}

fn process_search_input_key(app: &mut App, event: &Event) -> Result<()> {
    match app.search_bar.process_event(event) {
        Some(SearchBarAction::Submit(query)) => app.event_tx.send(AppEvent::SubmitQuery(query))?,
        Some(SearchBarAction::Cancel) => app.focus = Focus::Results,
        None => {}
    }

    Ok(())
}

fn process_results_key(app: &mut App, key: KeyEvent, event: &Event) -> Result<()> {
    let action = app
        .movie_grid
        .as_widget(app.session.results())
        .process_event(event);
    if let Some(MovieGridAction::Select(movie)) = action {
        app.event_tx.send(AppEvent::SelectMovie(movie))?;
        return Ok(());
    }

    if app.session.total_pages() > 1 {
        let pager = Pager::new(app.session.page(), app.session.total_pages());
        if let Some(PagerAction::GoTo(page)) = pager.process_event(event) {
            app.event_tx.send(AppEvent::ChangePage(page))?;
            return Ok(());
        }
    }

    match key.code {
        KeyCode::Char('/') => app.focus = Focus::SearchInput,
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        _ => {}
    }

    Ok(())
}
