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

use std::time::Instant;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::{
    App,
    events::Focus,
    model::{
        Movie, SearchPage,
        search::{FetchToken, Notice, NoticeKind, Resolution},
    },
    service::FetchError,
    tasks::AppTask,
};

pub(super) fn handle_submit_query(app: &mut App, query: String) -> Result<()> {
    match app.session.submit(&query) {
        Ok(request) => {
            info!(query = %request.query, token = ?request.token, "Dispatching search");
            app.task_tx.send(AppTask::Search(request))?;
            app.movie_grid.reset(0);
            app.focus = Focus::Results;
        }
        Err(notice) => notify(app, notice),
    }

    Ok(())
}

pub(super) fn handle_change_page(app: &mut App, candidate: u32) -> Result<()> {
    if let Some(request) = app.session.change_page(candidate) {
        info!(query = %request.query, page = request.page, token = ?request.token, "Dispatching page change");
        app.task_tx.send(AppTask::Search(request))?;
    }

    Ok(())
}

pub(super) fn handle_search_finished(
    app: &mut App,
    token: FetchToken,
    outcome: Result<SearchPage, FetchError>,
) {
    if let Resolution::Applied(notice) = app.session.resolve(token, outcome) {
        app.movie_grid.reset(app.session.results().len());
        if let Some(notice) = notice {
            notify(app, notice);
        }
    }
}

pub(super) fn handle_select_movie(app: &mut App, movie: Movie) {
    app.session.select(movie);
}

pub(super) fn handle_close_detail(app: &mut App) {
    app.session.deselect();
}

pub(super) fn handle_tick(app: &mut App) {
    app.frame = app.frame.wrapping_add(1);
    app.toaster.prune(Instant::now());
}

pub(super) fn handle_error(app: &mut App, message: String) {
    notify(app, Notice::new(NoticeKind::Error, message));
}

fn notify(app: &mut App, notice: Notice) {
    match notice.kind {
        NoticeKind::Error => error!(message = %notice.message, "Search failed"),
        NoticeKind::Validation => warn!(message = %notice.message, "Search rejected"),
        NoticeKind::Info | NoticeKind::Success => info!(message = %notice.message, "Search notice"),
    }

    app.toaster.push(notice);
}
