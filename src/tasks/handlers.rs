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

use std::{sync::Arc, thread};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::{events::AppEvent, model::search::FetchRequest, tasks::TaskContext};

/// Runs the search on its own thread so a slow response never delays a newer
/// request queued behind it. Ordering is sorted out by the session using the
/// request token.
pub(super) fn search(ctx: &TaskContext, request: FetchRequest) -> Result<()> {
    let source = Arc::clone(ctx.source);
    let event_tx = ctx.event_tx.clone();

    thread::Builder::new()
        .name("search".to_string())
        .spawn(move || {
            let span = info_span!("search", query = %request.query, page = request.page);
            let _guard = span.enter();

            let outcome = source.search(&request.query, request.page);
            debug!(ok = outcome.is_ok(), "Search finished");

            // The UI may already have gone away, nothing left to tell.
            let _ = event_tx.send(AppEvent::SearchFinished {
                token: request.token,
                outcome,
            });
        })
        .context("Failed to spawn search thread")?;

    Ok(())
}
