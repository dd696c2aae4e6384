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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! in practice the movie search request, from the main UI thread. A dedicated
//! worker loop translates [`AppTask`] requests into calls on a
//! [`MovieSource`] and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are better suited
//! to events.

mod handlers;
use handlers::*;

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::Result;
use tracing::error;

use crate::{events::AppEvent, model::search::FetchRequest, service::MovieSource};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(FetchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the movie source and enters a blocking loop, listening for
/// incoming [`AppTask`]s until the sending side is dropped.
///
/// # Arguments
///
/// * `source` - The service used to answer searches.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    source: Arc<dyn MovieSource>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                source: &source,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    source: &'a Arc<dyn MovieSource>,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::Search(request) => search(ctx, request),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Mutex, mpsc},
        time::Duration,
    };

    use reqwest::StatusCode;

    use super::*;
    use crate::{
        model::{
            SearchPage, movie,
            search::{FetchToken, SearchSession},
        },
        service::FetchError,
    };

    const WAIT: Duration = Duration::from_secs(5);

    /// Answers every query with one movie titled after the query, unless the
    /// query is "fail". Blocks on "slow" until released.
    struct FakeSource {
        calls: Mutex<Vec<(String, u32)>>,
        release_slow: Mutex<Option<mpsc::Receiver<()>>>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                release_slow: Mutex::new(None),
            }
        }
    }

    impl MovieSource for FakeSource {
        fn search(&self, query: &str, page: u32) -> Result<SearchPage, FetchError> {
            self.calls.lock().unwrap().push((query.to_string(), page));

            if query == "slow" {
                if let Some(rx) = self.release_slow.lock().unwrap().take() {
                    let _ = rx.recv_timeout(WAIT);
                }
            }

            if query == "fail" {
                return Err(FetchError::Status(StatusCode::BAD_GATEWAY));
            }

            Ok(SearchPage {
                page,
                results: vec![movie(1, query)],
                total_pages: 1,
                total_results: 1,
            })
        }
    }

    fn finished(
        event_rx: &mpsc::Receiver<AppEvent>,
    ) -> (FetchToken, std::result::Result<SearchPage, FetchError>) {
        match event_rx.recv_timeout(WAIT).expect("worker did not answer") {
            AppEvent::SearchFinished { token, outcome } => (token, outcome),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn search_result_is_tagged_with_its_token() {
        let source = Arc::new(FakeSource::new());
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(source.clone(), task_rx, event_tx);

        let mut session = SearchSession::new();
        let request = session.submit("batman").unwrap();
        let expected = request.token;
        task_tx.send(AppTask::Search(request)).unwrap();

        let (token, outcome) = finished(&event_rx);
        assert_eq!(token, expected);
        assert_eq!(outcome.unwrap().results[0].title, "batman");
        assert_eq!(*source.calls.lock().unwrap(), vec![("batman".to_string(), 1)]);
    }

    #[test]
    fn failures_are_delivered_not_swallowed() {
        let source = Arc::new(FakeSource::new());
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(source, task_rx, event_tx);

        let mut session = SearchSession::new();
        task_tx
            .send(AppTask::Search(session.submit("fail").unwrap()))
            .unwrap();

        let (_, outcome) = finished(&event_rx);
        assert!(matches!(outcome, Err(FetchError::Status(StatusCode::BAD_GATEWAY))));
    }

    #[test]
    fn slow_request_does_not_hold_back_a_newer_one() {
        let source = Arc::new(FakeSource::new());
        let (release_tx, release_rx) = mpsc::channel();
        *source.release_slow.lock().unwrap() = Some(release_rx);

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(source, task_rx, event_tx);

        let mut session = SearchSession::new();
        let slow = session.submit("slow").unwrap();
        let fast = session.submit("alien").unwrap();
        let (slow_token, fast_token) = (slow.token, fast.token);
        task_tx.send(AppTask::Search(slow)).unwrap();
        task_tx.send(AppTask::Search(fast)).unwrap();

        let (token, outcome) = finished(&event_rx);
        assert_eq!(token, fast_token);
        session.resolve(token, outcome);

        release_tx.send(()).unwrap();
        let (token, outcome) = finished(&event_rx);
        assert_eq!(token, slow_token);
        session.resolve(token, outcome);

        assert_eq!(session.query(), "alien");
        assert_eq!(session.results()[0].title, "alien");
    }
}
