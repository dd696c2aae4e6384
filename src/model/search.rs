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

//! Movie search session state.
//!
//! This module owns everything the user sees about a search: the current
//! query and page, the lifecycle of the latest request, and the movie shown in
//! the detail overlay.
//!
//! # Requests and tokens
//!
//! Every request the session asks for is tagged with a fresh [`FetchToken`].
//! Only a resolution carrying the latest token is applied, anything older is
//! reported as [`Resolution::Stale`] and dropped, so a slow response can never
//! overwrite the results of a newer search or page.
//!
//! # Notices
//!
//! The session decides which user notification, if any, a transition
//! produces. It never sends them itself, the caller forwards the returned
//! [`Notice`] to the toaster.

use std::mem;

use tracing::debug;

use crate::{
    model::{Movie, SearchPage},
    service::FetchError,
};

const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";
const NO_RESULTS_MESSAGE: &str = "No movies found.";
const RESULTS_MESSAGE: &str = "Movies found successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct FetchToken(u64);

/// A request the session wants dispatched to the movie service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FetchRequest {
    pub(crate) token: FetchToken,
    pub(crate) query: String,
    pub(crate) page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FetchState {
    Idle,
    /// A request is in flight. When only the page changed, the previous page
    /// stays visible until the new one arrives.
    Loading { placeholder: Option<SearchPage> },
    Success(SearchPage),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Validation,
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) message: String,
}

impl Notice {
    pub(crate) fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// The response belonged to a superseded request and was discarded.
    Stale,
    Applied(Option<Notice>),
}

pub(crate) struct SearchSession {
    query: String,
    page: u32,
    selected: Option<Movie>,
    state: FetchState,
    latest: Option<FetchToken>,
    next_token: u64,
    announced: Option<FetchToken>,
}

impl SearchSession {
    pub(crate) fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
            state: FetchState::Idle,
            latest: None,
            next_token: 0,
            announced: None,
        }
    }

    /// Starts a new search for `raw`.
    ///
    /// A query that is empty once trimmed is rejected with a validation
    /// notice and leaves the session untouched. Otherwise the page resets to
    /// the first one and the returned request must be dispatched.
    pub(crate) fn submit(&mut self, raw: &str) -> Result<FetchRequest, Notice> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(Notice::new(NoticeKind::Validation, EMPTY_QUERY_MESSAGE));
        }

        self.query = query.to_string();
        self.page = 1;
        self.state = FetchState::Loading { placeholder: None };

        Ok(self.dispatch())
    }

    /// Moves to another page of the current results.
    ///
    /// Only possible once a search has succeeded with more than one page. The
    /// candidate is clamped to the valid range, and a request is returned only
    /// if that actually changes the page.
    pub(crate) fn change_page(&mut self, candidate: u32) -> Option<FetchRequest> {
        let total_pages = match &self.state {
            FetchState::Success(page) if page.total_pages > 1 => page.total_pages,
            _ => return None,
        };

        let target = candidate.clamp(1, total_pages);
        if target == self.page {
            return None;
        }

        self.page = target;
        let previous = mem::replace(&mut self.state, FetchState::Idle);
        self.state = FetchState::Loading {
            placeholder: match previous {
                FetchState::Success(page) => Some(page),
                _ => None,
            },
        };

        Some(self.dispatch())
    }

    /// Applies the outcome of a dispatched request.
    pub(crate) fn resolve(
        &mut self,
        token: FetchToken,
        outcome: Result<SearchPage, FetchError>,
    ) -> Resolution {
        if self.latest != Some(token) {
            debug!(?token, latest = ?self.latest, "Discarding superseded search response");
            return Resolution::Stale;
        }

        let notice = match outcome {
            Ok(page) => self.enter_success(token, page),
            Err(e) => {
                let message = e.to_string();
                self.state = FetchState::Error(message.clone());
                Some(Notice::new(NoticeKind::Error, message))
            }
        };

        Resolution::Applied(notice)
    }

    fn enter_success(&mut self, token: FetchToken, page: SearchPage) -> Option<Notice> {
        let notice = if page.results.is_empty() {
            Some(Notice::new(NoticeKind::Info, NO_RESULTS_MESSAGE))
        } else if self.announced != Some(token) {
            self.announced = Some(token);
            Some(Notice::new(NoticeKind::Success, RESULTS_MESSAGE))
        } else {
            None
        };

        self.state = FetchState::Success(page);
        notice
    }

    /// Shows `movie` in the detail overlay. Ignored while no results are
    /// visible.
    pub(crate) fn select(&mut self, movie: Movie) -> bool {
        if self.results().is_empty() {
            return false;
        }

        self.selected = Some(movie);
        true
    }

    pub(crate) fn deselect(&mut self) {
        self.selected = None;
    }

    fn dispatch(&mut self) -> FetchRequest {
        self.next_token += 1;
        let token = FetchToken(self.next_token);
        self.latest = Some(token);

        FetchRequest {
            token,
            query: self.query.clone(),
            page: self.page,
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn state(&self) -> &FetchState {
        &self.state
    }

    pub(crate) fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    /// The page of results currently on screen, if any.
    pub(crate) fn visible_page(&self) -> Option<&SearchPage> {
        match &self.state {
            FetchState::Success(page) => Some(page),
            FetchState::Loading { placeholder } => placeholder.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn results(&self) -> &[Movie] {
        self.visible_page()
            .map(|p| p.results.as_slice())
            .unwrap_or_default()
    }

    pub(crate) fn total_pages(&self) -> u32 {
        self.visible_page().map(|p| p.total_pages).unwrap_or(0)
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading { .. })
    }
}
