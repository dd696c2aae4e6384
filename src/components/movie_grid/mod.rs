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

//! Interactive movie result grid.
//!
//! This module provides a table component for browsing search results. It
//! separates the persistent cursor (`MovieGridState`) from the transient
//! widget view (`MovieGrid`), which borrows the movies from its caller for the
//! duration of a single event or frame. Choosing a movie is reported upward as
//! a [`MovieGridAction`], the grid never holds on to the selection itself.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Movie;

#[derive(Debug, PartialEq)]
pub(crate) enum MovieGridAction {
    Select(Movie),
}

pub(crate) struct MovieGridState {
    pub(crate) table_state: TableState,
}

impl MovieGridState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// Puts the cursor back on the first row, for a freshly loaded page.
    pub(crate) fn reset(&mut self, len: usize) {
        let first = if len == 0 { None } else { Some(0) };
        self.table_state.select(first);
        *self.table_state.offset_mut() = 0;
    }

    pub(crate) fn as_widget<'a>(&'a mut self, movies: &'a [Movie]) -> MovieGrid<'a> {
        MovieGrid {
            movies,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct MovieGrid<'a> {
    movies: &'a [Movie],
    table_state: &'a mut TableState,
}

impl MovieGrid<'_> {
    fn goto_next(&mut self) {
        let len = self.movies.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.movies.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.movies.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.movies.is_empty() {
            self.table_state.select(Some(self.movies.len() - 1));
        }
    }

    fn current(&self) -> Option<&Movie> {
        self.table_state.selected().and_then(|i| self.movies.get(i))
    }
}
