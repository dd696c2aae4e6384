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

//! Movie detail overlay.
//!
//! A modal view of a single movie. It is only constructed while a movie is
//! selected, captures every key while shown, and reports a single dismissal
//! action.

mod render;

use crossterm::event::{Event, KeyCode};

use crate::model::Movie;

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MovieModalAction {
    Close,
}

pub(crate) struct MovieModal<'a> {
    movie: &'a Movie,
}

impl<'a> MovieModal<'a> {
    pub(crate) fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    pub(crate) fn process_event(&self, event: &Event) -> Option<MovieModalAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(MovieModalAction::Close),
                _ => None,
            },
            _ => None,
        }
    }

    fn poster_url(&self) -> Option<String> {
        self.movie
            .poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", POSTER_BASE_URL, p))
    }
}
