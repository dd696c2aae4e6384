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

//! Interactive and presentational UI components.
//!
//! Each component takes the data it shows from its caller and reports user
//! intent back as a small action enum. None of them own application state,
//! the search session decides what an action means.

mod movie_grid;
mod movie_modal;
mod pager;
mod search_bar;
pub(crate) mod status;
mod toaster;

pub(crate) use movie_grid::{MovieGrid, MovieGridAction, MovieGridState};
pub(crate) use movie_modal::{MovieModal, MovieModalAction};
pub(crate) use pager::{Pager, PagerAction};
pub(crate) use search_bar::{SearchBar, SearchBarAction};
pub(crate) use toaster::Toaster;
