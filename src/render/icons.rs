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

//! Unicode symbols for the TUI.
//!
//! Chosen for compatibility with most modern terminal emulators and fonts.

pub(crate) const ICON_SEARCH: &str = "\u{2315}";
pub(crate) const ICON_STAR: &str = "\u{2605}";

pub(crate) const ICON_PREV_PAGE: &str = "\u{25C0}";
pub(crate) const ICON_NEXT_PAGE: &str = "\u{25B6}";

// Text-style variants (Variation Selector-15) so terminals draw these as
// monochrome glyphs that take the toast colour.
pub(crate) const ICON_WARNING: &str = "\u{26A0}\u{FE0E}";
pub(crate) const ICON_INFO: &str = "\u{2139}\u{FE0E}";
pub(crate) const ICON_SUCCESS: &str = "\u{2714}\u{FE0E}";
pub(crate) const ICON_ERROR: &str = "\u{2716}\u{FE0E}";

// Braille spinner frames for the loading indicator.
pub(crate) const SPINNER: [&str; 8] = [
    "\u{28F7}", "\u{28EF}", "\u{28DF}", "\u{287F}", "\u{28BF}", "\u{28FB}", "\u{28FD}", "\u{28FE}",
];
