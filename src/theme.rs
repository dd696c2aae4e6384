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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

use crate::model::search::NoticeKind;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) input_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_year_fg: Color,
    pub(crate) table_rating_fg: Color,
    pub(crate) table_votes_fg: Color,

    pub(crate) toast_validation_colour: Color,
    pub(crate) toast_info_colour: Color,
    pub(crate) toast_success_colour: Color,
    pub(crate) toast_error_colour: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 24, 38),
            panel_colour: Color::Rgb(30, 35, 54),
            accent_colour: Color::Rgb(1, 180, 228),
            border_colour: Color::Rgb(102, 102, 102),
            highlight_colour: Color::Rgb(13, 37, 63),
            muted_fg: Color::Rgb(140, 146, 160),
            input_fg: Color::Rgb(230, 230, 235),
            error_fg: Color::Rgb(239, 83, 80),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_year_fg: Color::Rgb(162, 161, 166),
            table_rating_fg: Color::Rgb(144, 206, 161),
            table_votes_fg: Color::Rgb(162, 161, 166),

            toast_validation_colour: Color::Rgb(250, 189, 47),
            toast_info_colour: Color::Rgb(1, 180, 228),
            toast_success_colour: Color::Rgb(76, 175, 80),
            toast_error_colour: Color::Rgb(239, 83, 80),
        }
    }

    pub(crate) fn notice_colour(&self, kind: NoticeKind) -> Color {
        match kind {
            NoticeKind::Validation => self.toast_validation_colour,
            NoticeKind::Info => self.toast_info_colour,
            NoticeKind::Success => self.toast_success_colour,
            NoticeKind::Error => self.toast_error_colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via an
    /// OSC escape sequence.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(1, 180, 228)), "#01b4e4");
    }

    #[test]
    fn every_notice_kind_has_its_own_colour() {
        let theme = Theme::default();
        let colours = [
            theme.notice_colour(NoticeKind::Validation),
            theme.notice_colour(NoticeKind::Info),
            theme.notice_colour(NoticeKind::Success),
            theme.notice_colour(NoticeKind::Error),
        ];

        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
