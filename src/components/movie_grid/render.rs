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

//! UI rendering logic for the movie grid.
//!
//! This module handles the visual representation of search results, including
//! column layout, cursor highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::MovieGrid,
    render::Render,
    theme::Theme,
    util::format::{format_rating, format_votes},
};

impl Render for MovieGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.movies.iter().map(|item| {
            let year = item.release_year().unwrap_or("----");

            Row::new(vec![
                Cell::from(Line::from(item.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(year).style(Style::default().fg(theme.table_year_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(format_rating(item.vote_average)).style(Style::default().fg(theme.table_rating_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(format_votes(item.vote_count)).style(Style::default().fg(theme.table_votes_fg)).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
                Cell::from(Line::from("Rating").alignment(Alignment::Right)),
                Cell::from(Line::from("Votes").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_colour).fg(Color::White))
        .column_spacing(2)
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
