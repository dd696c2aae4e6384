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

//! Placeholders for the results area when there is no grid to show.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{render::icons::SPINNER, theme::Theme};

pub(crate) fn draw_loader(f: &mut Frame, area: Rect, theme: &Theme, frame: usize) {
    let spinner = SPINNER[frame % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(theme.accent_colour)),
        Span::styled(" Searching...", Style::default().fg(theme.muted_fg)),
    ]);

    draw_centred(f, area, Paragraph::new(line));
}

pub(crate) fn draw_error(f: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let text = vec![
        Line::from(Span::styled(
            "Search failed",
            Style::default()
                .fg(theme.error_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(theme.muted_fg))),
    ];

    draw_centred(f, area, Paragraph::new(text).wrap(Wrap { trim: true }));
}

pub(crate) fn draw_hint(f: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let line = Line::from(Span::styled(message, Style::default().fg(theme.muted_fg)));
    draw_centred(f, area, Paragraph::new(line));
}

fn draw_centred(f: &mut Frame, area: Rect, paragraph: Paragraph<'_>) {
    let [row] = Layout::vertical([Constraint::Length(2)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);

    f.render_widget(paragraph.alignment(Alignment::Center), row);
}
