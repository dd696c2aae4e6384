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

//! Render the movie detail overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::MovieModal,
    render::{Render, icons::ICON_STAR},
    theme::Theme,
    util::{
        format::{format_rating, format_votes},
        layout::centered,
    },
};

impl Render for MovieModal<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered(area, Constraint::Percentage(70), Constraint::Percentage(70));
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.panel_colour))
            .title(format!(" {} ", self.movie.title))
            .title_bottom(Line::from(" Esc close ").right_aligned())
            .padding(Padding::uniform(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let label = Style::default().fg(theme.muted_fg);
        let value = Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD);

        let release = self
            .movie
            .release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("unknown");
        let language = self.movie.original_language.as_deref().unwrap_or("-");

        let facts = Line::from(vec![
            Span::styled("Released ", label),
            Span::styled(release, value),
            Span::styled("   Language ", label),
            Span::styled(language, value),
        ]);
        f.render_widget(Paragraph::new(facts), chunks[0]);

        let rating = Line::from(vec![
            Span::styled(format!("{} ", ICON_STAR), value),
            Span::styled(format_rating(self.movie.vote_average), value),
            Span::styled(" / 10 from ", label),
            Span::styled(format_votes(self.movie.vote_count), value),
            Span::styled(" votes", label),
        ]);
        f.render_widget(Paragraph::new(rating), chunks[1]);

        let overview = if self.movie.overview.is_empty() {
            "No overview available."
        } else {
            self.movie.overview.as_str()
        };
        f.render_widget(
            Paragraph::new(overview)
                .style(Style::default().fg(theme.input_fg))
                .wrap(Wrap { trim: true }),
            chunks[3],
        );

        if let Some(url) = self.poster_url() {
            let poster = Line::from(vec![Span::styled("Poster ", label), Span::raw(url)]);
            f.render_widget(Paragraph::new(poster), chunks[4]);
        }
    }
}
