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

//! Result page navigation.
//!
//! The pager shows the current position in the remote result set and turns
//! navigation keys into a candidate page number. It does no range checking of
//! its own, the caller clamps the candidate.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    render::{
        Render,
        icons::{ICON_NEXT_PAGE, ICON_PREV_PAGE},
    },
    theme::Theme,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PagerAction {
    GoTo(u32),
}

pub(crate) struct Pager {
    page: u32,
    total_pages: u32,
}

impl Pager {
    pub(crate) fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    pub(crate) fn process_event(&self, event: &Event) -> Option<PagerAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let candidate = match key_event.code {
            KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
                self.page.saturating_add(1)
            }
            KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
                self.page.saturating_sub(1)
            }
            KeyCode::Home => 1,
            KeyCode::End => self.total_pages,
            _ => return None,
        };

        Some(PagerAction::GoTo(candidate))
    }
}

impl Render for Pager {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let arrow = |enabled: bool| {
            let colour = if enabled { theme.accent_colour } else { theme.muted_fg };
            Style::default().fg(colour)
        };

        let line = Line::from(vec![
            Span::styled(format!("{} ", ICON_PREV_PAGE), arrow(self.page > 1)),
            Span::raw("Page "),
            Span::styled(
                self.page.to_string(),
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" of "),
            Span::styled(
                self.total_pages.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", ICON_NEXT_PAGE), arrow(self.page < self.total_pages)),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn next_and_previous_are_relative_to_current_page() {
        let pager = Pager::new(3, 9);

        assert_eq!(pager.process_event(&key(KeyCode::Char('n'))), Some(PagerAction::GoTo(4)));
        assert_eq!(pager.process_event(&key(KeyCode::Right)), Some(PagerAction::GoTo(4)));
        assert_eq!(pager.process_event(&key(KeyCode::Char('p'))), Some(PagerAction::GoTo(2)));
        assert_eq!(pager.process_event(&key(KeyCode::Left)), Some(PagerAction::GoTo(2)));
    }

    #[test]
    fn first_and_last() {
        let pager = Pager::new(3, 9);

        assert_eq!(pager.process_event(&key(KeyCode::Home)), Some(PagerAction::GoTo(1)));
        assert_eq!(pager.process_event(&key(KeyCode::End)), Some(PagerAction::GoTo(9)));
    }

    #[test]
    fn candidates_are_not_clamped() {
        let last = Pager::new(9, 9);
        assert_eq!(last.process_event(&key(KeyCode::Char(']'))), Some(PagerAction::GoTo(10)));

        let first = Pager::new(1, 9);
        assert_eq!(first.process_event(&key(KeyCode::Char('['))), Some(PagerAction::GoTo(0)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let pager = Pager::new(1, 2);
        assert_eq!(pager.process_event(&key(KeyCode::Char('x'))), None);
    }
}
