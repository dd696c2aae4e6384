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

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    components::Toaster,
    model::search::NoticeKind,
    render::{
        Render,
        icons::{ICON_ERROR, ICON_INFO, ICON_SUCCESS, ICON_WARNING},
    },
    theme::Theme,
};

const TOAST_HEIGHT: u16 = 3;
const TOAST_MAX_WIDTH: u16 = 60;

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Validation => ICON_WARNING,
        NoticeKind::Info => ICON_INFO,
        NoticeKind::Success => ICON_SUCCESS,
        NoticeKind::Error => ICON_ERROR,
    }
}

impl Render for Toaster {
    /// Stacks toasts upward from the bottom of `area`, newest lowest.
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = area.width.min(TOAST_MAX_WIDTH);
        let x = area.x + (area.width - width) / 2;
        let mut bottom = area.bottom();

        for toast in self.toasts().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            bottom -= TOAST_HEIGHT;

            let rect = Rect::new(x, bottom, width, TOAST_HEIGHT);
            let colour = theme.notice_colour(toast.notice.kind);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colour))
                .style(Style::default().bg(theme.panel_colour));

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", icon(toast.notice.kind)),
                    Style::default().fg(colour).add_modifier(Modifier::BOLD),
                ),
                Span::styled(toast.notice.message.as_str(), Style::default().fg(theme.input_fg)),
            ]);

            f.render_widget(Clear, rect);
            f.render_widget(Paragraph::new(line).block(block), rect);
        }
    }
}
