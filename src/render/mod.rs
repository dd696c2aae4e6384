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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management and terminal frame composition, while each component draws
//! itself.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Drawing reads state only, it never raises notices
//! or changes the search session.

pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    components::{MovieModal, Pager, status},
    events::Focus,
    model::search::FetchState,
    theme::Theme,
};

const IDLE_HINT: &str = "Press / to search, then Enter to look up a title";
const EMPTY_HINT: &str = "No movies found.";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the search bar, the results area, the pager and
/// a one line key help footer. The detail overlay and any toasts are drawn
/// last, on top of everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let overlay_shown = app.session.selected().is_some();
    let search_focused = app.focus == Focus::SearchInput && !overlay_shown;
    app.search_bar.draw(f, outer[0], &app.theme, search_focused);

    draw_results(f, outer[1], app);

    if app.session.total_pages() > 1 {
        Pager::new(app.session.page(), app.session.total_pages()).draw(f, outer[2], &app.theme);
    }

    draw_help(f, outer[3], app, overlay_shown);

    if let Some(movie) = app.session.selected() {
        MovieModal::new(movie).draw(f, area, &app.theme);
    }

    app.toaster.draw(f, outer[1], &app.theme);
}

fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let border_colour = if app.focus == Focus::Results {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let title = if app.session.is_loading() {
        " Results (loading) "
    } else {
        " Results "
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .title(title)
        .padding(Padding::horizontal(1));

    if let Some(page) = app.session.visible_page() {
        if !app.session.query().is_empty() {
            block = block.title(
                Line::from(format!(" \"{}\" {} found ", app.session.query(), page.total_results))
                    .right_aligned(),
            );
        }
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.session.state() {
        FetchState::Idle => status::draw_hint(f, inner, theme, IDLE_HINT),
        FetchState::Loading { placeholder: None } => status::draw_loader(f, inner, theme, app.frame),
        FetchState::Error(message) => status::draw_error(f, inner, theme, message),
        FetchState::Success(page) if page.results.is_empty() => {
            status::draw_hint(f, inner, theme, EMPTY_HINT)
        }
        FetchState::Success(_) | FetchState::Loading { placeholder: Some(_) } => app
            .movie_grid
            .as_widget(app.session.results())
            .draw(f, inner, &app.theme),
    }
}

fn draw_help(f: &mut Frame, area: Rect, app: &App, overlay_shown: bool) {
    let bindings: &[(&str, &str)] = if overlay_shown {
        &[("Esc", "close")]
    } else {
        match app.focus {
            Focus::SearchInput => &[("Enter", "search"), ("Esc", "results"), ("Ctrl-C", "quit")],
            Focus::Results if app.session.total_pages() > 1 => &[
                ("j/k", "move"),
                ("Enter", "details"),
                ("n/p", "page"),
                ("/", "search"),
                ("q", "quit"),
            ],
            Focus::Results => &[("j/k", "move"), ("Enter", "details"), ("/", "search"), ("q", "quit")],
        }
    };

    let key_style = Style::default()
        .fg(app.theme.accent_colour)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.muted_fg);

    let spans: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key} "), key_style),
                Span::styled(format!("{action}  "), text_style),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
