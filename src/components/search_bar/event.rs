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

//! Input handling for the search bar.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchBar, SearchBarAction};

impl SearchBar {
    /// Feeds a terminal event to the search box.
    ///
    /// Enter submits the trimmed draft and Esc gives up focus, every other key
    /// edits the draft. The draft is kept after submission so the query can be
    /// refined.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchBarAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(SearchBarAction::Submit(self.value().trim().to_string())),

            KeyCode::Esc => Some(SearchBarAction::Cancel),

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_input::Input;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_edits_the_draft_without_submitting() {
        let mut bar = SearchBar::new();

        for c in "heat".chars() {
            assert_eq!(bar.process_event(&key(KeyCode::Char(c))), None);
        }
        assert_eq!(bar.process_event(&key(KeyCode::Backspace)), None);

        assert_eq!(bar.value(), "hea");
    }

    #[test]
    fn enter_submits_trimmed_draft() {
        let mut bar = SearchBar::new();
        bar.input = Input::new("  batman  ".to_string());

        let action = bar.process_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(SearchBarAction::Submit("batman".to_string())));
        assert_eq!(bar.value(), "  batman  ");
    }

    #[test]
    fn whitespace_only_draft_is_still_submitted() {
        let mut bar = SearchBar::new();
        bar.input = Input::new("   ".to_string());

        let action = bar.process_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(SearchBarAction::Submit(String::new())));
    }

    #[test]
    fn escape_cancels() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.process_event(&key(KeyCode::Esc)), Some(SearchBarAction::Cancel));
    }
}
