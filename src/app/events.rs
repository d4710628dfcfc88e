use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::mouse_hover;
use super::state::App;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only key press events, to avoid duplicates on release/repeat
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::FocusGained => self.typeahead.focus(),
            Event::FocusLost => self.typeahead.blur(now),
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => self.typeahead.move_highlight_down(),
            KeyCode::Up => self.typeahead.move_highlight_up(),
            KeyCode::Enter => {
                if let Some(picked) = self.typeahead.select_highlighted() {
                    self.on_selected(picked);
                }
            }
            KeyCode::Esc => {
                // First Esc closes the panel, the next one exits
                if self.typeahead.is_open() {
                    self.typeahead.escape();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::PageDown => self.typeahead.load_more(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_input();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                if self.textarea.input(key) {
                    self.sync_query(now);
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            // Selection commits on the press phase, before any blur lands
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_press(self, mouse, now),
            MouseEventKind::Moved => mouse_hover::handle_hover(self, mouse),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
