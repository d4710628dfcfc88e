use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::layout::LayoutRegions;
use crate::search::SearchOption;
use crate::typeahead::TypeaheadState;

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub typeahead: TypeaheadState,
    /// Rendered component positions, refreshed on every draw
    pub regions: LayoutRegions,
    /// First visible option row in the panel
    pub panel_scroll: usize,
    /// Keep running after a selection instead of exiting with it
    pub stay: bool,
    /// Most recent selection, printed on exit
    pub picked: Option<SearchOption>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance around a wired typeahead
    pub fn new(typeahead: TypeaheadState, stay: bool) -> Self {
        Self {
            textarea: new_input(),
            typeahead,
            regions: LayoutRegions::default(),
            panel_scroll: 0,
            stay,
            picked: None,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Advance timers and apply worker responses
    pub fn tick(&mut self, now: Instant) {
        self.typeahead.tick(now);
    }

    /// Timeout for the next event poll: the nearest typeahead deadline,
    /// capped so worker responses are still drained promptly
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        const IDLE_POLL: Duration = Duration::from_millis(50);
        self.typeahead
            .time_until_deadline(now)
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL))
    }

    /// Mirror an input edit into the typeahead
    pub fn sync_query(&mut self, now: Instant) {
        let query = self.query().to_string();
        self.typeahead.on_query_changed(&query, now);
    }

    /// Reset the input field to empty
    pub fn reset_input(&mut self) {
        self.textarea = new_input();
    }

    /// The explicit clear control: input text and typeahead state together
    pub fn clear_input(&mut self) {
        self.reset_input();
        self.typeahead.clear();
        self.panel_scroll = 0;
    }

    /// A selection was made; record it and apply the session policy
    pub fn on_selected(&mut self, picked: SearchOption) {
        // Under the clear-on-select policy the typeahead dropped its query;
        // the input field follows
        if self.typeahead.query().is_empty() {
            self.reset_input();
        }
        self.panel_scroll = 0;
        self.picked = Some(picked);
        if !self.stay {
            self.should_quit = true;
        }
    }
}

fn new_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    // Single-line query input
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());

    textarea
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
