//! Mouse press handling
//!
//! Presses are dispatched by rendered region. Option selection happens on
//! the press, not the release, so a blur racing ahead of the click cannot
//! hide the option first.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use crate::layout::{Region, region_at};

use super::state::App;

/// Handle a left mouse button press
pub fn handle_press(app: &mut App, mouse: MouseEvent, now: Instant) {
    match region_at(&app.regions, mouse.column, mouse.row) {
        Some(Region::ClearButton) => app.clear_input(),
        Some(Region::InputField) => app.typeahead.focus(),
        Some(Region::PanelOption(index)) => {
            if let Some(picked) = app.typeahead.press_option(index) {
                app.on_selected(picked);
            }
        }
        Some(Region::LoadMoreRow) => app.typeahead.load_more(),
        Some(Region::Panel) => {}
        // A press outside everything is a blur; the panel closes after the
        // grace delay
        None => app.typeahead.blur(now),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
