//! Mouse hover handling
//!
//! Hovering an option row tracks it as the highlighted option, matching
//! the keyboard highlight.

use ratatui::crossterm::event::MouseEvent;

use crate::layout::{Region, region_at};

use super::state::App;

/// Handle mouse movement
pub fn handle_hover(app: &mut App, mouse: MouseEvent) {
    if let Some(Region::PanelOption(index)) = region_at(&app.regions, mouse.column, mouse.row) {
        app.typeahead.hover_option(index);
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
