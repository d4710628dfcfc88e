//! Layout module for tracking UI component regions
//!
//! Tracks where components were rendered so mouse events can be dispatched
//! by position. Regions are refreshed on every draw; `region_at()` answers
//! which component is under a given screen cell.

use ratatui::layout::{Position, Rect};

/// A hit-testable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// The "✕" control inside the input field
    ClearButton,
    /// One option row, by absolute index into the fetched options
    PanelOption(usize),
    /// The "Load more" row at the bottom of the panel
    LoadMoreRow,
    /// Inside the panel but not on an interactive row
    Panel,
}

/// Where everything was rendered on the last draw
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub panel: Option<Rect>,
    /// First option row y and number of visible option rows
    pub option_rows: Option<(u16, u16)>,
    /// y of the "Load more" row, when rendered
    pub load_more_row: Option<u16>,
    /// Index of the first visible option (panel scroll offset)
    pub first_visible: usize,
}

impl LayoutRegions {
    /// Forget panel geometry when the panel is not rendered
    pub fn clear_panel(&mut self) {
        self.panel = None;
        self.option_rows = None;
        self.load_more_row = None;
        self.first_visible = 0;
    }
}

/// Determine which component is at the given screen position
///
/// The clear button sits inside the input rect, so it is probed first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if let Some(rect) = regions.clear_button
        && rect.contains(position)
    {
        return Some(Region::ClearButton);
    }

    if let Some(rect) = regions.input
        && rect.contains(position)
    {
        return Some(Region::InputField);
    }

    if let Some(rect) = regions.panel
        && rect.contains(position)
    {
        if regions.load_more_row == Some(row) {
            return Some(Region::LoadMoreRow);
        }
        if let Some((first_y, count)) = regions.option_rows
            && row >= first_y
            && row < first_y + count
        {
            let index = regions.first_visible + (row - first_y) as usize;
            return Some(Region::PanelOption(index));
        }
        return Some(Region::Panel);
    }

    None
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
