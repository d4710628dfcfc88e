//! Application rendering
//!
//! Draws the query input, the suggestion panel anchored under it, the
//! selected-record summary and the status line, and records where each
//! interactive region landed for mouse dispatch.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::widgets::popup;

use super::state::App;

// Suggestion panel display constants
const MAX_VISIBLE_OPTIONS: usize = 8;
const PANEL_BORDER_HEIGHT: u16 = 2;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Selected-record summary
            Constraint::Length(1), // Status line
        ])
        .split(frame_area);

        let input_area = layout[0];
        let summary_area = layout[1];
        let status_area = layout[2];

        self.render_summary(frame, summary_area);
        self.render_status(frame, status_area);
        self.render_input(frame, input_area);
        // The panel overlays the summary, anchored under the input
        self.render_panel(frame, input_area, frame_area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
        self.regions.input = Some(area);

        // The "✕" clear control, only while there is text to clear
        if !self.query().is_empty() && area.width > 4 && area.height > 2 {
            let rect = Rect::new(area.right().saturating_sub(2), area.y + 1, 1, 1);
            frame.render_widget(
                Paragraph::new("✕").style(Style::default().fg(Color::DarkGray)),
                rect,
            );
            self.regions.clear_button = Some(rect);
        } else {
            self.regions.clear_button = None;
        }
    }

    fn render_panel(&mut self, frame: &mut Frame, anchor: Rect, frame_area: Rect) {
        if !self.typeahead.is_open() {
            self.regions.clear_panel();
            return;
        }

        let option_count = self.typeahead.options().len();
        let loading = self.typeahead.is_loading();
        let message_row = option_count == 0;
        let visible = option_count.min(MAX_VISIBLE_OPTIONS);
        let load_more_visible = self.typeahead.has_more() && !message_row;

        let mut rows = if message_row { 1 } else { visible as u16 };
        if load_more_visible {
            rows += 1;
        }

        let panel_area =
            popup::dropdown_below_anchor(anchor, rows + PANEL_BORDER_HEIGHT, frame_area);
        if panel_area.height <= PANEL_BORDER_HEIGHT {
            self.regions.clear_panel();
            return;
        }

        if !message_row {
            self.ensure_highlight_visible(visible);
        }

        popup::clear_area(frame, panel_area);

        let max_label_width = panel_area.width.saturating_sub(2) as usize;
        let mut items: Vec<ListItem> = Vec::new();

        if message_row {
            let text = if loading { "Loading…" } else { "No results." };
            items.push(ListItem::new(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            ))));
        } else {
            let highlight = self.typeahead.highlight();
            for (index, option) in self
                .typeahead
                .options()
                .iter()
                .enumerate()
                .skip(self.panel_scroll)
                .take(visible)
            {
                let style = if highlight == Some(index) {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    truncate_label(&option.label, max_label_width),
                    style,
                ))));
            }
            if load_more_visible {
                let text = if loading { "Loading…" } else { "Load more" };
                items.push(ListItem::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::Cyan),
                ))));
            }
        }

        let title = match self.typeahead.total_count() {
            Some(total) => format!(" Results {option_count}/{total} "),
            None => " Results ".to_string(),
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, panel_area);

        let inner_y = panel_area.y + 1;
        self.regions.panel = Some(panel_area);
        if message_row {
            self.regions.option_rows = None;
            self.regions.load_more_row = None;
            self.regions.first_visible = 0;
        } else {
            self.regions.option_rows = Some((inner_y, visible as u16));
            self.regions.load_more_row = load_more_visible.then(|| inner_y + visible as u16);
            self.regions.first_visible = self.panel_scroll;
        }
    }

    /// Scroll the panel window so the highlighted option is visible
    fn ensure_highlight_visible(&mut self, visible: usize) {
        let max_scroll = self
            .typeahead
            .options()
            .len()
            .saturating_sub(visible);
        if self.panel_scroll > max_scroll {
            self.panel_scroll = max_scroll;
        }
        if let Some(h) = self.typeahead.highlight() {
            if h < self.panel_scroll {
                self.panel_scroll = h;
            } else if h >= self.panel_scroll + visible {
                self.panel_scroll = h + 1 - visible;
            }
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selected ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = match self.typeahead.selected() {
            Some(option) => {
                let pretty = serde_json::to_string_pretty(&option.record)
                    .unwrap_or_else(|_| option.record.to_string());
                format!("{}  (id {})\n\n{}", option.label, option.id, pretty)
            }
            None => "Nothing selected yet.\nType to search; Enter picks the highlighted match."
                .to_string(),
        };

        frame.render_widget(Paragraph::new(content).block(block), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = "Enter select · Esc close/quit · PgDn load more · Ctrl+U clear";
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

/// Clamp a label to the panel's inner width, ellipsizing display columns
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
