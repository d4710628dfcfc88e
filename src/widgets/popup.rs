use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect for a dropdown panel anchored under `anchor`, clipped to the frame
pub fn dropdown_below_anchor(anchor: Rect, height: u16, frame_area: Rect) -> Rect {
    let top = anchor.y.saturating_add(anchor.height);
    let available = frame_area.bottom().saturating_sub(top);

    Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
