//! Layout definitions for the TUI
//!
//! The demo modal is a bordered box centered over the landing screen with a
//! stepper header, the step body and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Largest size the demo modal grows to
const MODAL_WIDTH: u16 = 96;
const MODAL_HEIGHT: u16 = 32;

/// Layout regions of the demo modal
pub struct DemoLayout {
    /// Outer frame of the modal
    pub modal: Rect,
    /// Step labels
    pub stepper: Rect,
    /// Active step content
    pub body: Rect,
    /// Key hints at the bottom
    pub status_bar: Rect,
}

impl DemoLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let modal = centered_rect_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
        let inner = Rect {
            x: modal.x + 1,
            y: modal.y + 1,
            width: modal.width.saturating_sub(2),
            height: modal.height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Stepper
                Constraint::Min(5),    // Step body
                Constraint::Length(1), // Status bar
            ])
            .split(inner);

        Self {
            modal,
            stepper: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect, shrunk to fit small terminals
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Top-right corner area for toast notifications
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(96, 32, area);
        assert_eq!(rect, area);

        let rect = centered_rect_fixed(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_demo_layout_stacks_regions() {
        let layout = DemoLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.modal.width, MODAL_WIDTH);
        assert_eq!(layout.stepper.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.stepper.y + 3, layout.body.y);
        assert_eq!(layout.body.y + layout.body.height, layout.status_bar.y);
    }

    #[test]
    fn test_toast_rect_hugs_top_right() {
        let rect = toast_rect(30, 4, Rect::new(0, 0, 100, 20));
        assert_eq!(rect, Rect::new(70, 0, 30, 4));
    }
}
