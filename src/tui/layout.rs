//! Layout definitions for the TUI
//!
//! The wizard is a single centered modal split into header, progress,
//! body and footer rows.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions inside the wizard modal
pub struct WizardLayout {
    /// Title line and dismiss hint
    pub header: Rect,
    /// Progress dots
    pub dots: Rect,
    /// Completion gauge
    pub gauge: Rect,
    /// Slide body
    pub body: Rect,
    /// Navigation and primary button
    pub footer: Rect,
    /// Status message line
    pub status: Rect,
}

impl WizardLayout {
    /// Calculate layout from the modal's inner area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Dots
                Constraint::Length(1), // Gauge
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status
            ])
            .split(area);

        Self {
            header: chunks[0],
            dots: chunks[1],
            gauge: chunks[2],
            body: chunks[3],
            footer: chunks[4],
            status: chunks[5],
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

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 80, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 40);
        assert_eq!(rect.x, 20);
    }

    #[test]
    fn test_fixed_rect_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_fixed(40, 5, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 2);
    }

    #[test]
    fn test_wizard_layout_rows() {
        let layout = WizardLayout::new(Rect::new(0, 0, 60, 20));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.body.height, 15);
        assert_eq!(layout.status.y, 19);
    }
}
