//! Footer: navigation controls, primary button and status line

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::SlidePhase;

/// Render Previous / Create / Next, showing only what applies
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let sequence = app.dialog.sequence();
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if sequence.prev_visible() {
        spans.push(Span::styled("[PgUp] Previous", enabled));
        spans.push(Span::raw("   "));
    }

    if sequence.current().phase() == SlidePhase::Active {
        let style = if app.dialog.primary_enabled() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            disabled
        };
        spans.push(Span::styled(format!("[Enter] {}", app.dialog.primary_label()), style));
        spans.push(Span::raw("   "));
    }

    if sequence.next_visible() {
        spans.push(Span::styled("[PgDn] Next", enabled));
        spans.push(Span::raw("   "));
    }

    spans.push(Span::styled("[Esc] Quit", disabled));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the transient status message
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, area);
    }
}
