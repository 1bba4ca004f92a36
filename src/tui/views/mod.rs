//! TUI views
//!
//! The wizard modal: header, progress strip, slide body, footer, and the
//! "Please wait" overlay while a call is running.

pub mod footer;
pub mod progress;
pub mod slide;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::{centered_rect, centered_rect_fixed, WizardLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", app.dialog.title()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = WizardLayout::new(inner);

    render_header(frame, app, layout.header);
    progress::render_dots(frame, app, layout.dots);
    progress::render_gauge(frame, app, layout.gauge);
    slide::render(frame, app, layout.body);
    footer::render(frame, app, layout.footer);
    footer::render_status(frame, app, layout.status);

    if app.is_frozen() {
        render_wait(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let sequence = app.dialog.sequence();
    let mut spans = vec![Span::styled(
        format!("Step {} of {}", sequence.current_index() + 1, sequence.len()),
        Style::default().fg(Color::White),
    )];

    if app.dialog.dismiss_visible() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("[Ctrl+D] {}", app.dialog.dismiss_label()),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_wait(frame: &mut Frame) {
    let area = centered_rect_fixed(24, 3, frame.area());
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new("Please wait...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
