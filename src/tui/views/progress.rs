//! Progress dots and completion gauge

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::ProgressDot;

fn dot_span(dot: &ProgressDot) -> Span<'static> {
    let (symbol, color) = match (dot.active, dot.done) {
        (true, true) => ("◉", Color::Green),
        (true, false) => ("●", Color::Cyan),
        (false, true) => ("✓", Color::Green),
        (false, false) => ("○", Color::DarkGray),
    };
    let mut style = Style::default().fg(color);
    if dot.active {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

/// Render one dot per slide, with F-key hints when dots can be clicked
pub fn render_dots(frame: &mut Frame, app: &App, area: Rect) {
    let dots = app.dialog.sequence().progress_dots();
    let clickable = dots.first().map(|d| d.clickable).unwrap_or(false);

    let mut spans = Vec::new();
    for dot in &dots {
        spans.push(dot_span(dot));
        spans.push(Span::raw(" "));
    }
    if clickable && dots.len() > 1 {
        spans.push(Span::styled(
            format!("  [F1-F{}] jump", dots.len().min(9)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the aggregate completion bar
pub fn render_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let percent = app.dialog.progress();
    let color = if percent == 100 { Color::Green } else { Color::Cyan };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(u16::from(percent))
        .label(format!("{}% complete", percent));
    frame.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_symbols() {
        let dot = |active, done| ProgressDot {
            index: 0,
            active,
            done,
            clickable: true,
        };
        assert_eq!(dot_span(&dot(true, false)).content, "●");
        assert_eq!(dot_span(&dot(false, true)).content, "✓");
        assert_eq!(dot_span(&dot(false, false)).content, "○");
    }
}
