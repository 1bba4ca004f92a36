//! Slide body view
//!
//! Shows the active form with its "Add More" hint and error line, or the
//! done state with numbered follow-up actions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::FieldInput;
use crate::wizard::{Slide, SlidePhase};

/// Render the current slide
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let slide = app.dialog.sequence().current();

    let mut heading = vec![Line::from(Span::styled(
        slide.descriptor().title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(help) = &slide.descriptor().help {
        heading.push(Line::from(Span::styled(
            help.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(heading.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(heading).wrap(Wrap { trim: true }), chunks[0]);

    match slide.phase() {
        SlidePhase::Done => render_done(frame, slide, chunks[1]),
        _ => render_form(frame, slide, chunks[1]),
    }
}

fn render_form(frame: &mut Frame, slide: &Slide, area: Rect) {
    let Some(form) = slide.form() else {
        return;
    };

    let fields = form.fields();
    let label_width = fields
        .iter()
        .map(|f| f.def.label.chars().count() as u16 + 1)
        .max()
        .unwrap_or(0);

    // keep the focused field on screen
    let rows = area.height.saturating_sub(2) as usize;
    let offset = (form.focus_index() + 1).saturating_sub(rows);

    for (row, (index, field)) in fields.iter().enumerate().skip(offset).take(rows).enumerate() {
        let line = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(
            FieldInput::new(field)
                .focused(index == form.focus_index())
                .label_width(label_width),
            line,
        );
    }

    let mut notes = Vec::new();
    if slide.can_add_more() {
        notes.push(Span::styled("[Ctrl+N] Add More", Style::default().fg(Color::Cyan)));
        notes.push(Span::raw("  "));
    }
    if let Some(message) = slide.error().or_else(|| form.message()) {
        notes.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }
    if !notes.is_empty() && area.height > 0 {
        let line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(notes)), line);
    }
}

fn render_done(frame: &mut Frame, slide: &Slide, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Completed!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, action) in slide.done_actions().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(action.label.clone()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
