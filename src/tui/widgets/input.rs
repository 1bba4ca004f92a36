//! Form field widget
//!
//! Renders one `FormField`: label, value and, when focused, the cursor.
//! Select fields show `< value >` and checkboxes `[x]`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::form::FormField;
use crate::models::FieldType;

/// Widget drawing a single form field on one line
pub struct FieldInput<'a> {
    field: &'a FormField,
    focused: bool,
    label_width: u16,
}

impl<'a> FieldInput<'a> {
    pub fn new(field: &'a FormField) -> Self {
        Self {
            field,
            focused: false,
            label_width: 0,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Pad labels to this width so values line up
    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    fn label(&self) -> String {
        let marker = if self.field.def.reqd { "*" } else { "" };
        format!("{}{}", self.field.def.label, marker)
    }

    fn value_spans(&self) -> Vec<Span<'a>> {
        let value = self.field.value();
        let value_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        match self.field.def.fieldtype {
            FieldType::Check => {
                let mark = if self.field.is_empty() { "[ ]" } else { "[x]" };
                vec![Span::styled(mark, value_style)]
            }
            FieldType::Select => {
                let shown = if value.is_empty() { "(choose)" } else { value };
                vec![Span::styled(format!("< {} >", shown), value_style)]
            }
            _ if value.is_empty() && !self.focused => {
                let placeholder = self.field.def.placeholder.clone().unwrap_or_default();
                vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
            }
            _ if self.focused => {
                let (before, at, after) = self.field.input.split_at_cursor();
                let cursor = at.map(String::from).unwrap_or_else(|| "_".to_string());
                vec![
                    Span::styled(before.to_string(), value_style),
                    Span::styled(cursor, Style::default().fg(Color::Black).bg(Color::Cyan)),
                    Span::styled(after.to_string(), value_style),
                ]
            }
            _ => vec![Span::styled(value.to_string(), value_style)],
        }
    }
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = self.label();
        let width = self.label_width.max(label.chars().count() as u16);

        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::raw(if self.focused { "> " } else { "  " }),
            Span::styled(format!("{:<width$}", label, width = width as usize), label_style),
            Span::raw(" : "),
        ];
        spans.extend(self.value_spans());

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldGroup;
    use crate::models::FieldDef;

    fn rendered(field: &FormField, focused: bool) -> String {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        FieldInput::new(field).focused(focused).label_width(8).render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_required_marker_and_value() {
        let mut group = FieldGroup::new(vec![FieldDef::new("item", "Item").required()]);
        group.set_value("item", "Widget").unwrap();

        let line = rendered(&group.fields()[0], false);
        assert!(line.contains("Item*"));
        assert!(line.contains("Widget"));
    }

    #[test]
    fn test_select_and_check_rendering() {
        let group = FieldGroup::new(vec![
            FieldDef::new("kind", "Kind")
                .fieldtype(FieldType::Select)
                .options(["A", "B"]),
            FieldDef::new("ok", "Ok").fieldtype(FieldType::Check),
        ]);

        assert!(rendered(&group.fields()[0], false).contains("< (choose) >"));
        assert!(rendered(&group.fields()[1], true).contains("[ ]"));
    }
}
