use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::formatting::truncate;
use crate::forms::FormFields;

/// Draw one row per field, with a cursor on the active one. Returns the
/// number of rows used.
pub fn draw_fields(frame: &mut Frame, area: Rect, form: &dyn FormFields, active: usize) -> u16 {
    let label_width = form
        .fields()
        .iter()
        .map(|f| f.label.len() + 2)
        .max()
        .unwrap_or(10);
    let value_width = (area.width as usize).saturating_sub(label_width + 4);

    let mut rows = 0;
    for (index, field) in form.fields().iter().enumerate() {
        if rows >= area.height {
            break;
        }
        let is_active = index == active;

        let label_style = if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let raw = form.value(index);
        let shown = if field.secret {
            "*".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };

        let mut spans = vec![
            Span::styled(if is_active { "\u{25b6} " } else { "  " }, label_style),
            Span::styled(
                format!("{:<width$}", format!("{}{}", field.label, if field.required { "*" } else { "" }), width = label_width),
                label_style,
            ),
        ];

        if shown.is_empty() && !is_active && !field.hint.is_empty() {
            spans.push(Span::styled(
                truncate(field.hint, value_width),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let value = tail(&shown, value_width.saturating_sub(1));
            let style = if is_active {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(value, style));
            if is_active {
                spans.push(Span::styled(" ", Style::default().bg(Color::White)));
            }
        }

        let row = Rect::new(area.x, area.y + rows, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
        rows += 1;
    }
    rows
}

/// Keep the end of a long value visible while typing.
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        value.to_string()
    } else {
        value.chars().skip(count - width).collect()
    }
}
