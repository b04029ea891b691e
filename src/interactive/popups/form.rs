use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::FormPopup;
use crate::interactive::layout::centered_popup;
use crate::interactive::panels::form::draw_fields;

/// Create/edit dialog for an events, team or gallery record.
pub fn draw(frame: &mut Frame, area: Rect, popup: &FormPopup, busy: bool) {
    let fields = popup.form.fields();
    let height = fields.fields().len() as u16 + 5;
    let popup_area = centered_popup(72, height, area);

    frame.render_widget(Clear, popup_area);

    let title = match popup.editing {
        Some(_) => format!(" Edit {} ", popup.kind.label()),
        None => format!(" New {} ", popup.kind.label()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let fields_area = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    draw_fields(frame, fields_area, fields, popup.active);

    let hint = if busy {
        Span::styled("Saving...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Tab: Next field  Enter: Save  Esc: Cancel  (* required)",
            Style::default().fg(Color::DarkGray),
        )
    };
    let hint_area = Rect::new(
        inner.x + 1,
        inner.y + inner.height.saturating_sub(1),
        inner.width.saturating_sub(2),
        1,
    );
    frame.render_widget(Paragraph::new(Line::from(hint)), hint_area);
}
