use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::Screen;
use crate::interactive::layout::centered_popup;

const SITE_KEYS: &[(&str, &str)] = &[
    ("Tab", "Next section"),
    ("h/l", "Scroll cards"),
    ("mouse", "Drag to scroll"),
    ("j/k", "Scroll gallery"),
    ("t", "Upcoming/Past events"),
    ("a", "Admin panel"),
    ("r", "Reload"),
];

const ADMIN_KEYS: &[(&str, &str)] = &[
    ("1-3", "Manage events/team/gallery"),
    ("j/k", "Move up/down"),
    ("n", "New record"),
    ("e", "Edit record"),
    ("d", "Delete record"),
    ("r", "Refresh"),
    ("L", "Log out"),
    ("s", "Back to site"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab", "Next field"),
    ("S-Tab", "Previous field"),
    ("Enter", "Submit"),
    ("Esc", "Cancel"),
];

/// Draw the keyboard shortcuts overlay for the current screen.
pub fn draw(frame: &mut Frame, area: Rect, screen: Screen) {
    let (title, keys) = match screen {
        Screen::Site => ("Site", SITE_KEYS),
        Screen::Admin => ("Admin", ADMIN_KEYS),
    };

    let height = keys.len().max(FORM_KEYS.len()) as u16 + 6;
    let popup_area = centered_popup(66, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<36}", title), header_style),
            Span::styled("Forms", header_style),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<36}", "\u{2500}".repeat(10)), Style::default().fg(Color::DarkGray)),
            Span::styled("\u{2500}".repeat(6), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    for row in 0..keys.len().max(FORM_KEYS.len()) {
        let mut spans = Vec::new();
        match keys.get(row) {
            Some((key, desc)) => {
                spans.push(Span::styled(format!("{:<7}", key), key_style));
                spans.push(Span::styled(format!("{:<29}", desc), desc_style));
            }
            None => spans.push(Span::raw(format!("{:<36}", ""))),
        }
        if let Some((key, desc)) = FORM_KEYS.get(row) {
            spans.push(Span::styled(format!("{:<7}", key), key_style));
            spans.push(Span::styled(*desc, desc_style));
        }
        lines.push(Line::from(spans));
    }

    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(inner.x + 1, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "q/Ctrl-C quits. Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
        footer_area,
    );
}
