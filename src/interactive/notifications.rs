use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::NOTICE_TTL;
use crate::interactive::app::Notice;
use crate::status::StatusKind;

pub fn draw(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else { return };
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (icon, color) = match notice.status.kind {
        StatusKind::Success => ("✓", Color::Green),
        StatusKind::Error => ("✗", Color::Red),
        StatusKind::Info => ("ⓘ", Color::Blue),
    };
    let timer = match notice.status.kind {
        StatusKind::Error => String::new(),
        _ => {
            let remaining = NOTICE_TTL
                .as_secs()
                .saturating_sub(notice.created_at.elapsed().as_secs());
            format!("[{}s]", remaining)
        }
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(notice.status.message.clone(), Style::default().fg(color)),
        Span::styled(format!("  {}", timer), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}
