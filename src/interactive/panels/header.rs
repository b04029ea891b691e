use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::client::Backend;
use crate::interactive::app::{AdminView, InteractiveApp, ResourceKind, Screen, SiteTab};

pub fn draw_header<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::Gray);

    let mut spans = vec![Span::styled(
        " C-Square ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    match app.screen {
        Screen::Site => {
            for tab in SiteTab::ALL {
                let style = if tab == app.site_tab { active } else { inactive };
                spans.push(Span::raw(" "));
                spans.push(Span::styled(format!(" {} ", tab.title()), style));
            }
        }
        Screen::Admin => {
            spans.push(Span::styled(" Admin ", Style::default().fg(Color::Yellow)));
            match app.admin_view {
                AdminView::Login => {
                    spans.push(Span::styled(" Login ", active));
                }
                view => {
                    let style = if view == AdminView::Dashboard { active } else { inactive };
                    spans.push(Span::styled(" Dashboard ", style));
                    for kind in ResourceKind::ALL {
                        let style = if view == AdminView::Manage(kind) { active } else { inactive };
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(format!(" {} ", kind.label()), style));
                    }
                }
            }
        }
    }

    if app.busy {
        spans.push(Span::styled("  ⟳ working...", Style::default().fg(Color::Yellow)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
