use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::form::draw_fields;
use crate::admin::{Events, Gallery, Resource, Team};
use crate::client::Backend;
use crate::formatting::{format_event_date, or_dash, truncate};
use crate::interactive::app::{AdminView, InteractiveApp, ResourceKind};
use crate::interactive::layout::{centered_popup, manage_layout};
use crate::models::EventType;

pub fn draw_admin<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    match app.admin_view {
        AdminView::Login => draw_login(frame, area, app),
        AdminView::Dashboard => draw_dashboard(frame, area, app),
        AdminView::Manage(kind) => draw_manage(frame, area, app, kind),
    }
}

fn draw_login<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let popup_area = centered_popup(56, 11, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Admin Login ")
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let used = draw_fields(
        frame,
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2),
        &app.credentials,
        app.login_field,
    );

    let mut lines = Vec::new();
    if let Some(secs) = app.lockout_secs {
        lines.push(Line::from(Span::styled(
            format!("Locked. Try again in {}:{:02}", secs / 60, secs % 60),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        let attempts = app.panel.session.failed_attempts();
        if attempts > 0 {
            lines.push(Line::from(Span::styled(
                format!("{} failed attempt(s)", attempts),
                Style::default().fg(Color::Yellow),
            )));
        }
    }
    if app.busy {
        lines.push(Line::from(Span::styled("Logging in...", Style::default().fg(Color::Yellow))));
    }
    lines.push(Line::from(Span::styled(
        "Enter: Log in  Tab: Next field  Esc: Back to site",
        Style::default().fg(Color::DarkGray),
    )));

    let status_area = Rect::new(
        inner.x + 1,
        inner.y + 2 + used,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2 + used),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), status_area);
}

fn draw_dashboard<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dashboard ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = app.panel.summary();
    let number = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<16}", "Events"), label),
            Span::styled(summary.total_events.to_string(), number),
            Span::styled(
                format!("  ({} upcoming, {} past)", summary.upcoming_events, summary.past_events),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<16}", "Team members"), label),
            Span::styled(summary.members.to_string(), number),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<16}", "Gallery photos"), label),
            Span::styled(summary.photos.to_string(), number),
        ]),
        Line::from(""),
    ];

    let mut upcoming: Vec<_> = app
        .panel
        .data
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Upcoming)
        .collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    if let Some(next) = upcoming.first() {
        lines.push(Line::from(vec![
            Span::styled("Next up: ", label),
            Span::styled(next.title.clone(), number),
            Span::styled(format!(" on {}", format_event_date(&next.date)), label),
        ]));
        lines.push(Line::from(""));
    }

    for (index, kind) in ResourceKind::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", index + 1), key),
            Span::styled(kind.title(), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  L  ", key),
        Span::styled("Log out", Style::default().fg(Color::White)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_manage<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>, kind: ResourceKind) {
    let (list_area, detail_area) = manage_layout(area);
    let records = app.records(kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", kind.title(), records.len()))
        .border_style(Style::default().fg(Color::Cyan));

    if records.is_empty() {
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing here yet. Press n to add one.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
    } else {
        let width = list_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = records
            .iter()
            .map(|(_, summary)| ListItem::new(truncate(summary, width)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(40, 44, 60))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(app.selected.min(records.len() - 1)));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    if detail_area.width > 0 {
        draw_detail(frame, detail_area, app, kind);
    }
}

fn draw_detail<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>, kind: ResourceKind) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let data = &app.panel.data;
    let rows: Vec<(&str, String)> = match kind {
        ResourceKind::Events => match Events::items(data).get(app.selected) {
            Some(event) => vec![
                ("Id", event.id.clone()),
                ("Type", event.event_type.label().to_string()),
                ("Date", event.date.clone()),
                ("Time", or_dash(event.time.as_deref())),
                ("Title", event.title.clone()),
                ("Location", or_dash(event.location.as_deref())),
                ("Image", or_dash(event.image.as_deref())),
                ("Link", or_dash(event.link.as_deref())),
                ("Link text", or_dash(event.link_text.as_deref())),
                ("Tags", event.tags.join(", ")),
                ("Description", event.description.clone()),
            ],
            None => Vec::new(),
        },
        ResourceKind::Team => match Team::items(data).get(app.selected) {
            Some(member) => vec![
                ("Id", member.id.clone()),
                ("Name", member.name.clone()),
                ("Position", member.position.clone()),
                ("Initials", member.initials.clone()),
                ("Photo", or_dash(member.photo.as_deref())),
                ("Bio", member.bio.clone()),
            ],
            None => Vec::new(),
        },
        ResourceKind::Gallery => match Gallery::items(data).get(app.selected) {
            Some(item) => vec![
                ("Id", item.id.clone()),
                ("Title", item.title.clone()),
                ("Image URL", item.image_url.clone()),
                (
                    "Event",
                    item.linked_event(&data.events)
                        .map(|e| e.title.clone())
                        .unwrap_or_else(|| or_dash(item.event_id.as_deref())),
                ),
                ("Description", or_dash(item.description.as_deref())),
            ],
            None => Vec::new(),
        },
    };

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: New  e: Edit  d: Delete  r: Refresh  Esc: Dashboard",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
