use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::form::draw_fields;
use crate::client::Backend;
use crate::constants::{CARD_WIDTH, CAROUSEL_STEP};
use crate::formatting::{format_event_date, format_event_time, format_tags};
use crate::interactive::app::{InteractiveApp, SiteTab};
use crate::models::{Event, FacultyMentor, TeamMember};
use crate::sections::{DragScroll, Section, GALLERY_EMPTY, TEAM_EMPTY};

pub fn draw_site<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    match app.site_tab {
        SiteTab::Events => draw_events(frame, area, app),
        SiteTab::Team => {
            let block = section_block("Core Team");
            let cards: Vec<Card> = app.team.section.items().iter().map(team_card).collect();
            draw_carousel(frame, area, block, &app.team.section, &cards, &app.team.scroll, TEAM_EMPTY);
        }
        SiteTab::Faculty => {
            let block = section_block("Faculty Mentors");
            let cards: Vec<Card> = app.faculty.section.items().iter().map(faculty_card).collect();
            draw_carousel(frame, area, block, &app.faculty.section, &cards, &app.faculty.scroll, "");
        }
        SiteTab::Gallery => draw_gallery(frame, area, app),
        SiteTab::Contact => draw_contact(frame, area, app),
    }
}

fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan))
}

struct Card {
    title: String,
    lines: Vec<Line<'static>>,
}

fn event_card(event: &Event) -> Card {
    let mut when = format_event_date(&event.date);
    if let Some(time) = &event.time {
        when = format!("{} · {}", when, format_event_time(time));
    }

    let mut lines = vec![Line::from(Span::styled(when, Style::default().fg(Color::Yellow)))];
    if let Some(location) = &event.location {
        lines.push(Line::from(Span::styled(
            format!("@ {}", location),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(event.description.clone()));
    if !event.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format_tags(&event.tags),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(link) = &event.link {
        let text = event.link_text.clone().unwrap_or_else(|| "Learn more".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", text), Style::default().fg(Color::Gray)),
            Span::styled(link.clone(), Style::default().fg(Color::Blue)),
        ]));
    }

    Card {
        title: event.title.clone(),
        lines,
    }
}

fn team_card(member: &TeamMember) -> Card {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}]", member.avatar_initials()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(member.position.clone(), Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(member.bio.clone()),
    ];
    if let Some(photo) = &member.photo {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(photo.clone(), Style::default().fg(Color::Blue))));
    }
    Card {
        title: member.name.clone(),
        lines,
    }
}

fn faculty_card(mentor: &FacultyMentor) -> Card {
    Card {
        title: mentor.name.to_string(),
        lines: vec![
            Line::from(Span::styled(mentor.designation, Style::default().fg(Color::Green))),
            Line::from(""),
            Line::from(mentor.bio),
            Line::from(""),
            Line::from(Span::styled(mentor.linkedin, Style::default().fg(Color::Blue))),
        ],
    }
}

fn draw_events<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let title = format!("{} Events (t to switch)", app.events.tab.label());
    let cards: Vec<Card> = app.events.visible().into_iter().map(event_card).collect();
    let empty = app.events.empty_message();

    // A loaded list with nothing for this tab is still an empty state.
    let nothing_here: Section<Event> = Section::Empty;
    let section = match &app.events.carousel.section {
        Section::Ready(_) if cards.is_empty() => &nothing_here,
        other => other,
    };
    draw_carousel(
        frame,
        area,
        section_block(&title),
        section,
        &cards,
        &app.events.carousel.scroll,
        &empty,
    );
}

fn draw_carousel<T>(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    section: &Section<T>,
    cards: &[Card],
    scroll: &DragScroll,
    empty: &str,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match section {
        Section::Loading => return draw_message(frame, inner, "Loading...", Color::Yellow),
        Section::Empty => return draw_message(frame, inner, empty, Color::DarkGray),
        Section::Failed(message) => {
            return draw_message(frame, inner, &format!("Failed to load: {}", message), Color::Red)
        }
        Section::Ready(_) => {}
    }

    let offset = scroll.offset();
    for (index, card) in cards.iter().enumerate() {
        let start = index as i32 * CAROUSEL_STEP - offset;
        // Cards scrolled partly off the left edge are skipped whole.
        if start < 0 {
            continue;
        }
        if start >= i32::from(inner.width) {
            break;
        }
        let x = inner.x + start as u16;
        let width = CARD_WIDTH.min(inner.x + inner.width - x);
        let card_area = Rect::new(x, inner.y, width, inner.height.saturating_sub(1));

        let card_block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", card.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(if scroll.is_dragging() {
                Color::Yellow
            } else {
                Color::DarkGray
            }));
        let paragraph = Paragraph::new(card.lines.clone())
            .block(card_block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, card_area);
    }

    let hint = format!(
        " ◀ h/l ▶  drag to scroll  {}/{} ",
        cards.len().min(visible_from(offset) + 1),
        cards.len()
    );
    let hint_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        hint_area,
    );
}

fn visible_from(offset: i32) -> usize {
    ((offset + CAROUSEL_STEP - 1) / CAROUSEL_STEP).max(0) as usize
}

fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_gallery<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let block = section_block("Gallery");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = match &app.gallery {
        Section::Loading => return draw_message(frame, inner, "Loading...", Color::Yellow),
        Section::Empty => return draw_message(frame, inner, GALLERY_EMPTY, Color::DarkGray),
        Section::Failed(message) => {
            return draw_message(frame, inner, &format!("Failed to load: {}", message), Color::Red)
        }
        Section::Ready(items) => items,
    };

    let events = app.events.carousel.section.items();
    let rows: Vec<ListItem> = items
        .iter()
        .skip(app.gallery_offset)
        .map(|item| {
            let mut lines = vec![Line::from(Span::styled(
                item.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(event) = item.linked_event(events) {
                lines.push(Line::from(Span::styled(
                    format!("  from {}", event.title),
                    Style::default().fg(Color::Yellow),
                )));
            }
            if let Some(description) = &item.description {
                lines.push(Line::from(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", item.image_url),
                Style::default().fg(Color::Blue),
            )));
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(rows), inner);
}

fn draw_contact<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let block = section_block("Contact Us");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let intro = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 2);
    frame.render_widget(
        Paragraph::new("Have a question, want to join or collaborate? Send us a message.")
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        intro,
    );

    let fields_area = Rect::new(
        inner.x + 1,
        inner.y + 3,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(4),
    );
    draw_fields(frame, fields_area, &app.contact, app.contact_field);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visible_card_follows_offset() {
        assert_eq!(visible_from(0), 0);
        assert_eq!(visible_from(1), 1);
        assert_eq!(visible_from(CAROUSEL_STEP), 1);
        assert_eq!(visible_from(CAROUSEL_STEP + 1), 2);
    }
}
