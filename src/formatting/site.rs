use colored::*;
use serde::Serialize;

use super::utils::*;
use crate::admin::DashboardSummary;
use crate::error::ClubResult;
use crate::models::{Event, EventType, FacultyMentor, GalleryItem, TeamMember};
use crate::status::{Status, StatusKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Cards,
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Cards,
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ClubResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_status(status: &Status) {
    match status.kind {
        StatusKind::Success => println!("{} {}", "✓".green(), status.message.green()),
        StatusKind::Error => eprintln!("{} {}", "✗".red(), status.message.red()),
        StatusKind::Info => println!("{}", status.message.cyan()),
    }
}

pub fn print_events(events: &[Event], format: OutputFormat, empty: &str) -> ClubResult<()> {
    if format == OutputFormat::Json {
        return print_json(events);
    }
    if events.is_empty() {
        println!("{}", empty.dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<26} {:<10} {:<14} {:<8} {:<40}",
                "ID".bold(),
                "Type".bold(),
                "Date".bold(),
                "Time".bold(),
                "Title".bold()
            );
            println!("{}", "─".repeat(100).dimmed());
            for event in events {
                println!(
                    "{:<26} {:<10} {:<14} {:<8} {:<40}",
                    truncate(&event.id, 26).blue(),
                    format_event_type(event.event_type),
                    event.date,
                    event.time.as_deref().unwrap_or("-"),
                    truncate(&event.title, 40)
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for event in events {
                print_event_card(event);
            }
        }
    }
    Ok(())
}

fn print_event_card(event: &Event) {
    println!("\n{} {}", "▸".cyan(), event.title.bold());

    let mut when = format_event_date(&event.date);
    if let Some(time) = &event.time {
        when = format!("{} at {}", when, format_event_time(time));
    }
    println!("  {} | {}", format_event_type(event.event_type), when.yellow());

    if let Some(location) = &event.location {
        println!("  {}: {}", "Where".dimmed(), location);
    }
    println!("  {}", preview(&event.description, 90).dimmed());

    if !event.tags.is_empty() {
        println!("  {}", format_tags(&event.tags).cyan());
    }
    if let Some(link) = &event.link {
        let text = event.link_text.as_deref().unwrap_or("Learn more");
        println!("  {}: {}", text, link.blue().underline());
    }
}

pub fn print_team(members: &[TeamMember], format: OutputFormat, empty: &str) -> ClubResult<()> {
    if format == OutputFormat::Json {
        return print_json(members);
    }
    if members.is_empty() {
        println!("{}", empty.dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            println!("{}", "─".repeat(90).dimmed());
            println!(
                "{:<26} {:<4} {:<24} {:<30}",
                "ID".bold(),
                "".bold(),
                "Name".bold(),
                "Position".bold()
            );
            println!("{}", "─".repeat(90).dimmed());
            for member in members {
                println!(
                    "{:<26} {:<4} {:<24} {:<30}",
                    truncate(&member.id, 26).blue(),
                    member.avatar_initials().cyan().bold(),
                    truncate(&member.name, 24),
                    truncate(&member.position, 30).green()
                );
            }
            println!("{}", "─".repeat(90).dimmed());
        }
        _ => {
            for member in members {
                println!(
                    "\n[{}] {} - {}",
                    member.avatar_initials().cyan().bold(),
                    member.name.bold(),
                    member.position.green()
                );
                println!("  {}", preview(&member.bio, 90).dimmed());
                if let Some(photo) = &member.photo {
                    println!("  {}: {}", "Photo".dimmed(), photo.blue().underline());
                }
            }
        }
    }
    Ok(())
}

pub fn print_gallery(
    items: &[GalleryItem],
    events: &[Event],
    format: OutputFormat,
    empty: &str,
) -> ClubResult<()> {
    if format == OutputFormat::Json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("{}", empty.dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<26} {:<32} {:<30}",
                "ID".bold(),
                "Title".bold(),
                "Event".bold()
            );
            println!("{}", "─".repeat(100).dimmed());
            for item in items {
                let event = item
                    .linked_event(events)
                    .map(|e| truncate(&e.title, 30))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<26} {:<32} {:<30}",
                    truncate(&item.id, 26).blue(),
                    truncate(&item.title, 32),
                    event.dimmed()
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for item in items {
                println!("\n{} {}", "▣".cyan(), item.title.bold());
                if let Some(description) = &item.description {
                    println!("  {}", preview(description, 90).dimmed());
                }
                if let Some(event) = item.linked_event(events) {
                    println!("  {}: {}", "From".dimmed(), event.title.yellow());
                }
                println!("  {}", item.image_url.blue().underline());
            }
        }
    }
    Ok(())
}

pub fn print_faculty(mentors: &[FacultyMentor], format: OutputFormat) -> ClubResult<()> {
    if format == OutputFormat::Json {
        return print_json(mentors);
    }

    println!("\n{}", "Faculty Mentors".bold().blue());
    println!("{}", "═".repeat(80).blue());
    for mentor in mentors {
        println!("\n{} {}", "▸".cyan(), mentor.name.bold());
        println!("  {}", mentor.designation.green());
        println!("  {}", mentor.bio.dimmed());
        println!("  {}", mentor.linkedin.blue().underline());
    }
    println!("\n{}", "═".repeat(80).blue());
    Ok(())
}

pub fn print_dashboard(summary: &DashboardSummary, events: &[Event]) {
    println!("\n{}", "Admin Dashboard".bold().blue());
    println!("{}", "═".repeat(60).blue());
    println!(
        "  {:<18} {} ({} upcoming, {} past)",
        "Events".dimmed(),
        summary.total_events.to_string().bold(),
        summary.upcoming_events.to_string().green(),
        summary.past_events
    );
    println!("  {:<18} {}", "Team members".dimmed(), summary.members.to_string().bold());
    println!("  {:<18} {}", "Gallery photos".dimmed(), summary.photos.to_string().bold());

    let mut next: Vec<&Event> = events
        .iter()
        .filter(|e| e.event_type == EventType::Upcoming)
        .collect();
    next.sort_by(|a, b| a.date.cmp(&b.date));

    if let Some(event) = next.first() {
        println!(
            "\n  {}: {} on {}",
            "Next up".dimmed(),
            event.title.bold(),
            format_event_date(&event.date).yellow()
        );
    }
    println!("{}", "═".repeat(60).blue());
}
