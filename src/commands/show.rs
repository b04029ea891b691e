use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;

use super::format_arg;
use crate::cli_context::CliContext;
use crate::club_error;
use crate::error::{ClubError, ClubResult};
use crate::formatting::{print_events, print_faculty, print_gallery, print_team, OutputFormat};
use crate::models::EventType;
use crate::sections::{self, EventsSection, Section, GALLERY_EMPTY, TEAM_EMPTY};

pub fn show_command() -> Command {
    Command::new("show")
        .about("Browse the public site sections")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("events")
                .about("Upcoming events, or past ones with --past")
                .arg(
                    Arg::new("past")
                        .long("past")
                        .help("Show past events")
                        .action(ArgAction::SetTrue),
                )
                .arg(format_arg()),
        )
        .subcommand(Command::new("team").about("Core team").arg(format_arg()))
        .subcommand(Command::new("faculty").about("Faculty mentors").arg(format_arg()))
        .subcommand(Command::new("gallery").about("Photo gallery").arg(format_arg()))
}

pub async fn handle_show(context: &CliContext, matches: &ArgMatches) -> ClubResult<()> {
    let Some((section, sub)) = matches.subcommand() else {
        return Err(club_error!(InvalidInput, "Use 'csquare show --help' for available sections."));
    };

    let format = sub
        .get_one::<String>("format")
        .map(|f| OutputFormat::parse(f))
        .unwrap_or(OutputFormat::Cards);

    if section == "faculty" {
        return print_faculty(sections::faculty().items(), format);
    }

    let api = context.api()?;
    match section {
        "events" => {
            let mut events = EventsSection::new(0);
            if sub.get_flag("past") {
                events.switch_tab(EventType::Past);
            }
            events.carousel.set(sections::load_events(&api).await);
            ready_or_fail(&events.carousel.section, "events")?;

            if format != OutputFormat::Json {
                println!("\n{}", format!("{} Events", events.tab.label()).bold().blue());
            }
            let visible: Vec<_> = events.visible().into_iter().cloned().collect();
            print_events(&visible, format, &events.empty_message())
        }
        "team" => {
            let team = sections::load_team(&api).await;
            ready_or_fail(&team, "team members")?;
            print_team(team.items(), format, TEAM_EMPTY)
        }
        "gallery" => {
            let (gallery, events) =
                tokio::join!(sections::load_gallery(&api), sections::load_events(&api));
            ready_or_fail(&gallery, "photos")?;
            print_gallery(gallery.items(), events.items(), format, GALLERY_EMPTY)
        }
        other => Err(club_error!(InvalidInput, "Unknown section '{}'", other)),
    }
}

fn ready_or_fail<T>(section: &Section<T>, what: &str) -> ClubResult<()> {
    match section {
        Section::Failed(message) => Err(ClubError::Failed(format!(
            "Failed to load {}: {}",
            what, message
        ))),
        _ => Ok(()),
    }
}
