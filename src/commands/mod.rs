pub mod auth;
pub mod contact;
pub mod crud;
pub mod dashboard;
pub mod fields;
pub mod prompt;
pub mod show;

use clap::{Arg, ArgMatches, Command};

use crate::admin::{Events, Gallery, Team};
use crate::cli_context::{CliContext, CliContextBuilder};
use crate::club_error;
use crate::error::ClubResult;
use crate::interactive;

pub(crate) fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: cards, table, json")
        .value_parser(["cards", "table", "json"])
        .default_value("cards")
}

pub fn build_cli() -> Command {
    Command::new("csquare")
        .about("C-Square Club CLI - browse the club site and manage its content")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Backend base URL (overrides CSQUARE_API_URL and the config file)")
                .global(true),
        )
        .subcommand(
            Command::new("login")
                .about("Log in as an admin")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .help("Admin username"),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Admin password (prompted for when omitted)"),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored admin session"))
        .subcommand(Command::new("status").about("Show backend and session status"))
        .subcommand(Command::new("dashboard").about("Admin overview of all content"))
        .subcommand(crud::resource_command::<Events>("Manage events"))
        .subcommand(crud::resource_command::<Team>("Manage team members"))
        .subcommand(crud::resource_command::<Gallery>("Manage gallery photos"))
        .subcommand(contact::contact_command())
        .subcommand(show::show_command())
        .subcommand(Command::new("tui").about("Open the interactive site and admin panel"))
}

pub fn context_from(matches: &ArgMatches) -> ClubResult<CliContext> {
    match matches.get_one::<String>("api-url") {
        Some(url) => CliContextBuilder::new().with_api_url(url.clone()).build(),
        None => CliContext::load(),
    }
}

pub async fn dispatch(matches: &ArgMatches) -> ClubResult<()> {
    let context = context_from(matches)?;

    match matches.subcommand() {
        Some(("login", sub)) => auth::handle_login(&context, sub).await,
        Some(("logout", _)) => auth::handle_logout(&context).await,
        Some(("status", _)) => auth::handle_status(&context).await,
        Some(("dashboard", _)) => dashboard::handle_dashboard(&context).await,
        Some(("events", sub)) => crud::handle_resource::<Events>(&context, sub).await,
        Some(("team", sub)) => crud::handle_resource::<Team>(&context, sub).await,
        Some(("gallery", sub)) => crud::handle_resource::<Gallery>(&context, sub).await,
        Some(("contact", sub)) => contact::handle_contact(&context, sub).await,
        Some(("show", sub)) => show::handle_show(&context, sub).await,
        Some(("tui", _)) => interactive::run_tui(context).await,
        _ => Err(club_error!(
            InvalidInput,
            "Unknown command. Use 'csquare --help' for available commands."
        )),
    }
}
