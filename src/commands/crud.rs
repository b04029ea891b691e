use clap::{Arg, ArgAction, ArgMatches, Command};

use super::fields::{apply_flags, prompt_fields, with_field_args};
use super::format_arg;
use super::prompt::confirm;
use crate::admin::{AdminPanel, Resource};
use crate::cli_context::CliContext;
use crate::client::Backend;
use crate::club_error;
use crate::error::{ClubError, ClubResult};
use crate::formatting::{print_status, OutputFormat};
use crate::forms::FormFields;

/// `list`, `create`, `update` and `delete` for one resource. Field flags are
/// generated from the resource's form.
pub fn resource_command<R: Resource>(about: &'static str) -> Command {
    let fields = R::Form::default().fields();

    Command::new(R::KEY)
        .about(about)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about(format!("List {}", R::KEY))
                .arg(format_arg()),
        )
        .subcommand(with_field_args(
            Command::new("create").about(format!("Add a new {}", R::NOUN)),
            fields,
        ))
        .subcommand(with_field_args(
            Command::new("update")
                .about(format!("Edit an existing {}", R::NOUN))
                .arg(id_arg()),
            fields,
        ))
        .subcommand(
            Command::new("delete")
                .about(format!("Delete a {}", R::NOUN))
                .arg(id_arg())
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .value_name("ID")
        .help("Record id as returned by the list command")
        .required(true)
        .index(1)
}

pub async fn handle_resource<R: Resource>(context: &CliContext, matches: &ArgMatches) -> ClubResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_list::<R>(context, sub).await,
        Some(("create", sub)) => {
            let mut panel = context.authenticated_panel().await?;
            handle_create::<R, _>(&mut panel, sub).await
        }
        Some(("update", sub)) => {
            let mut panel = context.authenticated_panel().await?;
            handle_update::<R, _>(&mut panel, sub).await
        }
        Some(("delete", sub)) => {
            let mut panel = context.authenticated_panel().await?;
            let skip_prompt = sub.get_flag("yes");
            handle_delete::<R, _, _>(&mut panel, required_id(sub)?, |question| {
                skip_prompt || confirm(question)
            })
            .await
        }
        _ => Err(club_error!(
            InvalidInput,
            "Unknown {} subcommand. Use 'csquare {} --help' for available options.",
            R::KEY,
            R::KEY
        )),
    }
}

async fn handle_list<R: Resource>(context: &CliContext, matches: &ArgMatches) -> ClubResult<()> {
    let format = matches
        .get_one::<String>("format")
        .map(|f| OutputFormat::parse(f))
        .unwrap_or(OutputFormat::Cards);

    let mut panel = context.admin_panel()?;
    let report = panel.refresh_all().await;
    if let Some(error) = report.error_for(R::KEY) {
        return Err(ClubError::Api(error.clone()));
    }
    R::print(&panel.data, format)
}

pub async fn handle_create<R, B>(panel: &mut AdminPanel<B>, matches: &ArgMatches) -> ClubResult<()>
where
    R: Resource,
    B: Backend,
{
    let mut form = R::Form::default();
    if !apply_flags(&mut form, matches) {
        prompt_fields(&mut form)?;
    }

    panel.create::<R>(&mut form).await;
    finish(panel)
}

pub async fn handle_update<R, B>(panel: &mut AdminPanel<B>, matches: &ArgMatches) -> ClubResult<()>
where
    R: Resource,
    B: Backend,
{
    let id = required_id(matches)?;
    let mut form = panel
        .edit_form::<R>(id)
        .ok_or_else(|| club_error!(InvalidInput, "No {} with id '{}'", R::NOUN, id))?;

    if !apply_flags(&mut form, matches) {
        prompt_fields(&mut form)?;
    }

    panel.update::<R>(id, &form).await;
    finish(panel)
}

pub async fn handle_delete<R, B, F>(panel: &mut AdminPanel<B>, id: &str, confirm: F) -> ClubResult<()>
where
    R: Resource,
    B: Backend,
    F: FnOnce(&str) -> bool,
{
    if R::find(&panel.data, id).is_none() {
        return Err(club_error!(InvalidInput, "No {} with id '{}'", R::NOUN, id));
    }

    panel.status = None;
    if !panel.delete::<R, _>(id, confirm).await && panel.status.is_none() {
        println!("Cancelled.");
        return Ok(());
    }
    finish(panel)
}

fn required_id(matches: &ArgMatches) -> ClubResult<&str> {
    matches
        .get_one::<String>("id")
        .map(String::as_str)
        .ok_or_else(|| club_error!(InvalidInput, "ID is required"))
}

/// Print the panel's status line and turn an error status into a failure.
fn finish<B: Backend>(panel: &mut AdminPanel<B>) -> ClubResult<()> {
    match panel.status.take() {
        Some(status) if status.is_error() => Err(ClubError::Failed(status.message)),
        Some(status) => {
            print_status(&status);
            Ok(())
        }
        None => Ok(()),
    }
}
