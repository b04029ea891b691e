use clap::{ArgMatches, Command};

use super::fields::{apply_flags, prompt_fields, with_field_args};
use crate::cli_context::CliContext;
use crate::error::{ClubError, ClubResult};
use crate::formatting::print_status;
use crate::forms::{ContactForm, FormFields};
use crate::sections::submit_contact;

pub fn contact_command() -> Command {
    let form = ContactForm::default();
    with_field_args(
        Command::new("contact").about("Send a message to the club"),
        form.fields(),
    )
}

pub async fn handle_contact(context: &CliContext, matches: &ArgMatches) -> ClubResult<()> {
    let api = context.api()?;

    let mut form = ContactForm::default();
    if !apply_flags(&mut form, matches) {
        prompt_fields(&mut form)?;
    }

    let status = submit_contact(&api, &mut form).await;
    if status.is_error() {
        return Err(ClubError::Failed(status.message));
    }
    print_status(&status);
    Ok(())
}
