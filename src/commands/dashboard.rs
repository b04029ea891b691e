use colored::*;

use crate::cli_context::CliContext;
use crate::error::ClubResult;
use crate::formatting::print_dashboard;

pub async fn handle_dashboard(context: &CliContext) -> ClubResult<()> {
    let panel = context.authenticated_panel().await?;
    print_dashboard(&panel.summary(), &panel.data.events);

    if let Some(status) = &panel.status {
        eprintln!("{}", status.message.yellow());
    }
    Ok(())
}
