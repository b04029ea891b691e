use clap::ArgMatches;
use colored::*;

use super::prompt::{prompt_line, prompt_password};
use crate::cli_context::CliContext;
use crate::error::{ClubError, ClubResult, ErrorContext};
use crate::forms::Credentials;
use crate::session::{LoginOutcome, SessionState};

pub async fn handle_login(context: &CliContext, matches: &ArgMatches) -> ClubResult<()> {
    let mut panel = context.admin_panel().context("Failed to create API client")?;

    if panel.resume().await == SessionState::Authenticated {
        println!("{} Already logged in.", "✓".green());
        return Ok(());
    }

    let given_username = matches.get_one::<String>("username").cloned();
    let given_password = matches.get_one::<String>("password").cloned();
    // Flags mean a single non-interactive attempt.
    let interactive = given_password.is_none();

    let mut credentials = Credentials::new(given_username.unwrap_or_default(), "");
    loop {
        if credentials.username.trim().is_empty() {
            credentials.username = prompt_line("Username")?;
        }
        credentials.password = match &given_password {
            Some(password) => password.clone(),
            None => prompt_password("Password")?,
        };

        let outcome = panel.login(&mut credentials).await;
        match &outcome {
            LoginOutcome::Success => {
                println!("{} {}", "✓".green(), outcome.message().green().bold());
                return Ok(());
            }
            LoginOutcome::LockedOut(message) | LoginOutcome::Blocked(message) => {
                return Err(ClubError::Locked(message.clone()));
            }
            LoginOutcome::NotSaved(message) => {
                return Err(ClubError::ConfigError(message.clone()));
            }
            LoginOutcome::Invalid(message) | LoginOutcome::Failed { message, .. } => {
                if !interactive {
                    return Err(ClubError::InvalidInput(message.clone()));
                }
                eprintln!("{} {}", "✗".red(), message.red());
                prepare_retry(&mut credentials, &outcome);
            }
        }
    }
}

/// A locally rejected submission asks for both fields again; a backend
/// rejection keeps the username.
fn prepare_retry(credentials: &mut Credentials, outcome: &LoginOutcome) {
    match outcome {
        LoginOutcome::Invalid(_) => credentials.clear(),
        _ => credentials.clear_password(),
    }
}

pub async fn handle_logout(context: &CliContext) -> ClubResult<()> {
    let mut panel = context.admin_panel()?;
    panel.logout();
    println!("Logged out.");
    Ok(())
}

pub async fn handle_status(context: &CliContext) -> ClubResult<()> {
    println!("{}: {}", "Backend".dimmed(), context.api_url().blue());

    if !context.has_token() {
        println!("{}: {}", "Session".dimmed(), "not logged in".yellow());
        return Ok(());
    }

    let mut panel = context.admin_panel()?;
    match panel.resume().await {
        SessionState::Authenticated => {
            println!("{}: {}", "Session".dimmed(), "logged in".green());
        }
        _ => {
            println!(
                "{}: {}",
                "Session".dimmed(),
                "expired or invalid, log in again".red()
            );
        }
    }
    Ok(())
}
