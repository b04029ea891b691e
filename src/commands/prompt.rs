use std::io::{self, BufRead, Write};

use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::club_error;
use crate::error::{ClubError, ClubResult};

/// Read one line from stdin after printing `label`.
pub fn prompt_line(label: &str) -> ClubResult<String> {
    print!("{}: ", label.bold());
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(club_error!(InvalidInput, "No input for {}", label));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Like `prompt_line` but keeps the current value when the answer is empty.
pub fn prompt_with_default(label: &str, current: &str) -> ClubResult<String> {
    let label = if current.is_empty() {
        label.to_string()
    } else {
        format!("{} [{}]", label, current)
    };
    let answer = prompt_line(&label)?;
    if answer.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer)
    }
}

/// Read a password without echoing it.
pub fn prompt_password(label: &str) -> ClubResult<String> {
    print!("{}: ", label.bold());
    io::stdout().flush()?;

    terminal::enable_raw_mode().map_err(|e| ClubError::TerminalError(e.to_string()))?;
    let result = read_hidden();
    let _ = terminal::disable_raw_mode();
    println!();
    result
}

fn read_hidden() -> ClubResult<String> {
    let mut password = String::new();
    loop {
        let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        match code {
            KeyCode::Enter => return Ok(password),
            KeyCode::Backspace => {
                password.pop();
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(club_error!(InvalidInput, "Cancelled"));
            }
            KeyCode::Esc => return Err(club_error!(InvalidInput, "Cancelled")),
            KeyCode::Char(c) => password.push(c),
            _ => {}
        }
    }
}

/// `[y/N]` question; anything but an explicit yes declines.
pub fn confirm(question: &str) -> bool {
    match prompt_line(&format!("{} [y/N]", question)) {
        Ok(answer) => is_yes(&answer),
        Err(_) => false,
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
