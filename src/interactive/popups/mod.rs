pub mod confirm;
pub mod form;
pub mod help;

use ratatui::{layout::Rect, Frame};

use crate::client::Backend;
use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::Form(form) => form::draw(frame, area, form, app.busy),
        Popup::Confirm { question, .. } => confirm::draw(frame, area, question),
        Popup::Help => help::draw(frame, area, app.screen),
    }
}
