use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::{AdminView, Popup, ResourceKind, Screen, SiteTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    ScrollLeft,
    ScrollRight,
    NextSection,
    PrevSection,
    ShowSite,
    ShowAdmin,
    Back,

    // Site
    ToggleEventTab,

    // Admin
    OpenManage(ResourceKind),
    New,
    Edit,
    Delete,
    Logout,
    Refresh,

    // Forms
    NextField,
    PrevField,
    TypeChar(char),
    Backspace,
    Submit,

    // Popups
    Confirm,
    Cancel,

    Help,
    Quit,
    None,
}

/// Where keyboard input is going, derived from the app state.
pub struct KeyContext<'a> {
    pub screen: Screen,
    pub site_tab: SiteTab,
    pub admin_view: AdminView,
    pub popup: Option<&'a Popup>,
}

pub fn map_key(key: KeyEvent, context: &KeyContext) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if let Some(popup) = context.popup {
        return map_popup_key(key, popup);
    }

    match context.screen {
        Screen::Site if context.site_tab == SiteTab::Contact => map_form_key(key),
        Screen::Site => map_site_key(key),
        Screen::Admin => match context.admin_view {
            AdminView::Login => map_form_key(key),
            AdminView::Dashboard => map_dashboard_key(key),
            AdminView::Manage(_) => map_manage_key(key),
        },
    }
}

fn map_site_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::ScrollLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::ScrollRight,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        KeyCode::Char('t') => Action::ToggleEventTab,
        KeyCode::Char('a') => Action::ShowAdmin,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('s') => Action::ShowSite,
        KeyCode::Char('1') => Action::OpenManage(ResourceKind::Events),
        KeyCode::Char('2') => Action::OpenManage(ResourceKind::Team),
        KeyCode::Char('3') => Action::OpenManage(ResourceKind::Gallery),
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        KeyCode::Char('L') => Action::Logout,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_manage_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        KeyCode::Char('n') => Action::New,
        KeyCode::Char('e') | KeyCode::Enter => Action::Edit,
        KeyCode::Char('d') => Action::Delete,
        KeyCode::Char('L') => Action::Logout,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('s') => Action::ShowSite,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

/// Inline forms (contact, login) and the form popup share these keys.
fn map_form_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Form(_) => map_form_key(key),
        Popup::Confirm { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn context(screen: Screen, site_tab: SiteTab, admin_view: AdminView) -> KeyContext<'static> {
        KeyContext {
            screen,
            site_tab,
            admin_view,
            popup: None,
        }
    }

    #[test]
    fn letters_type_into_the_contact_form() {
        let ctx = context(Screen::Site, SiteTab::Contact, AdminView::Login);
        assert_eq!(map_key(press(KeyCode::Char('q')), &ctx), Action::TypeChar('q'));
        assert_eq!(map_key(press(KeyCode::Esc), &ctx), Action::Cancel);
    }

    #[test]
    fn site_arrows_scroll_the_carousel() {
        let ctx = context(Screen::Site, SiteTab::Events, AdminView::Login);
        assert_eq!(map_key(press(KeyCode::Left), &ctx), Action::ScrollLeft);
        assert_eq!(map_key(press(KeyCode::Char('l')), &ctx), Action::ScrollRight);
        assert_eq!(map_key(press(KeyCode::Char('q')), &ctx), Action::Quit);
    }

    #[test]
    fn dashboard_numbers_open_managers() {
        let ctx = context(Screen::Admin, SiteTab::Events, AdminView::Dashboard);
        assert_eq!(
            map_key(press(KeyCode::Char('2')), &ctx),
            Action::OpenManage(ResourceKind::Team)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctx = context(Screen::Admin, SiteTab::Events, AdminView::Login);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, &ctx), Action::Quit);
    }

    #[test]
    fn confirm_popup_takes_y_and_n() {
        let popup = Popup::Confirm {
            kind: ResourceKind::Events,
            id: "1".to_string(),
            question: "Delete?".to_string(),
        };
        let ctx = KeyContext {
            screen: Screen::Admin,
            site_tab: SiteTab::Events,
            admin_view: AdminView::Manage(ResourceKind::Events),
            popup: Some(&popup),
        };
        assert_eq!(map_key(press(KeyCode::Char('y')), &ctx), Action::Confirm);
        assert_eq!(map_key(press(KeyCode::Esc), &ctx), Action::Cancel);
    }
}
