use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::{AdminView, InteractiveApp, Popup, Screen, SiteTab};
use super::layout::app_layout;
use super::notifications;
use super::panels::{admin::draw_admin, header::draw_header, site::draw_site};
use super::popups::draw_popup;
use crate::client::Backend;

pub fn draw<B: Backend>(frame: &mut Frame, app: &InteractiveApp<B>) {
    let layout = app_layout(frame.size(), app.notice.is_some());

    draw_header(frame, layout.header, app);

    match app.screen {
        Screen::Site => draw_site(frame, layout.main, app),
        Screen::Admin => draw_admin(frame, layout.main, app),
    }

    notifications::draw(frame, layout.notifications, app.notice.as_ref());
    draw_footer(frame, layout.footer, app);

    // Popups go on top of everything
    draw_popup(frame, frame.size(), app);
}

fn draw_footer<B: Backend>(frame: &mut Frame, area: Rect, app: &InteractiveApp<B>) {
    let help_text = match (&app.popup, app.screen) {
        (Some(Popup::Form(_)), _) => "[Tab] Next field  [Enter] Save  [Esc] Cancel",
        (Some(Popup::Confirm { .. }), _) => "[y] Confirm  [n/Esc] Cancel",
        (Some(Popup::Help), _) => "[?/Esc] Close help",
        (None, Screen::Site) => match app.site_tab {
            SiteTab::Contact => "[Tab] Next field  [Enter] Send  [Esc] Leave form",
            SiteTab::Events => {
                "[Tab] Section  [h/l] Scroll  [t] Upcoming/Past  [a] Admin  [r] Refresh  [?] Help  [q] Quit"
            }
            SiteTab::Gallery => "[Tab] Section  [j/k] Scroll  [a] Admin  [r] Refresh  [?] Help  [q] Quit",
            _ => "[Tab] Section  [h/l] Scroll  [a] Admin  [r] Refresh  [?] Help  [q] Quit",
        },
        (None, Screen::Admin) => match app.admin_view {
            AdminView::Login => "[Tab] Next field  [Enter] Log in  [Esc] Back to site",
            AdminView::Dashboard => "[1-3] Manage  [L] Log out  [r] Refresh  [s] Site  [?] Help  [q] Quit",
            AdminView::Manage(_) => "[j/k] Nav  [n] New  [e] Edit  [d] Delete  [Esc] Dashboard  [?] Help",
        },
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
