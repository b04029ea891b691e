use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::keys::{Action, KeyContext};
use crate::admin::{delete_question, AdminPanel, Events, Gallery, Resource, Team};
use crate::client::Backend;
use crate::constants::{CARD_GAP, CAROUSEL_STEP, NOTICE_TTL};
use crate::forms::{ContactForm, Credentials, EventForm, FormFields, GalleryForm, TeamMemberForm};
use crate::logging::{log_debug, log_warn};
use crate::models::{FacultyMentor, GalleryItem, TeamMember};
use crate::sections::{self, submit_contact, Carousel, DragScroll, EventsSection, Section};
use crate::session::{LoginOutcome, SessionState};
use crate::status::{Status, StatusKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Site,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTab {
    Events,
    Team,
    Faculty,
    Gallery,
    Contact,
}

impl SiteTab {
    pub const ALL: [SiteTab; 5] = [
        SiteTab::Events,
        SiteTab::Team,
        SiteTab::Faculty,
        SiteTab::Gallery,
        SiteTab::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SiteTab::Events => "Events",
            SiteTab::Team => "Team",
            SiteTab::Faculty => "Faculty",
            SiteTab::Gallery => "Gallery",
            SiteTab::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Events,
    Team,
    Gallery,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Events, ResourceKind::Team, ResourceKind::Gallery];

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Events => "Manage Events",
            ResourceKind::Team => "Manage Team",
            ResourceKind::Gallery => "Manage Gallery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Events => Events::LABEL,
            ResourceKind::Team => Team::LABEL,
            ResourceKind::Gallery => Gallery::LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Login,
    Dashboard,
    Manage(ResourceKind),
}

/// The create/edit form behind the form popup.
#[derive(Debug, Clone)]
pub enum AnyForm {
    Event(EventForm),
    Team(TeamMemberForm),
    Gallery(GalleryForm),
}

impl AnyForm {
    pub fn new(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Events => AnyForm::Event(EventForm::default()),
            ResourceKind::Team => AnyForm::Team(TeamMemberForm::default()),
            ResourceKind::Gallery => AnyForm::Gallery(GalleryForm::default()),
        }
    }

    pub fn fields(&self) -> &dyn FormFields {
        match self {
            AnyForm::Event(form) => form,
            AnyForm::Team(form) => form,
            AnyForm::Gallery(form) => form,
        }
    }

    pub fn fields_mut(&mut self) -> &mut dyn FormFields {
        match self {
            AnyForm::Event(form) => form,
            AnyForm::Team(form) => form,
            AnyForm::Gallery(form) => form,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormPopup {
    pub kind: ResourceKind,
    /// Id of the record being edited; `None` when creating.
    pub editing: Option<String>,
    pub form: AnyForm,
    pub active: usize,
}

#[derive(Debug, Clone)]
pub enum Popup {
    Form(FormPopup),
    Confirm {
        kind: ResourceKind,
        id: String,
        question: String,
    },
    Help,
}

/// Backend work a key press asked for; the event loop awaits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Refresh,
    Login,
    SendContact,
    SubmitForm,
    Delete { kind: ResourceKind, id: String },
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub status: Status,
    pub created_at: Instant,
}

pub struct InteractiveApp<B> {
    pub screen: Screen,
    pub site_tab: SiteTab,
    pub admin_view: AdminView,
    pub popup: Option<Popup>,
    pub should_quit: bool,

    pub events: EventsSection,
    pub team: Carousel<TeamMember>,
    pub faculty: Carousel<FacultyMentor>,
    pub gallery: Section<GalleryItem>,
    pub gallery_offset: usize,

    pub contact: ContactForm,
    pub contact_field: usize,
    pub credentials: Credentials,
    pub login_field: usize,

    pub panel: AdminPanel<B>,
    pub selected: usize,
    pub busy: bool,
    pub notice: Option<Notice>,
    pub lockout_secs: Option<u64>,
    viewport_width: u16,
}

impl<B: Backend> InteractiveApp<B> {
    pub fn new(panel: AdminPanel<B>) -> Self {
        let mut faculty = Carousel::new(CAROUSEL_STEP);
        faculty.set(sections::faculty());

        Self {
            screen: Screen::Site,
            site_tab: SiteTab::Events,
            admin_view: AdminView::Login,
            popup: None,
            should_quit: false,
            events: EventsSection::new(CAROUSEL_STEP),
            team: Carousel::new(CAROUSEL_STEP),
            faculty,
            gallery: Section::Loading,
            gallery_offset: 0,
            contact: ContactForm::default(),
            contact_field: 0,
            credentials: Credentials::default(),
            login_field: 0,
            panel,
            selected: 0,
            busy: false,
            notice: None,
            lockout_secs: None,
            viewport_width: 80,
        }
    }

    /// Load the public sections and check any stored admin token.
    pub async fn start(&mut self) {
        self.load_site().await;
        if self.panel.resume().await == SessionState::Authenticated {
            self.admin_view = AdminView::Dashboard;
        }
    }

    pub async fn load_site(&mut self) {
        let api = &self.panel.api;
        let (events, team, gallery) = tokio::join!(
            sections::load_events(api),
            sections::load_team(api),
            sections::load_gallery(api)
        );
        self.events.carousel.set(events);
        self.team.set(team);
        self.gallery = gallery;
        self.gallery_offset = 0;
        self.update_extents();
    }

    pub fn key_context(&self) -> KeyContext<'_> {
        KeyContext {
            screen: self.screen,
            site_tab: self.site_tab,
            admin_view: self.admin_view,
            popup: self.popup.as_ref(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.panel.session.is_authenticated()
    }

    /// Apply a key action. Anything that needs the backend comes back as a
    /// task for the event loop.
    pub fn handle_action(&mut self, action: Action) -> Option<Task> {
        if action == Action::Quit {
            self.should_quit = true;
            return None;
        }
        if self.popup.is_some() {
            return self.handle_popup_action(action);
        }
        match self.screen {
            Screen::Site => self.handle_site_action(action),
            Screen::Admin => self.handle_admin_action(action),
        }
    }

    fn handle_site_action(&mut self, action: Action) -> Option<Task> {
        if self.site_tab == SiteTab::Contact {
            return self.handle_contact_action(action);
        }

        match action {
            Action::ScrollLeft => {
                if let Some(scroll) = self.active_scroll_mut() {
                    scroll.step_left();
                }
            }
            Action::ScrollRight => {
                if let Some(scroll) = self.active_scroll_mut() {
                    scroll.step_right();
                }
            }
            Action::MoveUp if self.site_tab == SiteTab::Gallery => {
                self.gallery_offset = self.gallery_offset.saturating_sub(1);
            }
            Action::MoveDown if self.site_tab == SiteTab::Gallery => {
                let last = self.gallery.items().len().saturating_sub(1);
                self.gallery_offset = (self.gallery_offset + 1).min(last);
            }
            Action::ToggleEventTab if self.site_tab == SiteTab::Events => {
                let next = self.events.tab.toggle();
                self.events.switch_tab(next);
                self.update_extents();
            }
            Action::NextSection => self.cycle_site_tab(1),
            Action::PrevSection => self.cycle_site_tab(SiteTab::ALL.len() - 1),
            Action::ShowAdmin => self.show_admin(),
            Action::Refresh => return Some(Task::Refresh),
            Action::Help => self.popup = Some(Popup::Help),
            _ => {}
        }
        None
    }

    fn handle_contact_action(&mut self, action: Action) -> Option<Task> {
        match action {
            Action::Cancel => self.site_tab = SiteTab::Events,
            Action::Submit if !self.busy => return Some(Task::SendContact),
            other => edit_fields(&mut self.contact, &mut self.contact_field, other),
        }
        None
    }

    fn handle_admin_action(&mut self, action: Action) -> Option<Task> {
        if !self.is_authenticated() {
            self.admin_view = AdminView::Login;
        }

        match self.admin_view {
            AdminView::Login => match action {
                Action::Cancel => self.screen = Screen::Site,
                Action::Submit if !self.busy => return Some(Task::Login),
                other => edit_fields(&mut self.credentials, &mut self.login_field, other),
            },
            AdminView::Dashboard => match action {
                Action::OpenManage(kind) => self.open_manage(kind),
                Action::NextSection => self.open_manage(ResourceKind::Events),
                Action::PrevSection => self.open_manage(ResourceKind::Gallery),
                Action::ShowSite | Action::Back => self.screen = Screen::Site,
                Action::Logout => self.logout(),
                Action::Refresh => return Some(Task::Refresh),
                Action::Help => self.popup = Some(Popup::Help),
                _ => {}
            },
            AdminView::Manage(kind) => match action {
                Action::MoveDown => {
                    let count = self.record_count(kind);
                    if count > 0 {
                        self.selected = (self.selected + 1) % count;
                    }
                }
                Action::MoveUp => {
                    let count = self.record_count(kind);
                    if count > 0 {
                        self.selected = (self.selected + count - 1) % count;
                    }
                }
                Action::NextSection => self.cycle_manage(kind, 1),
                Action::PrevSection => self.cycle_manage(kind, ResourceKind::ALL.len() - 1),
                Action::New => {
                    self.popup = Some(Popup::Form(FormPopup {
                        kind,
                        editing: None,
                        form: AnyForm::new(kind),
                        active: 0,
                    }));
                }
                Action::Edit => self.open_edit(kind),
                Action::Delete => {
                    if let Some(id) = self.selected_id(kind) {
                        self.popup = Some(Popup::Confirm {
                            kind,
                            id,
                            question: delete_question_for(kind),
                        });
                    }
                }
                Action::Back => self.admin_view = AdminView::Dashboard,
                Action::ShowSite => self.screen = Screen::Site,
                Action::Logout => self.logout(),
                Action::Refresh => return Some(Task::Refresh),
                Action::Help => self.popup = Some(Popup::Help),
                _ => {}
            },
        }
        None
    }

    fn handle_popup_action(&mut self, action: Action) -> Option<Task> {
        let busy = self.busy;
        let popup = self.popup.as_mut()?;

        match popup {
            Popup::Help => {
                if action == Action::Cancel {
                    self.popup = None;
                }
            }
            Popup::Confirm { kind, id, .. } => match action {
                Action::Confirm => {
                    let task = Task::Delete {
                        kind: *kind,
                        id: id.clone(),
                    };
                    self.popup = None;
                    return Some(task);
                }
                Action::Cancel => self.popup = None,
                _ => {}
            },
            Popup::Form(form_popup) => match action {
                Action::Cancel => self.popup = None,
                Action::Submit if !busy => return Some(Task::SubmitForm),
                other => {
                    let FormPopup { form, active, .. } = form_popup;
                    edit_fields(form.fields_mut(), active, other);
                }
            },
        }
        None
    }

    pub async fn run_task(&mut self, task: Task) {
        log_debug(&format!("Running task {:?}", task));
        self.busy = true;

        match task {
            Task::Refresh => match self.screen {
                Screen::Site => self.load_site().await,
                Screen::Admin => {
                    let report = self.panel.refresh_all().await;
                    if let Some((key, error)) = report.failed.first() {
                        if !error.is_unauthorized() {
                            self.notify(Status::error(format!("Failed to load {}: {}", key, error)));
                        }
                    }
                }
            },
            Task::Login => {
                let outcome = self.panel.login(&mut self.credentials).await;
                if outcome == LoginOutcome::Success {
                    self.admin_view = AdminView::Dashboard;
                    self.login_field = 0;
                } else if self.credentials.username.is_empty() {
                    self.login_field = 0;
                } else {
                    self.login_field = 1;
                }
            }
            Task::SendContact => {
                let status = submit_contact(&self.panel.api, &mut self.contact).await;
                if !status.is_error() {
                    self.contact_field = 0;
                }
                self.notify(status);
            }
            Task::SubmitForm => self.submit_form().await,
            Task::Delete { kind, id } => {
                let deleted = match kind {
                    ResourceKind::Events => self.panel.delete::<Events, _>(&id, |_| true).await,
                    ResourceKind::Team => self.panel.delete::<Team, _>(&id, |_| true).await,
                    ResourceKind::Gallery => self.panel.delete::<Gallery, _>(&id, |_| true).await,
                };
                if deleted {
                    self.clamp_selection(kind);
                }
            }
        }

        self.busy = false;
        self.after_admin_call();
    }

    async fn submit_form(&mut self) {
        let Some(Popup::Form(mut popup)) = self.popup.take() else {
            return;
        };

        let saved = match (&mut popup.form, popup.editing.as_deref()) {
            (AnyForm::Event(form), None) => self.panel.create::<Events>(form).await,
            (AnyForm::Event(form), Some(id)) => self.panel.update::<Events>(id, form).await,
            (AnyForm::Team(form), None) => self.panel.create::<Team>(form).await,
            (AnyForm::Team(form), Some(id)) => self.panel.update::<Team>(id, form).await,
            (AnyForm::Gallery(form), None) => self.panel.create::<Gallery>(form).await,
            (AnyForm::Gallery(form), Some(id)) => self.panel.update::<Gallery>(id, form).await,
        };

        if !saved && self.is_authenticated() {
            self.popup = Some(Popup::Form(popup));
        }
    }

    /// Move the panel's status into the notice bar and follow session loss.
    fn after_admin_call(&mut self) {
        if let Some(status) = self.panel.status.take() {
            self.notify(status);
        }
        if !self.is_authenticated() && self.admin_view != AdminView::Login {
            self.admin_view = AdminView::Login;
            if matches!(self.popup, Some(Popup::Form(_)) | Some(Popup::Confirm { .. })) {
                self.popup = None;
            }
        }
    }

    /// The backend rejected our token on some request.
    pub fn on_unauthorized(&mut self) {
        if !self.is_authenticated() && self.admin_view == AdminView::Login {
            return;
        }
        log_warn("Session expired while the TUI was open");
        self.panel.session.expire();
        self.panel.data = Default::default();
        self.panel.status = Some(Status::error("Session expired. Please log in again."));
        self.after_admin_call();
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Site || self.popup.is_some() {
            return;
        }
        let Some(scroll) = self.active_scroll_mut() else {
            return;
        };

        let x = i32::from(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => scroll.press(x),
            MouseEventKind::Drag(MouseButton::Left) => {
                scroll.drag(x);
            }
            MouseEventKind::Up(_) => scroll.release(),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => scroll.step_right(),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => scroll.step_left(),
            _ => {}
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            let expires = notice.status.kind != StatusKind::Error;
            if expires && notice.created_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
        self.lockout_secs = self.panel.session.lockout_remaining();
    }

    pub fn notify(&mut self, status: Status) {
        self.notice = Some(Notice {
            status,
            created_at: Instant::now(),
        });
    }

    /// Terminal width changed; carousels re-clamp to the new viewport.
    pub fn set_viewport(&mut self, width: u16) {
        self.viewport_width = width;
        self.update_extents();
    }

    fn update_extents(&mut self) {
        let width = i32::from(self.viewport_width.saturating_sub(2));
        let events = self.events.visible().len();
        self.events.carousel.scroll.set_extent(track_extent(events, width));
        let team = self.team.section.items().len();
        self.team.scroll.set_extent(track_extent(team, width));
        let faculty = self.faculty.section.items().len();
        self.faculty.scroll.set_extent(track_extent(faculty, width));
    }

    fn active_scroll_mut(&mut self) -> Option<&mut DragScroll> {
        match self.site_tab {
            SiteTab::Events => Some(&mut self.events.carousel.scroll),
            SiteTab::Team => Some(&mut self.team.scroll),
            SiteTab::Faculty => Some(&mut self.faculty.scroll),
            SiteTab::Gallery | SiteTab::Contact => None,
        }
    }

    fn cycle_site_tab(&mut self, by: usize) {
        let index = SiteTab::ALL
            .iter()
            .position(|t| *t == self.site_tab)
            .unwrap_or(0);
        self.site_tab = SiteTab::ALL[(index + by) % SiteTab::ALL.len()];
    }

    fn cycle_manage(&mut self, current: ResourceKind, by: usize) {
        let index = ResourceKind::ALL
            .iter()
            .position(|k| *k == current)
            .unwrap_or(0);
        self.open_manage(ResourceKind::ALL[(index + by) % ResourceKind::ALL.len()]);
    }

    fn show_admin(&mut self) {
        self.screen = Screen::Admin;
        self.admin_view = if self.is_authenticated() {
            AdminView::Dashboard
        } else {
            AdminView::Login
        };
    }

    fn open_manage(&mut self, kind: ResourceKind) {
        self.admin_view = AdminView::Manage(kind);
        self.selected = 0;
    }

    fn logout(&mut self) {
        self.panel.logout();
        self.admin_view = AdminView::Login;
        self.notify(Status::info("Logged out."));
    }

    fn open_edit(&mut self, kind: ResourceKind) {
        let Some(id) = self.selected_id(kind) else {
            return;
        };
        let form = match kind {
            ResourceKind::Events => self.panel.edit_form::<Events>(&id).map(AnyForm::Event),
            ResourceKind::Team => self.panel.edit_form::<Team>(&id).map(AnyForm::Team),
            ResourceKind::Gallery => self.panel.edit_form::<Gallery>(&id).map(AnyForm::Gallery),
        };
        if let Some(form) = form {
            self.popup = Some(Popup::Form(FormPopup {
                kind,
                editing: Some(id),
                form,
                active: 0,
            }));
        }
    }

    /// `(id, summary)` for every record of `kind`.
    pub fn records(&self, kind: ResourceKind) -> Vec<(String, String)> {
        match kind {
            ResourceKind::Events => records::<Events, B>(&self.panel),
            ResourceKind::Team => records::<Team, B>(&self.panel),
            ResourceKind::Gallery => records::<Gallery, B>(&self.panel),
        }
    }

    fn record_count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Events => self.panel.data.events.len(),
            ResourceKind::Team => self.panel.data.team.len(),
            ResourceKind::Gallery => self.panel.data.gallery.len(),
        }
    }

    fn selected_id(&self, kind: ResourceKind) -> Option<String> {
        self.records(kind)
            .into_iter()
            .nth(self.selected)
            .map(|(id, _)| id)
    }

    fn clamp_selection(&mut self, kind: ResourceKind) {
        let count = self.record_count(kind);
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

fn records<R: Resource, B: Backend>(panel: &AdminPanel<B>) -> Vec<(String, String)> {
    R::items(&panel.data)
        .iter()
        .map(|item| (R::id(item).to_string(), R::summary(item)))
        .collect()
}

fn delete_question_for(kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Events => delete_question::<Events>(),
        ResourceKind::Team => delete_question::<Team>(),
        ResourceKind::Gallery => delete_question::<Gallery>(),
    }
}

/// Widest scroll offset for `count` cards in a viewport `width` columns wide.
fn track_extent(count: usize, width: i32) -> i32 {
    let content = (count as i32 * CAROUSEL_STEP - i32::from(CARD_GAP)).max(0);
    content - width
}

/// Shared field editing for every form the TUI shows.
fn edit_fields<F: FormFields + ?Sized>(form: &mut F, active: &mut usize, action: Action) {
    let count = form.fields().len();
    if count == 0 {
        return;
    }
    match action {
        Action::NextField => *active = (*active + 1) % count,
        Action::PrevField => *active = (*active + count - 1) % count,
        Action::TypeChar(c) => {
            let mut value = form.value(*active).to_string();
            value.push(c);
            form.set_value(*active, value);
        }
        Action::Backspace => {
            let mut value = form.value(*active).to_string();
            value.pop();
            form.set_value(*active, value);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_accounts_for_viewport() {
        assert_eq!(track_extent(0, 80), -80);
        assert_eq!(track_extent(3, 80), 3 * CAROUSEL_STEP - i32::from(CARD_GAP) - 80);
    }

    #[test]
    fn field_editing_wraps_and_types() {
        let mut form = ContactForm::default();
        let mut active = 0;
        edit_fields(&mut form, &mut active, Action::TypeChar('A'));
        edit_fields(&mut form, &mut active, Action::TypeChar('n'));
        edit_fields(&mut form, &mut active, Action::Backspace);
        assert_eq!(form.name, "A");

        edit_fields(&mut form, &mut active, Action::PrevField);
        assert_eq!(active, form.fields().len() - 1);
        edit_fields(&mut form, &mut active, Action::NextField);
        assert_eq!(active, 0);
    }
}
