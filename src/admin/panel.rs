use crate::admin::resource::{delete_question, Events, Gallery, Resource, Team};
use crate::client::{Backend, ClubApi};
use crate::error::{ApiError, ClubError};
use crate::forms::{Credentials, EntityForm};
use crate::logging::{log_error, log_info};
use crate::models::{Event, EventType, GalleryItem, TeamMember};
use crate::session::{LoginOutcome, SessionController, SessionState};
use crate::status::Status;

/// Local copies of the backend lists, refreshed after every mutation.
#[derive(Debug, Clone, Default)]
pub struct AdminData {
    pub events: Vec<Event>,
    pub team: Vec<TeamMember>,
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub past_events: usize,
    pub members: usize,
    pub photos: usize,
}

/// Which lists failed during a bulk refresh. The others were updated.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub failed: Vec<(&'static str, ApiError)>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn error_for(&self, key: &str) -> Option<&ApiError> {
        self.failed.iter().find(|(k, _)| *k == key).map(|(_, e)| e)
    }
}

/// The admin side of the client: session plus CRUD over the three lists.
pub struct AdminPanel<B> {
    pub api: ClubApi<B>,
    pub session: SessionController,
    pub data: AdminData,
    pub loading: bool,
    pub status: Option<Status>,
}

impl<B: Backend> AdminPanel<B> {
    pub fn new(api: ClubApi<B>, session: SessionController) -> Self {
        Self {
            api,
            session,
            data: AdminData::default(),
            loading: false,
            status: None,
        }
    }

    /// Finish start-up: verify a stored token and load data if it holds.
    pub async fn resume(&mut self) -> SessionState {
        if self.session.state() != SessionState::Verifying {
            return self.session.state();
        }

        self.loading = true;
        let state = self.session.verify(&self.api).await;
        self.loading = false;

        if state == SessionState::Authenticated {
            self.refresh_all().await;
        }
        state
    }

    pub async fn login(&mut self, credentials: &mut Credentials) -> LoginOutcome {
        self.loading = true;
        self.status = None;
        let outcome = self.session.login(&self.api, credentials).await;
        self.loading = false;

        self.status = Some(match &outcome {
            LoginOutcome::Success => Status::success(outcome.message()),
            other => Status::error(other.message()),
        });

        if outcome == LoginOutcome::Success {
            self.refresh_all().await;
        }
        outcome
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.data = AdminData::default();
        self.status = None;
    }

    /// Refetch all three lists as independent concurrent requests. A failed
    /// list keeps its previous contents; nothing is retried.
    pub async fn refresh_all(&mut self) -> RefreshReport {
        let (events, team, gallery) = tokio::join!(
            self.api.list_events(),
            self.api.list_team(),
            self.api.list_gallery()
        );

        let mut report = RefreshReport::default();
        match events {
            Ok(items) => self.data.events = items,
            Err(e) => report.failed.push((Events::KEY, e)),
        }
        match team {
            Ok(items) => self.data.team = items,
            Err(e) => report.failed.push((Team::KEY, e)),
        }
        match gallery {
            Ok(items) => self.data.gallery = items,
            Err(e) => report.failed.push((Gallery::KEY, e)),
        }

        for (list, error) in &report.failed {
            log_error(&format!("Failed to fetch {}: {}", list, error));
        }
        if let Some((_, error)) = report.failed.iter().find(|(_, e)| e.is_unauthorized()) {
            let error = error.clone();
            self.fail(&error, "Failed to load data");
        }

        report
    }

    pub async fn create<R: Resource>(&mut self, form: &mut R::Form) -> bool {
        if !self.require_session() {
            return false;
        }
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.status = Some(Status::error(validation_message(e)));
                return false;
            }
        };

        self.loading = true;
        let result = self.api.create(R::PATH, &payload).await;
        self.loading = false;

        match result {
            Ok(_) => {
                log_info(&format!("Created {}", R::NOUN));
                self.status = Some(Status::success(format!("{} added successfully!", R::LABEL)));
                form.reset();
                self.refresh_all().await;
                true
            }
            Err(e) => {
                self.fail(&e, &format!("Failed to add {}", R::NOUN));
                false
            }
        }
    }

    pub async fn update<R: Resource>(&mut self, id: &str, form: &R::Form) -> bool {
        if !self.require_session() {
            return false;
        }
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.status = Some(Status::error(validation_message(e)));
                return false;
            }
        };

        self.loading = true;
        let result = self.api.update(R::PATH, id, &payload).await;
        self.loading = false;

        match result {
            Ok(_) => {
                log_info(&format!("Updated {} {}", R::NOUN, id));
                self.status = Some(Status::success(format!("{} updated successfully!", R::LABEL)));
                self.refresh_all().await;
                true
            }
            Err(e) => {
                self.fail(&e, &format!("Failed to update {}", R::NOUN));
                false
            }
        }
    }

    /// Delete after `confirm` approves the question. Declining is not an
    /// error and sends nothing.
    pub async fn delete<R, F>(&mut self, id: &str, confirm: F) -> bool
    where
        R: Resource,
        F: FnOnce(&str) -> bool,
    {
        if !self.require_session() {
            return false;
        }
        if !confirm(&delete_question::<R>()) {
            return false;
        }

        self.loading = true;
        let result = self.api.remove(R::PATH, id).await;
        self.loading = false;

        match result {
            Ok(_) => {
                log_info(&format!("Deleted {} {}", R::NOUN, id));
                self.status = Some(Status::success(format!("{} {} successfully!", R::LABEL, R::REMOVED)));
                self.refresh_all().await;
                true
            }
            Err(e) => {
                let verb = if R::REMOVED == "removed" { "remove" } else { "delete" };
                self.fail(&e, &format!("Failed to {} {}", verb, R::NOUN));
                false
            }
        }
    }

    /// Form pre-populated from an existing record.
    pub fn edit_form<R: Resource>(&self, id: &str) -> Option<R::Form> {
        R::find(&self.data, id).map(R::Form::from_item)
    }

    pub fn summary(&self) -> DashboardSummary {
        let upcoming = self
            .data
            .events
            .iter()
            .filter(|e| e.event_type == EventType::Upcoming)
            .count();

        DashboardSummary {
            total_events: self.data.events.len(),
            upcoming_events: upcoming,
            past_events: self.data.events.len() - upcoming,
            members: self.data.team.len(),
            photos: self.data.gallery.len(),
        }
    }

    fn require_session(&mut self) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        self.status = Some(Status::error("Please log in first."));
        false
    }

    fn fail(&mut self, error: &ApiError, fallback: &str) {
        if self.session.observe(error) {
            self.data = AdminData::default();
            self.status = Some(Status::error("Session expired. Please log in again."));
        } else {
            self.status = Some(Status::error(error.user_message(fallback)));
        }
    }
}

fn validation_message(error: ClubError) -> String {
    match error {
        ClubError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}
