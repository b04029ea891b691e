//! Read-only public sections of the site. Each one loads its own list and
//! knows its loading and empty states.

pub mod contact;
pub mod drag;

pub use contact::submit_contact;
pub use drag::{DragScroll, DragState};

use crate::client::{Backend, ClubApi};
use crate::error::ApiResult;
use crate::logging::log_error;
use crate::models::{Event, EventType, FacultyMentor, GalleryItem, TeamMember, FACULTY_MENTORS};

#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loading,
    Ready(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> Section<T> {
    pub fn from_result(result: ApiResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Section::Empty,
            Ok(items) => Section::Ready(items),
            Err(e) => Section::Failed(e.message),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Section::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Loading
    }
}

/// A horizontally scrolling list of cards.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    pub section: Section<T>,
    pub scroll: DragScroll,
}

impl<T> Carousel<T> {
    pub fn new(step: i32) -> Self {
        Self {
            section: Section::Loading,
            scroll: DragScroll::new(step),
        }
    }

    pub fn set(&mut self, section: Section<T>) {
        self.section = section;
        self.scroll.reset();
    }
}

/// Events carousel with its upcoming/past tab.
#[derive(Debug, Clone)]
pub struct EventsSection {
    pub tab: EventType,
    pub carousel: Carousel<Event>,
}

impl EventsSection {
    pub fn new(step: i32) -> Self {
        Self {
            tab: EventType::Upcoming,
            carousel: Carousel::new(step),
        }
    }

    pub fn visible(&self) -> Vec<&Event> {
        self.carousel
            .section
            .items()
            .iter()
            .filter(|e| e.event_type == self.tab)
            .collect()
    }

    pub fn switch_tab(&mut self, tab: EventType) {
        if self.tab != tab {
            self.tab = tab;
            self.carousel.scroll.reset();
        }
    }

    pub fn empty_message(&self) -> String {
        format!("No {} events yet", self.tab.as_str())
    }
}

pub const TEAM_EMPTY: &str = "No team members yet";
pub const GALLERY_EMPTY: &str = "No photos yet";

pub async fn load_events<B: Backend>(api: &ClubApi<B>) -> Section<Event> {
    let result = api.list_events().await;
    log_failure("events", &result);
    Section::from_result(result)
}

pub async fn load_team<B: Backend>(api: &ClubApi<B>) -> Section<TeamMember> {
    let result = api.list_team().await;
    log_failure("team", &result);
    Section::from_result(result)
}

pub async fn load_gallery<B: Backend>(api: &ClubApi<B>) -> Section<GalleryItem> {
    let result = api.list_gallery().await;
    log_failure("gallery", &result);
    Section::from_result(result)
}

pub fn faculty() -> Section<FacultyMentor> {
    Section::Ready(FACULTY_MENTORS.to_vec())
}

fn log_failure<T>(what: &str, result: &ApiResult<T>) {
    if let Err(e) = result {
        log_error(&format!("Failed to fetch {}: {}", what, e));
    }
}
