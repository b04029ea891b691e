use crate::admin::AdminData;
use crate::constants::{EVENTS_PATH, GALLERY_PATH, TEAM_PATH};
use crate::error::ClubResult;
use crate::formatting::{print_events, print_gallery, print_team, OutputFormat};
use crate::forms::{EntityForm, EventForm, GalleryForm, TeamMemberForm};
use crate::models::{Event, GalleryItem, TeamMember};

/// One kind of backend record the admin panel manages.
pub trait Resource {
    type Item: Clone;
    type Form: EntityForm<Item = Self::Item>;

    const PATH: &'static str;
    /// Collection name used on the command line and in refresh reports.
    const KEY: &'static str;
    /// Lowercase noun for messages ("team member").
    const NOUN: &'static str;
    /// Capitalised noun for headings ("Team member").
    const LABEL: &'static str;
    /// Verb used for a successful delete ("deleted", "removed").
    const REMOVED: &'static str;

    fn id(item: &Self::Item) -> &str;
    fn summary(item: &Self::Item) -> String;
    fn items(data: &AdminData) -> &[Self::Item];
    fn print(data: &AdminData, format: OutputFormat) -> ClubResult<()>;

    fn find<'a>(data: &'a AdminData, id: &str) -> Option<&'a Self::Item> {
        Self::items(data).iter().find(|item| Self::id(item) == id)
    }
}

pub struct Events;
pub struct Team;
pub struct Gallery;

impl Resource for Events {
    type Item = Event;
    type Form = EventForm;

    const PATH: &'static str = EVENTS_PATH;
    const KEY: &'static str = "events";
    const NOUN: &'static str = "event";
    const LABEL: &'static str = "Event";
    const REMOVED: &'static str = "deleted";

    fn id(item: &Event) -> &str {
        &item.id
    }

    fn summary(item: &Event) -> String {
        format!("{} ({}, {})", item.title, item.date, item.event_type.as_str())
    }

    fn items(data: &AdminData) -> &[Event] {
        &data.events
    }

    fn print(data: &AdminData, format: OutputFormat) -> ClubResult<()> {
        print_events(&data.events, format, "No events yet")
    }
}

impl Resource for Team {
    type Item = TeamMember;
    type Form = TeamMemberForm;

    const PATH: &'static str = TEAM_PATH;
    const KEY: &'static str = "team";
    const NOUN: &'static str = "team member";
    const LABEL: &'static str = "Team member";
    const REMOVED: &'static str = "removed";

    fn id(item: &TeamMember) -> &str {
        &item.id
    }

    fn summary(item: &TeamMember) -> String {
        format!("{} - {}", item.name, item.position)
    }

    fn items(data: &AdminData) -> &[TeamMember] {
        &data.team
    }

    fn print(data: &AdminData, format: OutputFormat) -> ClubResult<()> {
        print_team(&data.team, format, "No team members yet")
    }
}

impl Resource for Gallery {
    type Item = GalleryItem;
    type Form = GalleryForm;

    const PATH: &'static str = GALLERY_PATH;
    const KEY: &'static str = "gallery";
    const NOUN: &'static str = "gallery item";
    const LABEL: &'static str = "Gallery item";
    const REMOVED: &'static str = "deleted";

    fn id(item: &GalleryItem) -> &str {
        &item.id
    }

    fn summary(item: &GalleryItem) -> String {
        item.title.clone()
    }

    fn items(data: &AdminData) -> &[GalleryItem] {
        &data.gallery
    }

    fn print(data: &AdminData, format: OutputFormat) -> ClubResult<()> {
        print_gallery(&data.gallery, &data.events, format, "No photos yet")
    }
}

/// Confirmation question shown before a delete.
pub fn delete_question<R: Resource>() -> String {
    match R::REMOVED {
        "removed" => format!("Are you sure you want to remove this {}?", R::NOUN),
        _ => format!("Are you sure you want to delete this {}?", R::NOUN),
    }
}
