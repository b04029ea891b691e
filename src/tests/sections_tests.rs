use serde_json::json;

use super::support::{event, member, FakeBackend};
use crate::client::ClubApi;
use crate::constants::{CAROUSEL_STEP, CONTACT_PATH, TEAM_PATH};
use crate::forms::ContactForm;
use crate::models::EventType;
use crate::sections::{self, submit_contact, EventsSection, Section};
use crate::status::{Status, StatusKind};

fn contact_form() -> ContactForm {
    ContactForm {
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        subject: "Joining".to_string(),
        message: "How do I join the club?".to_string(),
        ..ContactForm::default()
    }
}

#[tokio::test]
async fn test_sections_load_independently() {
    let backend = FakeBackend::new()
        .with_events(vec![event("1", "upcoming", "2025-04-02", "Rust Workshop")])
        .with_team(vec![member("10", "Asha Rani")]);
    backend.fail("GET", TEAM_PATH, 500, json!({ "message": "db down" }));
    let api = ClubApi::new(backend);

    let (events, team, gallery) = tokio::join!(
        sections::load_events(&api),
        sections::load_team(&api),
        sections::load_gallery(&api)
    );

    assert_eq!(events.items().len(), 1);
    assert_eq!(team, Section::Failed("db down".to_string()));
    assert_eq!(gallery, Section::Empty);
}

#[tokio::test]
async fn test_empty_list_is_its_own_state() {
    let api = ClubApi::new(FakeBackend::new());

    assert_eq!(sections::load_events(&api).await, Section::Empty);
}

#[test]
fn test_events_tab_filters_and_resets_scroll() {
    let events = vec![
        serde_json::from_value(event("1", "upcoming", "2025-04-02", "Rust Workshop")).unwrap(),
        serde_json::from_value(event("2", "past", "2024-11-20", "Hack Night")).unwrap(),
        serde_json::from_value(event("3", "upcoming", "2025-03-15", "Intro to Git")).unwrap(),
    ];
    let mut section = EventsSection::new(CAROUSEL_STEP);
    section.carousel.set(Section::Ready(events));
    section.carousel.scroll.set_extent(500);
    section.carousel.scroll.step_right();

    let titles: Vec<&str> = section.visible().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust Workshop", "Intro to Git"]);

    section.switch_tab(EventType::Past);
    assert_eq!(section.visible().len(), 1);
    assert_eq!(section.carousel.scroll.offset(), 0);
    assert_eq!(section.empty_message(), "No past events yet");
}

#[test]
fn test_faculty_is_static() {
    let faculty = sections::faculty();
    assert!(!faculty.items().is_empty());
    assert!(!faculty.is_loading());
}

#[tokio::test]
async fn test_contact_success_clears_form() {
    let api = ClubApi::new(FakeBackend::new());
    let mut form = contact_form();

    let status = submit_contact(&api, &mut form).await;

    assert_eq!(
        status,
        Status::success("Thank you for contacting us! We will get back to you soon.")
    );
    assert_eq!(form, ContactForm::default());

    let sent = api.backend().last_body("POST").unwrap();
    assert_eq!(sent["type"], "general");
    assert_eq!(sent["email"], "ravi@example.com");
}

#[tokio::test]
async fn test_contact_invalid_email_is_not_sent() {
    let api = ClubApi::new(FakeBackend::new());
    let mut form = ContactForm {
        email: "not-an-email".to_string(),
        ..contact_form()
    };

    let status = submit_contact(&api, &mut form).await;

    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.contains("not-an-email"));
    assert_eq!(api.backend().count("POST", CONTACT_PATH), 0);
    assert_eq!(form.name, "Ravi");
}

#[tokio::test]
async fn test_contact_failure_keeps_form() {
    let backend = FakeBackend::new();
    backend.fail("POST", CONTACT_PATH, 429, json!({ "error": "Too many messages" }));
    let api = ClubApi::new(backend);
    let mut form = contact_form();

    let status = submit_contact(&api, &mut form).await;
    assert_eq!(status, Status::error("Too many messages"));
    assert_eq!(form, contact_form());

    let backend = FakeBackend::new();
    backend.fail("POST", CONTACT_PATH, 500, json!({}));
    let api = ClubApi::new(backend);
    let status = submit_contact(&api, &mut form).await;
    assert_eq!(status, Status::error("Failed to send message. Please try again."));
}
