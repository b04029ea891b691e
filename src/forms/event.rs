use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::{join_tags, optional, parse_tags, required, EntityForm, FieldSpec, FormFields};
use crate::club_error;
use crate::error::ClubResult;
use crate::models::{Event, EventType};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("type", "Type", true, "upcoming or past"),
    FieldSpec::new("date", "Date", true, "YYYY-MM-DD"),
    FieldSpec::new("time", "Time", false, "HH:MM"),
    FieldSpec::new("title", "Title", true, ""),
    FieldSpec::new("description", "Description", true, ""),
    FieldSpec::new("location", "Location", false, "e.g., Tech Hub, Online, Conference Room"),
    FieldSpec::new("image", "Image URL", false, "https://example.com/event-image.jpg"),
    FieldSpec::new("link", "Link", false, "https://..."),
    FieldSpec::new("link-text", "Link Text", false, "e.g., Register Now"),
    FieldSpec::new("tags", "Tags", false, "e.g., Tech, Open, Workshop"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image: String,
    pub link: String,
    pub link_text: String,
    /// Comma-separated, parsed on submit.
    pub tags: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            event_type: EventType::Upcoming.as_str().to_string(),
            date: String::new(),
            time: String::new(),
            title: String::new(),
            description: String::new(),
            location: String::new(),
            image: String::new(),
            link: String::new(),
            link_text: String::new(),
            tags: String::new(),
        }
    }
}

/// Body of `POST /events` and `PUT /events/:id`. Unset optional text goes
/// out as an empty string, which is what the backend validates against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image: String,
    pub link: String,
    pub link_text: String,
    pub tags: Vec<String>,
}

impl FormFields for EventForm {
    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.event_type,
            1 => &self.date,
            2 => &self.time,
            3 => &self.title,
            4 => &self.description,
            5 => &self.location,
            6 => &self.image,
            7 => &self.link,
            8 => &self.link_text,
            9 => &self.tags,
            _ => "",
        }
    }

    fn set_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.event_type = value,
            1 => self.date = value,
            2 => self.time = value,
            3 => self.title = value,
            4 => self.description = value,
            5 => self.location = value,
            6 => self.image = value,
            7 => self.link = value,
            8 => self.link_text = value,
            9 => self.tags = value,
            _ => {}
        }
    }
}

impl EntityForm for EventForm {
    type Item = Event;
    type Payload = EventPayload;

    fn from_item(event: &Event) -> Self {
        Self {
            event_type: event.event_type.as_str().to_string(),
            date: event.date.clone(),
            time: event.time.clone().unwrap_or_default(),
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone().unwrap_or_default(),
            image: event.image.clone().unwrap_or_default(),
            link: event.link.clone().unwrap_or_default(),
            link_text: event.link_text.clone().unwrap_or_default(),
            tags: join_tags(&event.tags),
        }
    }

    fn validate(&self) -> ClubResult<EventPayload> {
        let event_type = EventType::parse(&self.event_type).ok_or_else(|| {
            club_error!(InvalidInput, "Type must be 'upcoming' or 'past', got '{}'", self.event_type.trim())
        })?;

        let date = required("Date", &self.date)?;
        NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| club_error!(InvalidInput, "Date must look like YYYY-MM-DD, got '{}'", date))?;

        let time = optional(&self.time);
        if !time.is_empty() {
            NaiveTime::parse_from_str(&time, "%H:%M")
                .map_err(|_| club_error!(InvalidInput, "Time must look like HH:MM, got '{}'", time))?;
        }

        Ok(EventPayload {
            event_type,
            date,
            time,
            title: required("Title", &self.title)?,
            description: required("Description", &self.description)?,
            location: optional(&self.location),
            image: optional(&self.image),
            link: optional(&self.link),
            link_text: optional(&self.link_text),
            tags: parse_tags(&self.tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EventForm {
        EventForm {
            date: "2025-04-02".to_string(),
            title: " Rust Workshop ".to_string(),
            description: "Ownership from scratch".to_string(),
            tags: "Tech, , Open".to_string(),
            ..EventForm::default()
        }
    }

    #[test]
    fn payload_trims_and_keeps_blank_optionals() {
        let payload = filled().validate().unwrap();

        assert_eq!(payload.event_type, EventType::Upcoming);
        assert_eq!(payload.title, "Rust Workshop");
        assert_eq!(payload.location, "");
        assert_eq!(payload.tags, vec!["Tech", "Open"]);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["type"], "upcoming");
        assert_eq!(body["linkText"], "");
    }

    #[test]
    fn date_and_time_must_parse() {
        let form = EventForm { date: "02/04/2025".to_string(), ..filled() };
        assert!(form.validate().is_err());

        let form = EventForm { time: "7pm".to_string(), ..filled() };
        assert!(form.validate().is_err());

        let form = EventForm { time: "19:30".to_string(), ..filled() };
        assert_eq!(form.validate().unwrap().time, "19:30");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let form = EventForm { description: "   ".to_string(), ..filled() };
        let error = form.validate().unwrap_err();
        assert!(error.to_string().contains("Description is required"));

        let form = EventForm { event_type: "someday".to_string(), ..filled() };
        assert!(form.validate().is_err());
    }
}
