use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_optional_string, deserialize_tags};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Upcoming,
    Past,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Upcoming => "upcoming",
            EventType::Past => "past",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "upcoming" => Some(EventType::Upcoming),
            "past" => Some(EventType::Past),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Upcoming => "Upcoming",
            EventType::Past => "Past",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            EventType::Upcoming => EventType::Past,
            EventType::Past => EventType::Upcoming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub time: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub link_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl Event {
    pub fn is_upcoming(&self) -> bool {
        self.event_type == EventType::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_and_blank_optionals() {
        let event: Event = serde_json::from_value(json!({
            "id": 42,
            "type": "past",
            "date": "2024-03-01",
            "time": "",
            "title": "Hack Night",
            "description": "All night hacking",
            "location": null,
            "linkText": "Register",
            "tags": "not-a-list"
        }))
        .unwrap();

        assert_eq!(event.id, "42");
        assert_eq!(event.event_type, EventType::Past);
        assert_eq!(event.time, None);
        assert_eq!(event.location, None);
        assert_eq!(event.link_text.as_deref(), Some("Register"));
        assert!(event.tags.is_empty());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<Event, _> = serde_json::from_value(json!({
            "id": "e1",
            "type": "cancelled",
            "date": "2024-03-01",
            "title": "x"
        }));
        assert!(result.is_err());
    }
}
