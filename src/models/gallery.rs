use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_optional_id, deserialize_optional_string, Event};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    pub image_url: String,
    /// Weak reference to an event, display only.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub event_id: Option<String>,
}

impl GalleryItem {
    pub fn linked_event<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        let id = self.event_id.as_deref()?;
        events.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn linked_event_follows_weak_reference() {
        let events: Vec<Event> = serde_json::from_value(json!([
            { "id": 7, "type": "past", "date": "2024-11-20", "title": "Hack Night", "description": "Overnight build" }
        ]))
        .unwrap();
        let item: GalleryItem = serde_json::from_value(json!({
            "id": "p1",
            "title": "Crowd shot",
            "imageUrl": "https://img.example/1.jpg",
            "eventId": 7
        }))
        .unwrap();

        assert_eq!(item.linked_event(&events).map(|e| e.title.as_str()), Some("Hack Night"));

        let orphan = GalleryItem { event_id: Some("99".to_string()), ..item.clone() };
        assert!(orphan.linked_event(&events).is_none());

        let unlinked = GalleryItem { event_id: None, ..item };
        assert!(unlinked.linked_event(&events).is_none());
    }
}
