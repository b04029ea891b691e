use serde::Serialize;

use super::{optional, required, EntityForm, FieldSpec, FormFields};
use crate::error::ClubResult;
use crate::models::GalleryItem;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", true, ""),
    FieldSpec::new("description", "Description", false, ""),
    FieldSpec::new("image-url", "Image URL", true, "https://..."),
    FieldSpec::new("event-id", "Event ID", false, "leave empty for none"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Empty means "no event selected".
    pub event_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPayload {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Always serialized; an empty selection is `null`, never `""`.
    pub event_id: Option<String>,
}

impl FormFields for GalleryForm {
    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.title,
            1 => &self.description,
            2 => &self.image_url,
            3 => &self.event_id,
            _ => "",
        }
    }

    fn set_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.title = value,
            1 => self.description = value,
            2 => self.image_url = value,
            3 => self.event_id = value,
            _ => {}
        }
    }
}

impl EntityForm for GalleryForm {
    type Item = GalleryItem;
    type Payload = GalleryPayload;

    fn from_item(item: &GalleryItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
            image_url: item.image_url.clone(),
            event_id: item.event_id.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> ClubResult<GalleryPayload> {
        let event_id = optional(&self.event_id);

        Ok(GalleryPayload {
            title: required("Title", &self.title)?,
            description: optional(&self.description),
            image_url: required("Image URL", &self.image_url)?,
            event_id: if event_id.is_empty() { None } else { Some(event_id) },
        })
    }
}
