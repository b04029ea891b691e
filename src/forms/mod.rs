//! Form state for the admin workflows and the contact page.
//!
//! Forms hold raw strings the way a user typed them; `validate` turns them
//! into the payload that goes over the wire.

pub mod contact;
pub mod event;
pub mod gallery;
pub mod login;
pub mod team;

pub use contact::ContactForm;
pub use event::{EventForm, EventPayload};
pub use gallery::{GalleryForm, GalleryPayload};
pub use login::Credentials;
pub use team::{TeamMemberForm, TeamMemberPayload};

use serde::Serialize;

use crate::club_error;
use crate::error::ClubResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Also the CLI flag name.
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub hint: &'static str,
    pub secret: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, required: bool, hint: &'static str) -> Self {
        Self { key, label, required, hint, secret: false }
    }
}

/// Indexed access to a form's text fields, so one editor can drive any form.
pub trait FormFields {
    fn fields(&self) -> &'static [FieldSpec];
    fn value(&self, index: usize) -> &str;
    fn set_value(&mut self, index: usize, value: String);

    fn field_index(&self, key: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.key == key)
    }
}

/// A form that creates or edits one backend entity.
pub trait EntityForm: FormFields + Default + Clone {
    type Item;
    type Payload: Serialize;

    fn from_item(item: &Self::Item) -> Self;
    fn validate(&self) -> ClubResult<Self::Payload>;

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Split a comma-separated tag string, trimming each entry and dropping
/// empty ones. Order is preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

pub(crate) fn required(label: &str, value: &str) -> ClubResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(club_error!(InvalidInput, "{} is required", label));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn optional(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(parse_tags("Tech, , Open"), vec!["Tech", "Open"]);
        assert_eq!(parse_tags("  AI ,ML,,  Web3  ,"), vec!["AI", "ML", "Web3"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn tags_keep_their_order() {
        let tags = parse_tags("zeta, alpha, mid");
        assert_eq!(join_tags(&tags), "zeta, alpha, mid");
    }
}
