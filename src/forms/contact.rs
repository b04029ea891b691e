use lazy_static::lazy_static;
use regex::Regex;

use super::{required, FieldSpec, FormFields};
use crate::club_error;
use crate::error::ClubResult;
use crate::models::{ContactMessage, ContactType};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", true, "Your name"),
    FieldSpec::new("email", "Email", true, "your.email@example.com"),
    FieldSpec::new("type", "Type", false, "general, join, collaboration, event, technical, other"),
    FieldSpec::new("subject", "Subject", true, ""),
    FieldSpec::new("message", "Message", true, ""),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub contact_type: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            contact_type: ContactType::General.as_str().to_string(),
            subject: String::new(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> ClubResult<ContactMessage> {
        let email = required("Email", &self.email)?;
        if !EMAIL_RE.is_match(&email) {
            return Err(club_error!(InvalidInput, "'{}' is not a valid email address", email));
        }

        let contact_type = if self.contact_type.trim().is_empty() {
            ContactType::General
        } else {
            ContactType::parse(&self.contact_type).ok_or_else(|| {
                club_error!(InvalidInput, "Unknown message type '{}'", self.contact_type.trim())
            })?
        };

        Ok(ContactMessage {
            name: required("Name", &self.name)?,
            email,
            subject: required("Subject", &self.subject)?,
            message: required("Message", &self.message)?,
            contact_type,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl FormFields for ContactForm {
    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.contact_type,
            3 => &self.subject,
            4 => &self.message,
            _ => "",
        }
    }

    fn set_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.email = value,
            2 => self.contact_type = value,
            3 => self.subject = value,
            4 => self.message = value,
            _ => {}
        }
    }
}
