use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    #[default]
    General,
    Join,
    Collaboration,
    Event,
    Technical,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 6] = [
        ContactType::General,
        ContactType::Join,
        ContactType::Collaboration,
        ContactType::Event,
        ContactType::Technical,
        ContactType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::General => "general",
            ContactType::Join => "join",
            ContactType::Collaboration => "collaboration",
            ContactType::Event => "event",
            ContactType::Technical => "technical",
            ContactType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactType::General => "General Inquiry",
            ContactType::Join => "Join the Club",
            ContactType::Collaboration => "Collaboration",
            ContactType::Event => "Event Related",
            ContactType::Technical => "Technical Support",
            ContactType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
}
