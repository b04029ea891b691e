use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_optional_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo: Option<String>,
}

impl TeamMember {
    /// Avatar text when there is no photo. Falls back to the first letters
    /// of the name if the record has no initials.
    pub fn avatar_initials(&self) -> String {
        let stored = self.initials.trim();
        if !stored.is_empty() {
            return stored.to_uppercase();
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }
}
