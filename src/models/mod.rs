pub mod api;
pub mod contact;
pub mod event;
pub mod faculty;
pub mod gallery;
pub mod team;

pub use api::{ListEnvelope, LoginData, LoginEnvelope, VerifyResponse};
pub use contact::{ContactMessage, ContactType};
pub use event::{Event, EventType};
pub use faculty::{FacultyMentor, FACULTY_MENTORS};
pub use gallery::GalleryItem;
pub use team::TeamMember;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// The backend hands out ids as strings or numbers depending on the store.
fn id_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| serde::de::Error::custom("expected a string or numeric id"))
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_from_value(Value::deserialize(deserializer)?))
}

/// `null`, missing and `""` all mean "not set".
pub(crate) fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Anything that isn't an array of strings reads as no tags.
pub(crate) fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}
