use serde::Serialize;

use super::{optional, required, EntityForm, FieldSpec, FormFields};
use crate::club_error;
use crate::constants::MAX_INITIALS_LEN;
use crate::error::ClubResult;
use crate::models::TeamMember;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", true, ""),
    FieldSpec::new("position", "Position", true, "e.g., President"),
    FieldSpec::new("bio", "Bio", true, ""),
    FieldSpec::new("initials", "Initials", true, "up to 3 letters"),
    FieldSpec::new("photo", "Photo URL", false, "https://..."),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberForm {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub initials: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMemberPayload {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub initials: String,
    pub photo: String,
}

impl FormFields for TeamMemberForm {
    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.position,
            2 => &self.bio,
            3 => &self.initials,
            4 => &self.photo,
            _ => "",
        }
    }

    fn set_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.position = value,
            2 => self.bio = value,
            // typed initials are shown uppercase straight away
            3 => self.initials = value.to_uppercase(),
            4 => self.photo = value,
            _ => {}
        }
    }
}

impl EntityForm for TeamMemberForm {
    type Item = TeamMember;
    type Payload = TeamMemberPayload;

    fn from_item(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            position: member.position.clone(),
            bio: member.bio.clone(),
            initials: member.initials.clone(),
            photo: member.photo.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> ClubResult<TeamMemberPayload> {
        let initials = required("Initials", &self.initials)?.to_uppercase();
        if initials.chars().count() > MAX_INITIALS_LEN {
            return Err(club_error!(
                InvalidInput,
                "Initials can be at most {} characters, got '{}'",
                MAX_INITIALS_LEN,
                initials
            ));
        }

        Ok(TeamMemberPayload {
            name: required("Name", &self.name)?,
            position: required("Position", &self.position)?,
            bio: required("Bio", &self.bio)?,
            initials,
            photo: optional(&self.photo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TeamMemberForm {
        TeamMemberForm {
            name: "Asha Rani".to_string(),
            position: "President".to_string(),
            bio: "Builds things".to_string(),
            initials: "ar".to_string(),
            photo: String::new(),
        }
    }

    #[test]
    fn initials_are_uppercased() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.initials, "AR");
        assert_eq!(payload.photo, "");

        let mut form = TeamMemberForm::default();
        form.set_value(3, "dp".to_string());
        assert_eq!(form.initials, "DP");
    }

    #[test]
    fn initials_longer_than_three_are_rejected() {
        let form = TeamMemberForm { initials: "ABCD".to_string(), ..filled() };
        assert!(form.validate().is_err());

        let form = TeamMemberForm { initials: " ".to_string(), ..filled() };
        assert!(form.validate().is_err());
    }
}
