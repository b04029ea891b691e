use super::{FieldSpec, FormFields};
use crate::constants::{MAX_PASSWORD_LEN, MAX_USERNAME_LEN};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("username", "Username", true, ""),
    FieldSpec {
        key: "password",
        label: "Password",
        required: true,
        hint: "",
        secret: true,
    },
];

/// Login form contents. Cleared as soon as they are no longer needed.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username trimmed and lowercased, password trimmed. Returns the
    /// message to show when the input can't be submitted.
    pub fn sanitized(&self) -> Result<Credentials, String> {
        let username = self.username.trim().to_lowercase();
        let password = self.password.trim().to_string();

        if username.is_empty() || password.is_empty() {
            return Err("Please enter both username and password".to_string());
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(format!("Username can be at most {} characters", MAX_USERNAME_LEN));
        }
        if password.chars().count() > MAX_PASSWORD_LEN {
            return Err(format!("Password can be at most {} characters", MAX_PASSWORD_LEN));
        }

        Ok(Credentials { username, password })
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

impl FormFields for Credentials {
    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.username,
            1 => &self.password,
            _ => "",
        }
    }

    fn set_value(&mut self, index: usize, value: String) {
        match index {
            0 => self.username = value,
            1 => self.password = value,
            _ => {}
        }
    }
}
