//! Signed-in user as reported by the auth API.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// The currently authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl User {
    /// Name to greet the user with: full name if set, else the email local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.local_part(),
        }
    }
}
