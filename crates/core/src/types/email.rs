//! Account email address.
//!
//! The auth service owns real validation; the storefront only rejects
//! payloads it could not greet a user with. Deserialization goes through
//! [`Email::parse`], so a `User` with a malformed address never decodes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why an address was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must contain exactly one @ symbol")]
    AtSymbolCount,
    #[error("email needs text on both sides of the @")]
    MissingPart,
}

/// An address with exactly one `@` and text on both sides of it.
///
/// ```
/// use honey_core::Email;
///
/// let email = Email::parse("worker.bee@honey.test").unwrap();
/// assert_eq!(email.local_part(), "worker.bee");
/// assert!(Email::parse("hive@").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// RFC 5321 path limit.
    pub const MAX_LENGTH: usize = 254;

    /// Validate `raw` as an account email.
    ///
    /// Surrounding whitespace is trimmed before checking.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] naming the first structural problem found.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if raw.matches('@').count() != 1 {
            return Err(EmailError::AtSymbolCount);
        }
        match raw.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(raw.to_owned()))
            }
            _ => Err(EmailError::MissingPart),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the `@`, used as a fallback greeting.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
