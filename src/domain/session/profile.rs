//! The remembered `{ email, name }` record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Profile remembered between visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    /// Part of the email before the first `@`.
    pub name: String,
}

impl UserProfile {
    /// Builds a profile from an email address.
    pub fn from_email(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !looks_like_email(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected name@domain.tld",
            ));
        }
        let name = email.split('@').next().unwrap_or_default().to_string();
        Ok(Self { email, name })
    }
}

/// Same acceptance as searching for `\S+@\S+\.\S+` anywhere in the text.
///
/// One pass per whitespace-free run: the earliest `@` with something before
/// it, and the last `.` with something after it, need a character between.
pub(crate) fn looks_like_email(text: &str) -> bool {
    text.split(char::is_whitespace).any(run_looks_like_email)
}

fn run_looks_like_email(run: &str) -> bool {
    let len = run.chars().count();
    let mut first_at = None;
    let mut last_dot = None;
    for (i, c) in run.chars().enumerate() {
        match c {
            '@' if i >= 1 && first_at.is_none() => first_at = Some(i),
            '.' if i + 2 <= len => last_dot = Some(i),
            _ => {}
        }
    }
    matches!((first_at, last_dot), (Some(at), Some(dot)) if dot >= at + 2)
}
