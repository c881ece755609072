//! Login / sign-up form validation.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use super::profile::{looks_like_email, UserProfile};

/// Minimum password length accepted by the form, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Which variant of the form was submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

/// A single form error. The display text is shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl CredentialError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            CredentialError::EmailRequired | CredentialError::EmailInvalid => "email",
            CredentialError::PasswordRequired | CredentialError::PasswordTooShort => "password",
            CredentialError::PasswordMismatch => "confirm_password",
        }
    }
}

/// Submitted form. Passwords are never stored or compared with anything
/// beyond the confirmation field.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: SecretString,
    #[serde(default)]
    pub confirm_password: Option<SecretString>,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode: AuthMode::Login,
            email: email.into(),
            password: SecretString::new(password.into()),
            confirm_password: None,
        }
    }

    pub fn sign_up(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            mode: AuthMode::SignUp,
            email: email.into(),
            password: SecretString::new(password.into()),
            confirm_password: Some(SecretString::new(confirm_password.into())),
        }
    }

    /// Checks the form and returns the profile to remember.
    ///
    /// At most one error is reported per field.
    pub fn validate(&self) -> Result<UserProfile, Vec<CredentialError>> {
        let mut errors = Vec::new();

        if self.email.is_empty() {
            errors.push(CredentialError::EmailRequired);
        } else if !looks_like_email(&self.email) {
            errors.push(CredentialError::EmailInvalid);
        }

        let password = self.password.expose_secret();
        if password.is_empty() {
            errors.push(CredentialError::PasswordRequired);
        } else if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            errors.push(CredentialError::PasswordTooShort);
        }

        if self.mode == AuthMode::SignUp {
            let confirm = self
                .confirm_password
                .as_ref()
                .map(|c| c.expose_secret().as_str())
                .unwrap_or("");
            if confirm != password {
                errors.push(CredentialError::PasswordMismatch);
            }
        }

        if errors.is_empty() {
            UserProfile::from_email(&self.email).map_err(|_| vec![CredentialError::EmailInvalid])
        } else {
            Err(errors)
        }
    }
}
