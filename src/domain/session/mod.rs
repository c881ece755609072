//! Session domain module.
//!
//! The remembered user of a browser-style session. Sign-in does not
//! authenticate anybody: it validates the form shape, derives a display name
//! from the email and remembers `{ email, name }`.

mod credentials;
mod profile;
mod state;

pub use credentials::{AuthMode, CredentialError, Credentials, MIN_PASSWORD_LENGTH};
pub use profile::UserProfile;
pub use state::Session;
