//! Response bodies for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::Session;

/// A signed-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub email: String,
    pub name: String,
    pub signed_in_at: Timestamp,
    /// False when the profile could not be persisted; the session still works
    /// for this response but will not be restorable.
    #[serde(default = "default_remembered")]
    pub remembered: bool,
}

fn default_remembered() -> bool {
    true
}

impl SessionResponse {
    /// Builds the body for a signed-in session; `None` for an anonymous one.
    pub fn from_session(session_id: SessionId, session: &Session, remembered: bool) -> Option<Self> {
        match session {
            Session::SignedIn {
                profile,
                signed_in_at,
            } => Some(Self {
                session_id: session_id.to_string(),
                email: profile.email.clone(),
                name: profile.name.clone(),
                signed_in_at: *signed_in_at,
                remembered,
            }),
            Session::Anonymous => None,
        }
    }
}
