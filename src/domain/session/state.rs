//! Session state: who, if anyone, is signed in.

use serde::Serialize;

use super::profile::UserProfile;
use crate::domain::foundation::Timestamp;

/// Sign-in state of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn {
        profile: UserProfile,
        signed_in_at: Timestamp,
    },
}

impl Session {
    /// A session restored from a remembered profile.
    ///
    /// The stored record has no timestamp, so the restore time is used.
    pub fn restored(profile: UserProfile) -> Self {
        Session::SignedIn {
            profile,
            signed_in_at: Timestamp::now(),
        }
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        *self = Session::SignedIn {
            profile,
            signed_in_at: Timestamp::now(),
        };
    }

    /// Clears the session and returns the profile that was signed in.
    pub fn sign_out(&mut self) -> Option<UserProfile> {
        match std::mem::take(self) {
            Session::SignedIn { profile, .. } => Some(profile),
            Session::Anonymous => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Session::SignedIn { profile, .. } => Some(profile),
            Session::Anonymous => None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile().map(|p| p.name.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::from_email("meera@example.in").unwrap()
    }

    #[test]
    fn starts_anonymous() {
        let session = Session::default();
        assert!(!session.is_signed_in());
        assert!(session.display_name().is_none());
    }

    #[test]
    fn sign_in_then_out() {
        let mut session = Session::Anonymous;
        session.sign_in(profile());
        assert_eq!(session.display_name(), Some("meera"));

        assert_eq!(session.sign_out(), Some(profile()));
        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.sign_out(), None);
    }

    #[test]
    fn sign_in_replaces_previous_profile() {
        let mut session = Session::restored(profile());
        session.sign_in(UserProfile::from_email("arun@example.in").unwrap());
        assert_eq!(session.display_name(), Some("arun"));
    }
}
