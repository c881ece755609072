//! Session command and query handlers.

mod get_session;
mod sign_in;
mod sign_out;

pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use sign_in::{SignInCommand, SignInHandler, SignInResult};
pub use sign_out::{SignOutCommand, SignOutHandler};
