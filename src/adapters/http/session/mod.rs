//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::SessionResponse;
pub use handlers::SessionAppState;
pub use routes::session_router;
