//! HTTP adapter for footprint endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BreakdownEntry, FactorListResponse, FootprintResponse, ShareRequest,
};
pub use handlers::FootprintAppState;
pub use routes::footprint_router;
