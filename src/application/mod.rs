//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Footprint handlers are synchronous; session handlers await the profile store.

pub mod handlers;

pub use handlers::{
    // Footprint handlers
    CalculateBusinessFootprintCommand, CalculateBusinessFootprintHandler,
    CalculateIndividualFootprintCommand, CalculateIndividualFootprintHandler,
    ListFactorsHandler, ShareFootprintCommand, ShareFootprintHandler,
    // Session handlers
    GetSessionHandler, GetSessionQuery, SignInCommand, SignInHandler, SignInResult,
    SignOutCommand, SignOutHandler,
};
