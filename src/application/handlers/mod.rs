//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod footprint;
pub mod session;

pub use footprint::{
    CalculateBusinessFootprintCommand, CalculateBusinessFootprintHandler,
    CalculateIndividualFootprintCommand, CalculateIndividualFootprintHandler, ListFactorsHandler,
    ShareFootprintCommand, ShareFootprintHandler,
};
pub use session::{
    GetSessionHandler, GetSessionQuery, SignInCommand, SignInHandler, SignInResult,
    SignOutCommand, SignOutHandler,
};
