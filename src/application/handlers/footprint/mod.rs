//! Footprint command handlers.

mod calculate_business;
mod calculate_individual;
mod list_factors;
mod share_footprint;

pub use calculate_business::{CalculateBusinessFootprintCommand, CalculateBusinessFootprintHandler};
pub use calculate_individual::{
    CalculateIndividualFootprintCommand, CalculateIndividualFootprintHandler,
};
pub use list_factors::ListFactorsHandler;
pub use share_footprint::{ShareFootprintCommand, ShareFootprintHandler};
