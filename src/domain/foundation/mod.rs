//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, selectors and error types
//! that form the vocabulary of the footprint domain.

mod activity_input;
mod co2e;
mod errors;
mod ids;
mod selectors;
mod timestamp;

pub use activity_input::{ActivityInput, ParsedQuantity};
pub use co2e::{format_kg_co2e, round_for_display, DISPLAY_DECIMALS};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use selectors::{GridLocation, ReportingPeriod};
pub use timestamp::Timestamp;
