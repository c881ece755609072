//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (activity inputs, selectors, ids, errors)
//! - `emissions` - Canonical emission factor table
//! - `footprint` - Individual and business calculators, suggestions, sharing
//! - `session` - Credential validation and signed-in state

pub mod emissions;
pub mod footprint;
pub mod foundation;
pub mod session;
