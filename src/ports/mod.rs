//! Ports - Interfaces between the application layer and infrastructure.
//!
//! The footprint calculators are pure and need no ports. The only outbound
//! dependency is where signed-in profiles are remembered.

mod profile_store;

pub use profile_store::{ProfileStore, ProfileStoreError};
