//! Emissions module - the single source of emission factors.
//!
//! Both calculators read from [`EmissionFactorTable::canonical`]; there is no
//! other copy of the numbers anywhere in the crate.

mod factor_key;
mod table;

pub use factor_key::{
    ActivityUnit, FactorDomain, FactorKey, Fuel, PassengerMode, Vehicle, WasteTreatment,
};
pub use table::{EmissionFactorTable, FactorEntry, Provenance};
