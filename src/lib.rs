//! ClimateOS Footprint - GHG footprint estimators
//!
//! Estimates a business's Scope 1/2/3 emissions and an individual's
//! Electricity/Transportation/Waste emissions from monthly activity data,
//! using India-specific emission factors.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
