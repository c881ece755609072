//! Mutually exclusive choice selectors shared by both calculators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting period for a footprint. Inputs are always monthly quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl ReportingPeriod {
    /// Multiplier applied to monthly quantities.
    pub fn multiplier(&self) -> f64 {
        match self {
            ReportingPeriod::Monthly => 1.0,
            ReportingPeriod::Annual => 12.0,
        }
    }

    /// Lowercase adjective used in share messages.
    pub fn adjective(&self) -> &'static str {
        match self {
            ReportingPeriod::Monthly => "monthly",
            ReportingPeriod::Annual => "annual",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportingPeriod::Monthly => write!(f, "Monthly"),
            ReportingPeriod::Annual => write!(f, "Annual"),
        }
    }
}

/// Electricity grid the consumption is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLocation {
    #[default]
    National,
    Rajasthan,
}

impl GridLocation {
    /// Display label for this grid.
    pub fn label(&self) -> &'static str {
        match self {
            GridLocation::National => "National Grid",
            GridLocation::Rajasthan => "Rajasthan Grid",
        }
    }
}
