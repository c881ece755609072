//! Business profile: sector type, sector tips and intensity benchmarks.

use serde::{Deserialize, Serialize};

/// Industry a business selects in its profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Manufacturing,
    ItServices,
    Factory,
    Construction,
    Other,
}

/// Typical emission intensity for a sector, in t CO2e per crore of revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypicalRange {
    pub low_t_per_crore: f64,
    pub high_t_per_crore: f64,
}

impl TypicalRange {
    const fn new(low: f64, high: f64) -> Self {
        Self {
            low_t_per_crore: low,
            high_t_per_crore: high,
        }
    }

    /// Returns true when `intensity` falls inside the range.
    pub fn contains(&self, intensity: f64) -> bool {
        intensity >= self.low_t_per_crore && intensity <= self.high_t_per_crore
    }
}

impl BusinessType {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Manufacturing => "Manufacturing",
            BusinessType::ItServices => "IT Services",
            BusinessType::Factory => "Factory/Industrial Production",
            BusinessType::Construction => "Construction",
            BusinessType::Other => "Other",
        }
    }

    /// Sector-specific tip, if the sector has one.
    pub fn sector_tip(&self) -> Option<&'static str> {
        match self {
            BusinessType::Manufacturing => Some(
                "Manufacturing Sector Tip: Focus on optimizing production processes and exploring alternative, lower-carbon materials. Consider energy audits to identify efficiency opportunities. (Typical: 150-300 tCO2e/crore revenue)",
            ),
            BusinessType::ItServices => Some(
                "IT Services Sector Tip: Optimize data center energy consumption. Encourage remote work where feasible and promote sustainable commuting for employees. (Typical: 20-50 tCO2e/crore revenue)",
            ),
            BusinessType::Factory => Some(
                "Factory Specific Tip: Evaluate boiler efficiency, explore waste heat recovery, and invest in process electrification where viable. (e.g., Steel industry: ~2.5 tonnes of CO2 per tonne of crude steel (T/tcs); Cement industry: ~0.5-0.6 tCO2/tonne cement)",
            ),
            BusinessType::Construction => Some(
                "Construction Sector Tip: Focus on sustainable building materials, optimize site logistics to reduce fuel consumption, and manage construction waste effectively. (Typical: 200-400 tCO2e/crore revenue)",
            ),
            BusinessType::Other => None,
        }
    }

    /// Revenue-intensity benchmark for the sector.
    pub fn typical_range(&self) -> Option<TypicalRange> {
        match self {
            BusinessType::Manufacturing => Some(TypicalRange::new(150.0, 300.0)),
            BusinessType::ItServices => Some(TypicalRange::new(20.0, 50.0)),
            BusinessType::Construction => Some(TypicalRange::new(200.0, 400.0)),
            BusinessType::Factory | BusinessType::Other => None,
        }
    }

    /// Physical-intensity notes for sectors benchmarked per tonne of output.
    pub fn benchmark_notes(&self) -> &'static [&'static str] {
        match self {
            BusinessType::Factory => &[
                "Indian Steel Industry: ~2.5 tonnes of CO2 per tonne of crude steel (T/tcs) in 2020.",
                "Cement Industry: ~0.5-0.6 tCO2/tonne cement.",
            ],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_has_no_tip_or_benchmark() {
        assert!(BusinessType::Other.sector_tip().is_none());
        assert!(BusinessType::Other.typical_range().is_none());
        assert!(BusinessType::Other.benchmark_notes().is_empty());
    }

    #[test]
    fn factory_is_benchmarked_per_tonne() {
        assert!(BusinessType::Factory.typical_range().is_none());
        assert_eq!(BusinessType::Factory.benchmark_notes().len(), 2);
    }

    #[test]
    fn typical_range_is_inclusive() {
        let range = BusinessType::ItServices.typical_range().unwrap();
        assert!(range.contains(20.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(50.5));
    }

    #[test]
    fn deserializes_snake_case() {
        let t: BusinessType = serde_json::from_str(r#""it_services""#).unwrap();
        assert_eq!(t, BusinessType::ItServices);
    }
}
