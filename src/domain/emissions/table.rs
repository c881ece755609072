//! The canonical emission factor table shared by both calculators.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::factor_key::{
    ActivityUnit, FactorKey, Fuel, PassengerMode, Vehicle, WasteTreatment,
};
use crate::domain::foundation::GridLocation;

/// Where a factor comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// India-specific published factor.
    Published,
    /// Illustrative placeholder pending a proper source.
    Hypothetical,
}

/// One row of the factor table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEntry {
    pub key: FactorKey,
    pub label: &'static str,
    pub kg_co2e_per_unit: f64,
    pub unit: ActivityUnit,
    pub provenance: Provenance,
    pub description: String,
}

/// Immutable mapping from [`FactorKey`] to kg CO2e per unit of activity.
///
/// Negative factors are avoided-emission credits.
#[derive(Debug)]
pub struct EmissionFactorTable {
    entries: Vec<FactorEntry>,
}

static CANONICAL: Lazy<EmissionFactorTable> = Lazy::new(|| EmissionFactorTable {
    entries: FactorKey::ALL
        .iter()
        .map(|key| FactorEntry {
            key: *key,
            label: key.label(),
            kg_co2e_per_unit: EmissionFactorTable::factor_value(*key),
            unit: key.unit(),
            provenance: EmissionFactorTable::provenance_of(*key),
            description: EmissionFactorTable::describe(*key),
        })
        .collect(),
});

impl EmissionFactorTable {
    /// Returns the process-wide table.
    pub fn canonical() -> &'static EmissionFactorTable {
        &CANONICAL
    }

    /// Returns the factor for a key, in kg CO2e per unit.
    pub fn factor_for(&self, key: FactorKey) -> f64 {
        Self::factor_value(key)
    }

    /// Every row, in table order.
    pub fn entries(&self) -> &[FactorEntry] {
        &self.entries
    }

    fn factor_value(key: FactorKey) -> f64 {
        match key {
            FactorKey::Electricity(GridLocation::National) => 0.757,
            FactorKey::Electricity(GridLocation::Rajasthan) => 0.000422,
            FactorKey::Fuel(Fuel::Petrol) => 2.31,
            FactorKey::Fuel(Fuel::Diesel) => 2.68,
            FactorKey::Fuel(Fuel::NaturalGas) => 2.0,
            FactorKey::Fuel(Fuel::Lpg) => 3.0,
            FactorKey::VehicleDistance(Vehicle::MotorcycleBelow125cc) => 0.0290,
            FactorKey::VehicleDistance(Vehicle::ThreeWheelerPetrol) => 0.1135,
            FactorKey::VehicleDistance(Vehicle::ThreeWheelerCng) => 0.10768,
            FactorKey::VehicleDistance(Vehicle::SedanDieselBelow1600cc) => 0.131,
            FactorKey::VehicleDistance(Vehicle::HdvTruck) => 0.7375,
            FactorKey::VehicleDistance(Vehicle::TaxiPetrol) => 0.2,
            FactorKey::VehicleDistance(Vehicle::PersonalCarPetrol) => 0.18,
            FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel) => 0.22,
            FactorKey::PassengerDistance(PassengerMode::IntracityBus) => 0.015161,
            FactorKey::PassengerDistance(PassengerMode::AirLongHaul) => 0.15,
            FactorKey::PassengerDistance(PassengerMode::AirShortHaul) => 0.20,
            FactorKey::RailTraction => 0.82,
            FactorKey::Waste(WasteTreatment::OpenBurning) => 0.572,
            FactorKey::Waste(WasteTreatment::LandfillMixed) => 0.2,
            FactorKey::Waste(WasteTreatment::Composted) => -0.1,
            FactorKey::Waste(WasteTreatment::Recycled) => -0.05,
            FactorKey::PurchasedGoods => 10.0,
        }
    }

    fn provenance_of(key: FactorKey) -> Provenance {
        match key {
            FactorKey::Fuel(Fuel::NaturalGas)
            | FactorKey::Fuel(Fuel::Lpg)
            | FactorKey::VehicleDistance(Vehicle::TaxiPetrol)
            | FactorKey::VehicleDistance(Vehicle::PersonalCarPetrol)
            | FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel)
            | FactorKey::PassengerDistance(PassengerMode::AirLongHaul)
            | FactorKey::PassengerDistance(PassengerMode::AirShortHaul)
            | FactorKey::Waste(WasteTreatment::LandfillMixed)
            | FactorKey::Waste(WasteTreatment::Composted)
            | FactorKey::Waste(WasteTreatment::Recycled)
            | FactorKey::PurchasedGoods => Provenance::Hypothetical,
            _ => Provenance::Published,
        }
    }

    /// One-line tooltip text for a factor.
    fn describe(key: FactorKey) -> String {
        let value = Self::factor_value(key);
        let kind = if value < 0.0 {
            "Avoided Emissions"
        } else {
            "Factor"
        };
        let prefix = match Self::provenance_of(key) {
            Provenance::Published => String::new(),
            Provenance::Hypothetical => "Hypothetical ".to_string(),
        };
        let qualifier = match key {
            FactorKey::Electricity(grid) => format!(" ({})", grid.label()),
            _ => String::new(),
        };
        format!(
            "{}{}: {} kg CO2e/{}{}.",
            prefix,
            kind,
            value,
            key.unit().symbol(),
            qualifier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static EmissionFactorTable {
        EmissionFactorTable::canonical()
    }

    #[test]
    fn grid_factors_match_published_values() {
        assert_eq!(table().factor_for(FactorKey::Electricity(GridLocation::National)), 0.757);
        assert_eq!(
            table().factor_for(FactorKey::Electricity(GridLocation::Rajasthan)),
            0.000422
        );
    }

    #[test]
    fn fuel_factors_are_shared_by_both_calculators() {
        assert_eq!(table().factor_for(FactorKey::Fuel(Fuel::Petrol)), 2.31);
        assert_eq!(table().factor_for(FactorKey::Fuel(Fuel::Diesel)), 2.68);
    }

    #[test]
    fn personal_car_diesel_has_a_real_factor() {
        let factor = table().factor_for(FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel));
        assert_eq!(factor, 0.22);
    }

    #[test]
    fn only_diversion_routes_are_credits() {
        let credits: Vec<_> = table()
            .entries()
            .iter()
            .filter(|e| e.kg_co2e_per_unit < 0.0)
            .map(|e| e.key)
            .collect();
        assert_eq!(
            credits,
            vec![
                FactorKey::Waste(WasteTreatment::Composted),
                FactorKey::Waste(WasteTreatment::Recycled),
            ]
        );
    }

    #[test]
    fn entries_cover_every_key_in_order() {
        let keys: Vec<_> = table().entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, FactorKey::ALL.to_vec());
    }

    #[test]
    fn entries_agree_with_lookup() {
        for entry in table().entries() {
            assert_eq!(entry.kg_co2e_per_unit, table().factor_for(entry.key));
            assert!(entry.kg_co2e_per_unit.is_finite());
        }
    }

    #[test]
    fn descriptions_read_like_tooltips() {
        let find = |key: FactorKey| {
            table()
                .entries()
                .iter()
                .find(|e| e.key == key)
                .map(|e| e.description.clone())
                .unwrap()
        };

        assert_eq!(find(FactorKey::Fuel(Fuel::Petrol)), "Factor: 2.31 kg CO2e/litre.");
        assert_eq!(
            find(FactorKey::Electricity(GridLocation::National)),
            "Factor: 0.757 kg CO2e/kWh (National Grid)."
        );
        assert_eq!(
            find(FactorKey::Waste(WasteTreatment::Composted)),
            "Hypothetical Avoided Emissions: -0.1 kg CO2e/kg."
        );
        assert_eq!(
            find(FactorKey::Fuel(Fuel::NaturalGas)),
            "Hypothetical Factor: 2 kg CO2e/Nm3."
        );
    }
}
