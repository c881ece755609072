//! Closed set of (domain, activity) keys understood by the factor table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::GridLocation;

/// Combustion fuels measured by quantity burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuel {
    Petrol,
    Diesel,
    NaturalGas,
    Lpg,
}

/// Road vehicles measured by vehicle-km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vehicle {
    MotorcycleBelow125cc,
    ThreeWheelerPetrol,
    ThreeWheelerCng,
    SedanDieselBelow1600cc,
    HdvTruck,
    TaxiPetrol,
    PersonalCarPetrol,
    PersonalCarDiesel,
}

/// Shared transport measured by passenger-km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerMode {
    IntracityBus,
    AirLongHaul,
    AirShortHaul,
}

/// Waste disposal or diversion routes measured by mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteTreatment {
    OpenBurning,
    LandfillMixed,
    Composted,
    Recycled,
}

/// Top-level domain of a factor key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorDomain {
    Electricity,
    Fuel,
    VehicleDistance,
    PassengerDistance,
    RailTraction,
    Waste,
    PurchasedGoods,
}

/// Unit of activity a factor is expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityUnit {
    Kwh,
    Litre,
    NormalCubicMetre,
    Kg,
    Km,
    PassengerKm,
    InrMillion,
}

impl ActivityUnit {
    /// Short unit label used in factor descriptions.
    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityUnit::Kwh => "kWh",
            ActivityUnit::Litre => "litre",
            ActivityUnit::NormalCubicMetre => "Nm3",
            ActivityUnit::Kg => "kg",
            ActivityUnit::Km => "km",
            ActivityUnit::PassengerKm => "pax-km",
            ActivityUnit::InrMillion => "INR million",
        }
    }
}

/// A (domain, activity) pair with a defined emission factor.
///
/// The set is closed: every value of this type has a factor, so lookups
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "domain", content = "activity", rename_all = "snake_case")]
pub enum FactorKey {
    Electricity(GridLocation),
    Fuel(Fuel),
    VehicleDistance(Vehicle),
    PassengerDistance(PassengerMode),
    RailTraction,
    Waste(WasteTreatment),
    PurchasedGoods,
}

impl FactorKey {
    /// Every key, in table order.
    pub const ALL: [FactorKey; 23] = [
        FactorKey::Electricity(GridLocation::National),
        FactorKey::Electricity(GridLocation::Rajasthan),
        FactorKey::Fuel(Fuel::Petrol),
        FactorKey::Fuel(Fuel::Diesel),
        FactorKey::Fuel(Fuel::NaturalGas),
        FactorKey::Fuel(Fuel::Lpg),
        FactorKey::VehicleDistance(Vehicle::MotorcycleBelow125cc),
        FactorKey::VehicleDistance(Vehicle::ThreeWheelerPetrol),
        FactorKey::VehicleDistance(Vehicle::ThreeWheelerCng),
        FactorKey::VehicleDistance(Vehicle::SedanDieselBelow1600cc),
        FactorKey::VehicleDistance(Vehicle::HdvTruck),
        FactorKey::VehicleDistance(Vehicle::TaxiPetrol),
        FactorKey::VehicleDistance(Vehicle::PersonalCarPetrol),
        FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel),
        FactorKey::PassengerDistance(PassengerMode::IntracityBus),
        FactorKey::PassengerDistance(PassengerMode::AirLongHaul),
        FactorKey::PassengerDistance(PassengerMode::AirShortHaul),
        FactorKey::RailTraction,
        FactorKey::Waste(WasteTreatment::OpenBurning),
        FactorKey::Waste(WasteTreatment::LandfillMixed),
        FactorKey::Waste(WasteTreatment::Composted),
        FactorKey::Waste(WasteTreatment::Recycled),
        FactorKey::PurchasedGoods,
    ];

    /// Returns the domain half of the key.
    pub fn domain(&self) -> FactorDomain {
        match self {
            FactorKey::Electricity(_) => FactorDomain::Electricity,
            FactorKey::Fuel(_) => FactorDomain::Fuel,
            FactorKey::VehicleDistance(_) => FactorDomain::VehicleDistance,
            FactorKey::PassengerDistance(_) => FactorDomain::PassengerDistance,
            FactorKey::RailTraction => FactorDomain::RailTraction,
            FactorKey::Waste(_) => FactorDomain::Waste,
            FactorKey::PurchasedGoods => FactorDomain::PurchasedGoods,
        }
    }

    /// Unit the factor is expressed against.
    pub fn unit(&self) -> ActivityUnit {
        match self {
            FactorKey::Electricity(_) | FactorKey::RailTraction => ActivityUnit::Kwh,
            FactorKey::Fuel(Fuel::Petrol) | FactorKey::Fuel(Fuel::Diesel) => ActivityUnit::Litre,
            FactorKey::Fuel(Fuel::NaturalGas) => ActivityUnit::NormalCubicMetre,
            FactorKey::Fuel(Fuel::Lpg) => ActivityUnit::Kg,
            FactorKey::VehicleDistance(_) => ActivityUnit::Km,
            FactorKey::PassengerDistance(_) => ActivityUnit::PassengerKm,
            FactorKey::Waste(_) => ActivityUnit::Kg,
            FactorKey::PurchasedGoods => ActivityUnit::InrMillion,
        }
    }

    /// Human-readable activity name.
    pub fn label(&self) -> &'static str {
        match self {
            FactorKey::Electricity(grid) => grid.label(),
            FactorKey::Fuel(Fuel::Petrol) => "Petrol",
            FactorKey::Fuel(Fuel::Diesel) => "Diesel",
            FactorKey::Fuel(Fuel::NaturalGas) => "Natural Gas",
            FactorKey::Fuel(Fuel::Lpg) => "LPG",
            FactorKey::VehicleDistance(Vehicle::MotorcycleBelow125cc) => "Motorcycle <125 CC",
            FactorKey::VehicleDistance(Vehicle::ThreeWheelerPetrol) => "Three-wheeler (Petrol)",
            FactorKey::VehicleDistance(Vehicle::ThreeWheelerCng) => "Three-wheeler (CNG)",
            FactorKey::VehicleDistance(Vehicle::SedanDieselBelow1600cc) => {
                "Sedan <1600 CC Diesel"
            }
            FactorKey::VehicleDistance(Vehicle::HdvTruck) => "HDV Truck (>12T)",
            FactorKey::VehicleDistance(Vehicle::TaxiPetrol) => "Taxi / Ride-hailing (Petrol)",
            FactorKey::VehicleDistance(Vehicle::PersonalCarPetrol) => "Personal Car (Petrol)",
            FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel) => "Personal Car (Diesel)",
            FactorKey::PassengerDistance(PassengerMode::IntracityBus) => "Intracity Bus",
            FactorKey::PassengerDistance(PassengerMode::AirLongHaul) => "Air Travel (Long-haul)",
            FactorKey::PassengerDistance(PassengerMode::AirShortHaul) => "Air Travel (Short-haul)",
            FactorKey::RailTraction => "Rail (Electric Traction)",
            FactorKey::Waste(WasteTreatment::OpenBurning) => "Open Burning of Waste",
            FactorKey::Waste(WasteTreatment::LandfillMixed) => "Mixed Waste to Landfill",
            FactorKey::Waste(WasteTreatment::Composted) => "Composted Organic Waste",
            FactorKey::Waste(WasteTreatment::Recycled) => "Recycled Dry Waste",
            FactorKey::PurchasedGoods => "Purchased Goods and Services",
        }
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
