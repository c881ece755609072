//! Individual footprint: electricity, transportation and household waste.

use serde::{Deserialize, Serialize};

use super::accumulator::SubtotalAccumulator;
use super::category::FootprintCategory;
use super::result::FootprintResult;
use super::suggestions::SuggestionPolicy;
use crate::domain::emissions::{
    EmissionFactorTable, FactorKey, Fuel, PassengerMode, Vehicle, WasteTreatment,
};
use crate::domain::foundation::{ActivityInput, GridLocation, ReportingPeriod};

/// Shown when every waste-habit question has been answered.
pub const WASTE_DIVERSION_FEEDBACK: &str = "Your waste diversion efforts are important! Reducing, reusing, and recycling/composting directly decrease the amount of waste sent to landfills, helping to reduce methane emissions. For precise emissions from municipal waste, rely on large-scale data and specialized assessments.";

/// How household waste is described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteMode {
    /// One mass, assumed openly burned.
    #[default]
    Simple,
    /// Separate landfill and compost masses.
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionEffort {
    VeryHigh,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecyclingHabit {
    Always,
    Sometimes,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompostingHabit {
    Yes,
    No,
}

/// Qualitative waste answers. They never change the arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteHabits {
    pub reduction_effort: Option<ReductionEffort>,
    pub recycling: Option<RecyclingHabit>,
    pub composting: Option<CompostingHabit>,
}

impl WasteHabits {
    pub fn is_complete(&self) -> bool {
        self.reduction_effort.is_some() && self.recycling.is_some() && self.composting.is_some()
    }
}

/// Monthly activity entered by an individual.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndividualInputs {
    pub period: ReportingPeriod,
    pub grid: GridLocation,
    pub waste_mode: WasteMode,

    pub electricity_kwh: ActivityInput,

    pub petrol_litres: ActivityInput,
    pub diesel_litres: ActivityInput,
    pub motorcycle_km: ActivityInput,
    pub three_wheeler_petrol_km: ActivityInput,
    pub three_wheeler_cng_km: ActivityInput,
    pub sedan_diesel_km: ActivityInput,
    pub hdv_truck_km: ActivityInput,
    pub intracity_bus_pax_km: ActivityInput,

    pub waste_kg: ActivityInput,
    pub landfill_mixed_waste_kg: ActivityInput,
    pub composted_waste_kg: ActivityInput,

    pub waste_habits: WasteHabits,
}

/// Result of an individual calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualFootprint {
    #[serde(flatten)]
    pub result: FootprintResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_feedback: Option<&'static str>,
}

/// Computes individual footprints against a factor table.
#[derive(Debug, Clone, Copy)]
pub struct IndividualFootprintCalculator<'t> {
    table: &'t EmissionFactorTable,
}

impl<'t> IndividualFootprintCalculator<'t> {
    pub fn new(table: &'t EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn calculate(&self, inputs: &IndividualInputs) -> IndividualFootprint {
        use FootprintCategory::{Electricity, Transportation, Waste};

        let mut acc = SubtotalAccumulator::new(self.table, &FootprintCategory::INDIVIDUAL);

        acc.add(
            Electricity,
            "electricity_kwh",
            &inputs.electricity_kwh,
            FactorKey::Electricity(inputs.grid),
        );

        let transport = [
            ("petrol_litres", &inputs.petrol_litres, FactorKey::Fuel(Fuel::Petrol)),
            ("diesel_litres", &inputs.diesel_litres, FactorKey::Fuel(Fuel::Diesel)),
            (
                "motorcycle_km",
                &inputs.motorcycle_km,
                FactorKey::VehicleDistance(Vehicle::MotorcycleBelow125cc),
            ),
            (
                "three_wheeler_petrol_km",
                &inputs.three_wheeler_petrol_km,
                FactorKey::VehicleDistance(Vehicle::ThreeWheelerPetrol),
            ),
            (
                "three_wheeler_cng_km",
                &inputs.three_wheeler_cng_km,
                FactorKey::VehicleDistance(Vehicle::ThreeWheelerCng),
            ),
            (
                "sedan_diesel_km",
                &inputs.sedan_diesel_km,
                FactorKey::VehicleDistance(Vehicle::SedanDieselBelow1600cc),
            ),
            (
                "hdv_truck_km",
                &inputs.hdv_truck_km,
                FactorKey::VehicleDistance(Vehicle::HdvTruck),
            ),
            (
                "intracity_bus_pax_km",
                &inputs.intracity_bus_pax_km,
                FactorKey::PassengerDistance(PassengerMode::IntracityBus),
            ),
        ];
        for (field, input, key) in transport {
            acc.add(Transportation, field, input, key);
        }

        match inputs.waste_mode {
            WasteMode::Simple => acc.add(
                Waste,
                "waste_kg",
                &inputs.waste_kg,
                FactorKey::Waste(WasteTreatment::OpenBurning),
            ),
            WasteMode::Advanced => {
                acc.add(
                    Waste,
                    "landfill_mixed_waste_kg",
                    &inputs.landfill_mixed_waste_kg,
                    FactorKey::Waste(WasteTreatment::LandfillMixed),
                );
                acc.add(
                    Waste,
                    "composted_waste_kg",
                    &inputs.composted_waste_kg,
                    FactorKey::Waste(WasteTreatment::Composted),
                );
            }
        }

        IndividualFootprint {
            result: acc.into_result(inputs.period, &SuggestionPolicy::INDIVIDUAL, None),
            waste_feedback: inputs
                .waste_habits
                .is_complete()
                .then_some(WASTE_DIVERSION_FEEDBACK),
        }
    }
}
