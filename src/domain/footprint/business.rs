//! Business footprint: GHG Protocol Scope 1, 2 and 3.

use serde::{Deserialize, Serialize};

use super::accumulator::SubtotalAccumulator;
use super::business_type::{BusinessType, TypicalRange};
use super::category::FootprintCategory;
use super::result::FootprintResult;
use super::suggestions::SuggestionPolicy;
use crate::domain::emissions::{
    EmissionFactorTable, FactorKey, Fuel, PassengerMode, Vehicle, WasteTreatment,
};
use crate::domain::foundation::{ActivityInput, GridLocation, ReportingPeriod};

/// Purchased goods are entered in lakh INR; factors are per INR million.
const LAKH_PER_MILLION: f64 = 10.0;

/// Monthly activity entered for a business.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BusinessInputs {
    pub period: ReportingPeriod,
    pub grid: GridLocation,
    pub business_type: Option<BusinessType>,
    /// Monthly revenue in INR crore, used only for benchmarking.
    pub monthly_revenue_crore: ActivityInput,

    // Scope 1
    pub petrol_litres: ActivityInput,
    pub diesel_litres: ActivityInput,
    pub natural_gas_units: ActivityInput,
    pub lpg_kg: ActivityInput,
    pub hdv_truck_km_owned: ActivityInput,
    pub sedan_diesel_km_owned: ActivityInput,

    // Scope 2
    pub electricity_kwh: ActivityInput,

    // Scope 3: business travel
    pub air_travel_long_haul_km: ActivityInput,
    pub air_travel_short_haul_km: ActivityInput,
    pub rail_travel_electric_kwh: ActivityInput,
    pub taxi_petrol_km: ActivityInput,

    // Scope 3: employee commute
    pub motorcycle_commute_km: ActivityInput,
    pub three_wheeler_petrol_commute_km: ActivityInput,
    pub three_wheeler_cng_commute_km: ActivityInput,
    pub intracity_bus_pax_commute_km: ActivityInput,
    pub personal_car_petrol_commute_km: ActivityInput,
    pub personal_car_diesel_commute_km: ActivityInput,

    // Scope 3: waste
    pub waste_open_burning_kg: ActivityInput,
    pub waste_landfill_mixed_kg: ActivityInput,
    pub waste_composted_kg: ActivityInput,
    pub waste_recycled_kg: ActivityInput,

    // Scope 3: purchased goods and services
    pub purchased_goods_lakh_inr: ActivityInput,
}

/// Revenue intensity compared with the sector's typical range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub business_type: BusinessType,
    /// Tonnes CO2e per crore of revenue over the reporting period.
    pub intensity_t_per_crore: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_range: Option<TypicalRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_typical_range: Option<bool>,
    #[serde(skip_serializing_if = "has_no_notes")]
    pub notes: &'static [&'static str],
}

fn has_no_notes(notes: &&'static [&'static str]) -> bool {
    notes.is_empty()
}

impl BenchmarkComparison {
    fn new(
        business_type: BusinessType,
        total_kg: f64,
        monthly_revenue_crore: f64,
        period: ReportingPeriod,
    ) -> Self {
        let intensity = (total_kg / 1000.0) / (monthly_revenue_crore * period.multiplier());
        let typical_range = business_type.typical_range();
        Self {
            business_type,
            intensity_t_per_crore: intensity,
            typical_range,
            within_typical_range: typical_range.map(|r| r.contains(intensity)),
            notes: business_type.benchmark_notes(),
        }
    }
}

/// Result of a business calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessFootprint {
    #[serde(flatten)]
    pub result: FootprintResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkComparison>,
}

/// Computes business footprints against a factor table.
#[derive(Debug, Clone, Copy)]
pub struct BusinessFootprintCalculator<'t> {
    table: &'t EmissionFactorTable,
}

impl<'t> BusinessFootprintCalculator<'t> {
    pub fn new(table: &'t EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn calculate(&self, inputs: &BusinessInputs) -> BusinessFootprint {
        use FootprintCategory::{Scope1, Scope2, Scope3};

        let mut acc = SubtotalAccumulator::new(self.table, &FootprintCategory::BUSINESS);

        let scope1 = [
            ("petrol_litres", &inputs.petrol_litres, FactorKey::Fuel(Fuel::Petrol)),
            ("diesel_litres", &inputs.diesel_litres, FactorKey::Fuel(Fuel::Diesel)),
            (
                "natural_gas_units",
                &inputs.natural_gas_units,
                FactorKey::Fuel(Fuel::NaturalGas),
            ),
            ("lpg_kg", &inputs.lpg_kg, FactorKey::Fuel(Fuel::Lpg)),
            (
                "hdv_truck_km_owned",
                &inputs.hdv_truck_km_owned,
                FactorKey::VehicleDistance(Vehicle::HdvTruck),
            ),
            (
                "sedan_diesel_km_owned",
                &inputs.sedan_diesel_km_owned,
                FactorKey::VehicleDistance(Vehicle::SedanDieselBelow1600cc),
            ),
        ];
        for (field, input, key) in scope1 {
            acc.add(Scope1, field, input, key);
        }

        acc.add(
            Scope2,
            "electricity_kwh",
            &inputs.electricity_kwh,
            FactorKey::Electricity(inputs.grid),
        );

        let scope3 = [
            (
                "air_travel_long_haul_km",
                &inputs.air_travel_long_haul_km,
                FactorKey::PassengerDistance(PassengerMode::AirLongHaul),
            ),
            (
                "air_travel_short_haul_km",
                &inputs.air_travel_short_haul_km,
                FactorKey::PassengerDistance(PassengerMode::AirShortHaul),
            ),
            (
                "rail_travel_electric_kwh",
                &inputs.rail_travel_electric_kwh,
                FactorKey::RailTraction,
            ),
            (
                "taxi_petrol_km",
                &inputs.taxi_petrol_km,
                FactorKey::VehicleDistance(Vehicle::TaxiPetrol),
            ),
            (
                "motorcycle_commute_km",
                &inputs.motorcycle_commute_km,
                FactorKey::VehicleDistance(Vehicle::MotorcycleBelow125cc),
            ),
            (
                "three_wheeler_petrol_commute_km",
                &inputs.three_wheeler_petrol_commute_km,
                FactorKey::VehicleDistance(Vehicle::ThreeWheelerPetrol),
            ),
            (
                "three_wheeler_cng_commute_km",
                &inputs.three_wheeler_cng_commute_km,
                FactorKey::VehicleDistance(Vehicle::ThreeWheelerCng),
            ),
            (
                "intracity_bus_pax_commute_km",
                &inputs.intracity_bus_pax_commute_km,
                FactorKey::PassengerDistance(PassengerMode::IntracityBus),
            ),
            (
                "personal_car_petrol_commute_km",
                &inputs.personal_car_petrol_commute_km,
                FactorKey::VehicleDistance(Vehicle::PersonalCarPetrol),
            ),
            (
                "personal_car_diesel_commute_km",
                &inputs.personal_car_diesel_commute_km,
                FactorKey::VehicleDistance(Vehicle::PersonalCarDiesel),
            ),
            (
                "waste_open_burning_kg",
                &inputs.waste_open_burning_kg,
                FactorKey::Waste(WasteTreatment::OpenBurning),
            ),
            (
                "waste_landfill_mixed_kg",
                &inputs.waste_landfill_mixed_kg,
                FactorKey::Waste(WasteTreatment::LandfillMixed),
            ),
            (
                "waste_composted_kg",
                &inputs.waste_composted_kg,
                FactorKey::Waste(WasteTreatment::Composted),
            ),
            (
                "waste_recycled_kg",
                &inputs.waste_recycled_kg,
                FactorKey::Waste(WasteTreatment::Recycled),
            ),
        ];
        for (field, input, key) in scope3 {
            acc.add(Scope3, field, input, key);
        }
        acc.add_converted(
            Scope3,
            "purchased_goods_lakh_inr",
            &inputs.purchased_goods_lakh_inr,
            FactorKey::PurchasedGoods,
            1.0 / LAKH_PER_MILLION,
        );

        let revenue = acc
            .quantity("monthly_revenue_crore", &inputs.monthly_revenue_crore)
            .filter(|crore| *crore > 0.0);

        let result = acc.into_result(
            inputs.period,
            &SuggestionPolicy::BUSINESS,
            inputs.business_type,
        );
        let benchmark = inputs
            .business_type
            .zip(revenue)
            .map(|(business_type, crore)| {
                BenchmarkComparison::new(business_type, result.total_kg, crore, inputs.period)
            })
            .filter(|benchmark| benchmark.intensity_t_per_crore.is_finite());

        BusinessFootprint { result, benchmark }
    }
}
