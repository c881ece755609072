//! Property tests for the footprint calculators.
//!
//! These check laws that must hold for any input:
//! 1. Annual totals are exactly twelve times the monthly totals
//! 2. Calculation is deterministic
//! 3. Subtotals add up to the total
//! 4. Switching grids only moves the electricity share

use proptest::prelude::*;

use climateos_footprint::domain::emissions::EmissionFactorTable;
use climateos_footprint::domain::footprint::{
    BusinessFootprintCalculator, BusinessInputs, FootprintCategory, IndividualFootprintCalculator,
    IndividualInputs,
};
use climateos_footprint::domain::foundation::{ActivityInput, GridLocation, ReportingPeriod};

// =============================================================================
// Strategies
// =============================================================================

fn quantity() -> impl Strategy<Value = ActivityInput> {
    prop_oneof![
        1 => Just(ActivityInput::blank()),
        4 => (0.0f64..50_000.0).prop_map(ActivityInput::number),
    ]
}

prop_compose! {
    fn individual_inputs()(
        electricity in quantity(),
        petrol in quantity(),
        diesel in quantity(),
        motorcycle in quantity(),
        bus in quantity(),
        waste in quantity(),
    ) -> IndividualInputs {
        IndividualInputs {
            electricity_kwh: electricity,
            petrol_litres: petrol,
            diesel_litres: diesel,
            motorcycle_km: motorcycle,
            intracity_bus_pax_km: bus,
            waste_kg: waste,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn business_inputs()(
        diesel in quantity(),
        lpg in quantity(),
        electricity in quantity(),
        flights in quantity(),
        landfill in quantity(),
        goods in quantity(),
    ) -> BusinessInputs {
        BusinessInputs {
            diesel_litres: diesel,
            lpg_kg: lpg,
            electricity_kwh: electricity,
            air_travel_short_haul_km: flights,
            waste_landfill_mixed_kg: landfill,
            purchased_goods_lakh_inr: goods,
            ..Default::default()
        }
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// =============================================================================
// Individual Calculator
// =============================================================================

proptest! {
    #[test]
    fn individual_annual_is_twelve_times_monthly(inputs in individual_inputs()) {
        let calculator = IndividualFootprintCalculator::new(EmissionFactorTable::canonical());

        let monthly = calculator.calculate(&IndividualInputs {
            period: ReportingPeriod::Monthly,
            ..inputs.clone()
        });
        let annual = calculator.calculate(&IndividualInputs {
            period: ReportingPeriod::Annual,
            ..inputs
        });

        prop_assert_eq!(annual.result.total_kg, monthly.result.total_kg * 12.0);
        for category in FootprintCategory::INDIVIDUAL {
            prop_assert!(close(
                annual.result.subtotal(category),
                monthly.result.subtotal(category) * 12.0
            ));
        }
    }

    #[test]
    fn individual_calculation_is_deterministic(inputs in individual_inputs()) {
        let calculator = IndividualFootprintCalculator::new(EmissionFactorTable::canonical());
        prop_assert_eq!(calculator.calculate(&inputs), calculator.calculate(&inputs));
    }

    #[test]
    fn individual_subtotals_sum_to_total(inputs in individual_inputs()) {
        let calculator = IndividualFootprintCalculator::new(EmissionFactorTable::canonical());
        let result = calculator.calculate(&inputs).result;

        let sum: f64 = FootprintCategory::INDIVIDUAL
            .iter()
            .map(|category| result.subtotal(*category))
            .sum();
        prop_assert!(close(sum, result.total_kg));
    }

    #[test]
    fn grid_switch_only_changes_electricity(inputs in individual_inputs()) {
        let calculator = IndividualFootprintCalculator::new(EmissionFactorTable::canonical());

        let national = calculator.calculate(&IndividualInputs {
            grid: GridLocation::National,
            ..inputs.clone()
        });
        let rajasthan = calculator.calculate(&IndividualInputs {
            grid: GridLocation::Rajasthan,
            ..inputs
        });

        for category in [FootprintCategory::Transportation, FootprintCategory::Waste] {
            prop_assert_eq!(
                national.result.subtotal(category),
                rajasthan.result.subtotal(category)
            );
        }
        prop_assert!(
            rajasthan.result.subtotal(FootprintCategory::Electricity)
                <= national.result.subtotal(FootprintCategory::Electricity)
        );
    }
}

// =============================================================================
// Business Calculator
// =============================================================================

proptest! {
    #[test]
    fn business_annual_is_twelve_times_monthly(inputs in business_inputs()) {
        let calculator = BusinessFootprintCalculator::new(EmissionFactorTable::canonical());

        let monthly = calculator.calculate(&BusinessInputs {
            period: ReportingPeriod::Monthly,
            ..inputs.clone()
        });
        let annual = calculator.calculate(&BusinessInputs {
            period: ReportingPeriod::Annual,
            ..inputs
        });

        prop_assert_eq!(annual.result.total_kg, monthly.result.total_kg * 12.0);
    }

    #[test]
    fn business_subtotals_sum_to_total(inputs in business_inputs()) {
        let calculator = BusinessFootprintCalculator::new(EmissionFactorTable::canonical());
        let result = calculator.calculate(&inputs).result;

        let sum = result.subtotal(FootprintCategory::Scope1)
            + result.subtotal(FootprintCategory::Scope2)
            + result.subtotal(FootprintCategory::Scope3);
        prop_assert!(close(sum, result.total_kg));
    }
}

// =============================================================================
// Fixed Cases
// =============================================================================

#[test]
fn blank_forms_total_zero() {
    let table = EmissionFactorTable::canonical();

    let individual = IndividualFootprintCalculator::new(table).calculate(&IndividualInputs::default());
    assert_eq!(individual.result.total_kg, 0.0);
    assert!(individual.result.ignored_inputs.is_empty());

    let business = BusinessFootprintCalculator::new(table).calculate(&BusinessInputs::default());
    assert_eq!(business.result.total_kg, 0.0);
    assert!(business.benchmark.is_none());
}
