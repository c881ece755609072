//! CalculateBusinessFootprint - Command handler for the Scope 1/2/3 estimator.

use tracing::debug;

use crate::domain::emissions::EmissionFactorTable;
use crate::domain::footprint::{BusinessFootprint, BusinessFootprintCalculator, BusinessInputs};

/// Command to calculate a business footprint.
#[derive(Debug, Clone)]
pub struct CalculateBusinessFootprintCommand {
    pub inputs: BusinessInputs,
}

/// Handler for business calculations.
#[derive(Debug, Clone, Copy)]
pub struct CalculateBusinessFootprintHandler {
    table: &'static EmissionFactorTable,
}

impl CalculateBusinessFootprintHandler {
    pub fn new(table: &'static EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn handle(&self, cmd: CalculateBusinessFootprintCommand) -> BusinessFootprint {
        let footprint = BusinessFootprintCalculator::new(self.table).calculate(&cmd.inputs);

        debug!(
            period = %footprint.result.period,
            business_type = ?cmd.inputs.business_type,
            total_kg = footprint.result.total_kg,
            benchmarked = footprint.benchmark.is_some(),
            "Calculated business footprint"
        );
        if !footprint.result.ignored_inputs.is_empty() {
            debug!(
                ignored = ?footprint.result.ignored_inputs,
                "Ignored unparseable inputs"
            );
        }

        footprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::footprint::{BusinessType, FootprintCategory};

    #[test]
    fn handle_runs_business_calculator() {
        let handler = CalculateBusinessFootprintHandler::new(EmissionFactorTable::canonical());
        let cmd = CalculateBusinessFootprintCommand {
            inputs: BusinessInputs {
                business_type: Some(BusinessType::Manufacturing),
                lpg_kg: "10".into(),
                ..Default::default()
            },
        };

        let footprint = handler.handle(cmd);

        assert_eq!(footprint.result.subtotal(FootprintCategory::Scope1), 30.0);
        assert!(footprint.benchmark.is_none());
    }
}
