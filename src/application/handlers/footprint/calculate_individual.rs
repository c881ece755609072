//! CalculateIndividualFootprint - Command handler for the individual estimator.

use tracing::debug;

use crate::domain::emissions::EmissionFactorTable;
use crate::domain::footprint::{
    IndividualFootprint, IndividualFootprintCalculator, IndividualInputs,
};

/// Command to calculate an individual footprint.
#[derive(Debug, Clone)]
pub struct CalculateIndividualFootprintCommand {
    pub inputs: IndividualInputs,
}

/// Handler for individual calculations.
#[derive(Debug, Clone, Copy)]
pub struct CalculateIndividualFootprintHandler {
    table: &'static EmissionFactorTable,
}

impl CalculateIndividualFootprintHandler {
    pub fn new(table: &'static EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn handle(&self, cmd: CalculateIndividualFootprintCommand) -> IndividualFootprint {
        let footprint = IndividualFootprintCalculator::new(self.table).calculate(&cmd.inputs);

        debug!(
            period = %footprint.result.period,
            total_kg = footprint.result.total_kg,
            suggestions = footprint.result.suggestions.len(),
            "Calculated individual footprint"
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
