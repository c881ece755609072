//! ListFactors - Query handler exposing the canonical factor table.

use crate::domain::emissions::{EmissionFactorTable, FactorEntry};

/// Handler returning every factor in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ListFactorsHandler {
    table: &'static EmissionFactorTable,
}

impl ListFactorsHandler {
    pub fn new(table: &'static EmissionFactorTable) -> Self {
        Self { table }
    }

    pub fn handle(&self) -> &'static [FactorEntry] {
        self.table.entries()
    }
}
