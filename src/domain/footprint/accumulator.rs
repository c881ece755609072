//! Multiply-and-accumulate over activity slots.

use super::business_type::BusinessType;
use super::category::FootprintCategory;
use super::result::{Breakdown, ChartSeries, FootprintResult};
use super::suggestions::SuggestionPolicy;
use crate::domain::emissions::{EmissionFactorTable, FactorKey};
use crate::domain::foundation::{ActivityInput, ParsedQuantity, ReportingPeriod};

/// Collects monthly subtotals for one calculation.
pub(crate) struct SubtotalAccumulator<'t> {
    table: &'t EmissionFactorTable,
    monthly: Breakdown,
    ignored: Vec<&'static str>,
}

impl<'t> SubtotalAccumulator<'t> {
    pub(crate) fn new(table: &'t EmissionFactorTable, categories: &[FootprintCategory]) -> Self {
        Self {
            table,
            monthly: Breakdown::zeroed(categories),
            ignored: Vec::new(),
        }
    }

    /// Adds `input × factor(key)` to `category`.
    pub(crate) fn add(
        &mut self,
        category: FootprintCategory,
        field: &'static str,
        input: &ActivityInput,
        key: FactorKey,
    ) {
        self.add_converted(category, field, input, key, 1.0);
    }

    /// Adds `input × conversion × factor(key)` to `category`.
    ///
    /// Blank inputs contribute nothing. Unparseable ones, and ones so large
    /// that a subtotal or the total would overflow once annualised, contribute
    /// nothing and are recorded by field name.
    pub(crate) fn add_converted(
        &mut self,
        category: FootprintCategory,
        field: &'static str,
        input: &ActivityInput,
        key: FactorKey,
        conversion: f64,
    ) {
        let Some(quantity) = self.quantity(field, input) else {
            return;
        };
        let kg = quantity * conversion * self.table.factor_for(key);
        let fits = |value: f64| (value * ReportingPeriod::Annual.multiplier()).is_finite();
        if fits(kg) && fits(self.monthly.get(category) + kg) && fits(self.monthly.total() + kg) {
            self.monthly.add(category, kg);
        } else {
            self.ignored.push(field);
        }
    }

    /// Parses a non-activity field (e.g. revenue), recording it when unusable.
    pub(crate) fn quantity(&mut self, field: &'static str, input: &ActivityInput) -> Option<f64> {
        match input.parse() {
            ParsedQuantity::Absent => None,
            ParsedQuantity::Quantity(value) => Some(value),
            ParsedQuantity::Unparseable => {
                self.ignored.push(field);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> (Breakdown, Vec<&'static str>) {
        (self.monthly, self.ignored)
    }

    /// Scales the monthly subtotals to `period` and selects suggestions.
    ///
    /// The total is the monthly total times the multiplier, never the sum of
    /// scaled subtotals, so annual results are exactly twelve monthly ones.
    pub(crate) fn into_result(
        self,
        period: ReportingPeriod,
        policy: &SuggestionPolicy,
        sector: Option<BusinessType>,
    ) -> FootprintResult {
        let multiplier = period.multiplier();
        let (monthly, ignored_inputs) = self.finish();
        let suggestions = policy.select(&monthly, sector);
        let breakdown = monthly.scaled(multiplier);
        let chart = ChartSeries::from_breakdown(&breakdown);

        FootprintResult {
            period,
            total_kg: monthly.total() * multiplier,
            breakdown,
            chart,
            suggestions,
            ignored_inputs,
        }
    }
}
