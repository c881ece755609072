//! FootprintResult and the values derived from it.

use serde::Serialize;
use std::collections::BTreeMap;

use super::category::FootprintCategory;
use super::suggestions::Suggestion;
use crate::domain::foundation::{format_kg_co2e, ReportingPeriod};

/// Per-category subtotals in kg CO2e.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<FootprintCategory, f64>);

impl Breakdown {
    /// Creates a breakdown with every listed category at zero.
    pub fn zeroed(categories: &[FootprintCategory]) -> Self {
        Self(categories.iter().map(|c| (*c, 0.0)).collect())
    }

    /// Adds a contribution to a category.
    pub fn add(&mut self, category: FootprintCategory, kg: f64) {
        *self.0.entry(category).or_insert(0.0) += kg;
    }

    /// Returns the subtotal of a category (zero when not tracked).
    pub fn get(&self, category: FootprintCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Sum of every subtotal.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Returns a copy with every subtotal multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|(c, kg)| (*c, kg * factor)).collect())
    }

    /// Iterates subtotals in category order.
    pub fn iter(&self) -> impl Iterator<Item = (FootprintCategory, f64)> + '_ {
        self.0.iter().map(|(c, kg)| (*c, *kg))
    }
}

/// One slice of the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: FootprintCategory,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    /// Share of the dataset sum, one decimal. Zero when the sum is not positive.
    pub share_percent: f64,
}

/// Data handed to the chart renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSeries(Vec<ChartSlice>);

impl ChartSeries {
    /// Builds the series from a scaled breakdown.
    ///
    /// A category is included iff its subtotal is non-zero, so negative
    /// (credit-dominated) categories are kept.
    pub fn from_breakdown(breakdown: &Breakdown) -> Self {
        let included: Vec<(FootprintCategory, f64)> =
            breakdown.iter().filter(|(_, kg)| *kg != 0.0).collect();
        let sum: f64 = included.iter().map(|(_, kg)| kg).sum();

        let slices = included
            .into_iter()
            .map(|(category, value)| ChartSlice {
                category,
                label: category.label(),
                value,
                color: category.color(),
                share_percent: if sum > 0.0 {
                    (value / sum * 1000.0).round() / 10.0
                } else {
                    0.0
                },
            })
            .collect();
        Self(slices)
    }

    pub fn slices(&self) -> &[ChartSlice] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|s| s.label).collect()
    }
}

/// Output of one calculation.
///
/// All magnitudes are already scaled to `period`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintResult {
    pub period: ReportingPeriod,
    pub total_kg: f64,
    pub breakdown: Breakdown,
    pub chart: ChartSeries,
    pub suggestions: Vec<Suggestion>,
    /// Inputs that held text but no usable number; they contributed zero.
    pub ignored_inputs: Vec<&'static str>,
}

impl FootprintResult {
    /// Total formatted as `"<value> kg CO2e"`.
    pub fn formatted_total(&self) -> String {
        format_kg_co2e(self.total_kg)
    }

    /// Scaled subtotal of one category.
    pub fn subtotal(&self, category: FootprintCategory) -> f64 {
        self.breakdown.get(category)
    }
}
