//! Request and response bodies for footprint endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::emissions::FactorEntry;
use crate::domain::footprint::{
    BenchmarkComparison, BusinessFootprint, ChartSlice, FootprintCategory, FootprintResult,
    IndividualFootprint, ShareAudience, Suggestion,
};
use crate::domain::foundation::{round_for_display, ReportingPeriod};

/// Body of `POST /api/footprint/share`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRequest {
    pub audience: ShareAudience,
    #[serde(default)]
    pub period: ReportingPeriod,
    pub total_kg: f64,
    #[serde(default)]
    pub native_share_available: bool,
}

/// Body of `GET /api/factors`.
#[derive(Debug, Serialize)]
pub struct FactorListResponse {
    pub factors: &'static [FactorEntry],
}

/// One breakdown row, rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: FootprintCategory,
    pub label: String,
    pub kg_co2e: f64,
}

/// Calculation response shared by both estimators.
#[derive(Debug, Serialize)]
pub struct FootprintResponse {
    pub period: ReportingPeriod,
    pub total_kg_co2e: f64,
    /// `"<value> kg CO2e"`
    pub total_display: String,
    pub breakdown: Vec<BreakdownEntry>,
    pub chart: Vec<ChartSlice>,
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_inputs: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_feedback: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkComparison>,
}

impl From<FootprintResult> for FootprintResponse {
    fn from(result: FootprintResult) -> Self {
        let total_display = result.formatted_total();
        let breakdown = result
            .breakdown
            .iter()
            .map(|(category, kg)| BreakdownEntry {
                category,
                label: category.label().to_string(),
                kg_co2e: round_for_display(kg),
            })
            .collect();

        Self {
            period: result.period,
            total_kg_co2e: round_for_display(result.total_kg),
            total_display,
            breakdown,
            chart: result.chart.slices().to_vec(),
            suggestions: result.suggestions,
            ignored_inputs: result.ignored_inputs,
            waste_feedback: None,
            benchmark: None,
        }
    }
}

impl From<IndividualFootprint> for FootprintResponse {
    fn from(footprint: IndividualFootprint) -> Self {
        Self {
            waste_feedback: footprint.waste_feedback,
            ..footprint.result.into()
        }
    }
}

impl From<BusinessFootprint> for FootprintResponse {
    fn from(footprint: BusinessFootprint) -> Self {
        Self {
            benchmark: footprint.benchmark,
            ..footprint.result.into()
        }
    }
}
