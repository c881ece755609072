//! Suggestion selection from breakdown subtotals.

use serde::Serialize;

use super::business_type::BusinessType;
use super::category::FootprintCategory;
use super::result::Breakdown;

/// Why a suggestion was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Introduction,
    Reduction,
    AvoidedEmissions,
    Sector,
    Encouragement,
}

/// A canned improvement tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FootprintCategory>,
    pub text: &'static str,
}

impl Suggestion {
    fn new(kind: SuggestionKind, category: Option<FootprintCategory>, text: &'static str) -> Self {
        Self {
            kind,
            category,
            text,
        }
    }
}

/// Fixed texts that frame the category tips of one calculator.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionPolicy {
    pub introduction: &'static str,
    /// Shown when no category or credit tip was selected.
    pub fallback: Option<&'static str>,
}

impl SuggestionPolicy {
    pub const INDIVIDUAL: SuggestionPolicy = SuggestionPolicy {
        introduction: "Every small step counts towards a greener planet! Here is how your footprint breaks down.",
        fallback: Some(
            "Great job! Your carbon footprint seems relatively low in the calculated categories. Keep up the good work!",
        ),
    };

    pub const BUSINESS: SuggestionPolicy = SuggestionPolicy {
        introduction: "Understanding your emissions by scope is the first step towards a comprehensive decarbonization strategy. ClimateOS provides audit-ready reports and scenario modeling for deeper analysis.",
        fallback: None,
    };

    /// Selects tips for a set of monthly subtotals.
    ///
    /// Thresholds are compared against the monthly values; the period
    /// multiplier is positive so the sign of each subtotal does not change.
    pub fn select(&self, monthly: &Breakdown, sector: Option<BusinessType>) -> Vec<Suggestion> {
        let mut tips = vec![Suggestion::new(
            SuggestionKind::Introduction,
            None,
            self.introduction,
        )];

        let mut category_tip_selected = false;
        for (category, kg) in monthly.iter() {
            if kg > category.tip_threshold_kg() {
                category_tip_selected = true;
                tips.extend(
                    category
                        .tips()
                        .iter()
                        .map(|text| Suggestion::new(SuggestionKind::Reduction, Some(category), text)),
                );
            } else if kg < 0.0 {
                if let Some(text) = category.credit_tip() {
                    category_tip_selected = true;
                    tips.push(Suggestion::new(
                        SuggestionKind::AvoidedEmissions,
                        Some(category),
                        text,
                    ));
                }
            }
        }

        if let Some(text) = sector.and_then(|s| s.sector_tip()) {
            tips.push(Suggestion::new(SuggestionKind::Sector, None, text));
        }

        if !category_tip_selected {
            if let Some(text) = self.fallback {
                tips.push(Suggestion::new(SuggestionKind::Encouragement, None, text));
            }
        }

        tips
    }
}
