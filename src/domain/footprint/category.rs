//! Footprint categories and the suggestion rules they carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bucket that activity contributions are summed into.
///
/// Each category owns its display label, chart color, tip threshold and tip
/// texts, so suggestion selection is a single pass over the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintCategory {
    Electricity,
    Transportation,
    Waste,
    Scope1,
    Scope2,
    Scope3,
}

impl FootprintCategory {
    /// Buckets of the individual calculator, in display order.
    pub const INDIVIDUAL: [FootprintCategory; 3] = [
        FootprintCategory::Electricity,
        FootprintCategory::Transportation,
        FootprintCategory::Waste,
    ];

    /// Buckets of the business calculator, in display order.
    pub const BUSINESS: [FootprintCategory; 3] = [
        FootprintCategory::Scope1,
        FootprintCategory::Scope2,
        FootprintCategory::Scope3,
    ];

    /// Chart and breakdown label.
    pub fn label(&self) -> &'static str {
        match self {
            FootprintCategory::Electricity => "Electricity",
            FootprintCategory::Transportation => "Transportation",
            FootprintCategory::Waste => "Waste",
            FootprintCategory::Scope1 => "Scope 1 (Direct)",
            FootprintCategory::Scope2 => "Scope 2 (Electricity)",
            FootprintCategory::Scope3 => "Scope 3 (Value Chain)",
        }
    }

    /// Fixed chart color.
    pub fn color(&self) -> &'static str {
        match self {
            FootprintCategory::Electricity | FootprintCategory::Scope2 => "#007bff",
            FootprintCategory::Transportation | FootprintCategory::Scope3 => "#ffc107",
            FootprintCategory::Waste | FootprintCategory::Scope1 => "#dc3545",
        }
    }

    /// Monthly subtotal (kg CO2e) that must be exceeded before tips are shown.
    pub fn tip_threshold_kg(&self) -> f64 {
        match self {
            FootprintCategory::Electricity => 10.0,
            FootprintCategory::Transportation => 50.0,
            FootprintCategory::Waste => 5.0,
            FootprintCategory::Scope1 | FootprintCategory::Scope2 | FootprintCategory::Scope3 => {
                0.0
            }
        }
    }

    /// Reduction tips shown when the threshold is exceeded.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            FootprintCategory::Electricity => &[
                "Consider switching to energy-efficient appliances and LED lighting to reduce electricity consumption.",
                "Unplug electronics when not in use. Even idle devices consume 'vampire' energy!",
            ],
            FootprintCategory::Transportation => &[
                "Explore carpooling, public transport, cycling, or walking for shorter distances.",
                "If possible, consider electric vehicles for your next purchase. They significantly reduce tailpipe emissions.",
                "Regular vehicle maintenance can improve fuel efficiency.",
            ],
            FootprintCategory::Waste => &[
                "Focus on reducing waste by choosing products with minimal packaging and using reusable bags/bottles.",
                "Start composting organic waste at home to divert it from landfills and open burning.",
                "Segregate your waste properly for recycling (plastics, paper, glass, metal).",
            ],
            FootprintCategory::Scope1 => &[
                "For Scope 1 (Direct Emissions): Implement regular maintenance for company vehicles and equipment to improve fuel efficiency. Explore switching to cleaner fuels or electric/hybrid company fleets.",
            ],
            FootprintCategory::Scope2 => &[
                "For Scope 2 (Electricity): Invest in energy-efficient lighting (LEDs) and HVAC systems. Consider installing rooftop solar panels or sourcing renewable energy through Power Purchase Agreements (PPAs).",
            ],
            FootprintCategory::Scope3 => &[
                "For Scope 3 (Value Chain): Engage with your suppliers to encourage sustainable practices. Promote public transport, carpooling, or cycling for employee commute. Implement robust waste segregation and recycling programs.",
            ],
        }
    }

    /// Congratulatory tip for categories whose credits can outweigh emissions.
    pub fn credit_tip(&self) -> Option<&'static str> {
        match self {
            FootprintCategory::Waste => Some(
                "Great work on waste! Your composting is avoiding more emissions than your waste creates. Keep it up!",
            ),
            FootprintCategory::Scope3 => Some(
                "Excellent work on Scope 3 waste management! Your composting and recycling efforts are leading to avoided emissions. Keep up the great work!",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for FootprintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
