//! Footprint calculators.
//!
//! Both calculators follow the same steps: parse each monthly activity slot,
//! multiply by its factor, accumulate into a category, scale by the period
//! multiplier, then derive the chart series and suggestions.
//!
//! - [`IndividualFootprintCalculator`]: Electricity, Transportation, Waste
//! - [`BusinessFootprintCalculator`]: Scope 1, Scope 2, Scope 3

mod accumulator;
mod business;
mod business_type;
mod category;
mod individual;
mod result;
mod share;
mod suggestions;

pub use business::{BenchmarkComparison, BusinessFootprint, BusinessFootprintCalculator, BusinessInputs};
pub use business_type::{BusinessType, TypicalRange};
pub use category::FootprintCategory;
pub use individual::{
    CompostingHabit, IndividualFootprint, IndividualFootprintCalculator, IndividualInputs,
    RecyclingHabit, ReductionEffort, WasteHabits, WasteMode, WASTE_DIVERSION_FEEDBACK,
};
pub use result::{Breakdown, ChartSeries, ChartSlice, FootprintResult};
pub use share::{ShareAudience, ShareMessage, ShareOutcome, COPY_FALLBACK_PREFIX};
pub use suggestions::{Suggestion, SuggestionKind, SuggestionPolicy};
