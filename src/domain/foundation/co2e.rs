//! Display helpers for kg CO2e magnitudes.

/// Number of decimal places shown for every displayed magnitude.
pub const DISPLAY_DECIMALS: usize = 3;

/// Rounds a magnitude to the displayed precision.
pub fn round_for_display(kg: f64) -> f64 {
    (kg * 1000.0).round() / 1000.0
}

/// Formats a magnitude as `"<value> kg CO2e"` with three decimals.
pub fn format_kg_co2e(kg: f64) -> String {
    format!("{:.*} kg CO2e", DISPLAY_DECIMALS, kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round_for_display(69.30000000000001), 69.3);
        assert_eq!(round_for_display(0.0844), 0.084);
        assert_eq!(round_for_display(-0.0506), -0.051);
    }

    #[test]
    fn formats_with_unit_suffix() {
        assert_eq!(format_kg_co2e(220.7), "220.700 kg CO2e");
        assert_eq!(format_kg_co2e(0.0), "0.000 kg CO2e");
    }
}
