use serde::{Deserialize, Serialize};

/// Canvas pixels per millimeter (96 DPI / 25.4).
pub const PIXELS_PER_MM: f64 = 3.7795;

/// Millimeters per inch (exact).
pub const MM_PER_INCH: f64 = 25.4;

/// A user-facing length unit. Canvas coordinates are always pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mm")]
    Millimeter,
    #[default]
    #[serde(rename = "inch")]
    Inch,
}

impl Unit {
    /// Number of canvas pixels in one of this unit.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => PIXELS_PER_MM,
            Self::Inch => MM_PER_INCH * PIXELS_PER_MM,
        }
    }

    /// Short display label (`mm` or `in`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Inch => "in",
        }
    }

    /// Canvas grid spacing in pixels: every 10 mm, or every half inch.
    #[must_use]
    pub fn grid_size_pixels(self) -> f64 {
        match self {
            Self::Millimeter => to_pixels(10.0, self),
            Self::Inch => to_pixels(0.5, self),
        }
    }

    /// Converts a length authored in inches (material data) into this unit.
    #[must_use]
    pub fn convert_inches(self, inches: f64) -> f64 {
        match self {
            Self::Millimeter => inches * MM_PER_INCH,
            Self::Inch => inches,
        }
    }

    /// Converts a length in this unit into inches.
    #[must_use]
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Millimeter => value / MM_PER_INCH,
            Self::Inch => value,
        }
    }
}

/// Converts a length in `unit` to canvas pixels.
#[must_use]
pub fn to_pixels(value: f64, unit: Unit) -> f64 {
    value * unit.pixels_per_unit()
}

/// Converts a canvas length in pixels to `unit`.
#[must_use]
pub fn from_pixels(pixels: f64, unit: Unit) -> f64 {
    pixels / unit.pixels_per_unit()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;

    #[test]
    fn one_inch_is_25_4_mm_of_pixels() {
        let px = to_pixels(1.0, Unit::Inch);
        assert_relative_eq!(from_pixels(px, Unit::Millimeter), 25.4, epsilon = 1e-12);
    }

    #[test]
    fn millimeter_scale() {
        assert_relative_eq!(to_pixels(100.0, Unit::Millimeter), 377.95, epsilon = 1e-9);
    }

    #[test]
    fn grid_spacing() {
        assert_relative_eq!(Unit::Millimeter.grid_size_pixels(), 37.795, epsilon = 1e-9);
        assert_relative_eq!(
            Unit::Inch.grid_size_pixels(),
            0.5 * 25.4 * 3.7795,
            epsilon = 1e-9
        );
    }

    #[test]
    fn inch_scaling_for_material_data() {
        assert_relative_eq!(Unit::Millimeter.convert_inches(0.5), 12.7, epsilon = 1e-12);
        assert_relative_eq!(Unit::Inch.convert_inches(0.5), 0.5);
        assert_relative_eq!(Unit::Millimeter.to_inches(12.7), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn labels_and_serde_names() {
        assert_eq!(Unit::Millimeter.label(), "mm");
        assert_eq!(Unit::Inch.label(), "in");
        assert_eq!(serde_json::to_string(&Unit::Millimeter).unwrap(), "\"mm\"");
        let unit: Unit = serde_json::from_str("\"inch\"").unwrap();
        assert_eq!(unit, Unit::Inch);
    }

    proptest! {
        #[test]
        fn pixel_round_trip(v in 0.0f64..1.0e6, inch in any::<bool>()) {
            let unit = if inch { Unit::Inch } else { Unit::Millimeter };
            let back = from_pixels(to_pixels(v, unit), unit);
            prop_assert!(relative_eq!(back, v, epsilon = 1e-9, max_relative = 1e-12));
        }
    }
}
