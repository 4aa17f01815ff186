/// Arc lengths through a single bend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BendDimensions {
    /// Arc length along the neutral fiber.
    pub neutral_axis_length: f64,
    /// Arc length on the compression (inner) surface.
    pub inner_length: f64,
    /// Arc length on the tension (outer) surface.
    pub outer_length: f64,
    /// Extra flat length consumed by the bend (K-factor method).
    pub bend_allowance: f64,
}

/// Computes bend dimensions with the K-factor method.
///
/// With `θ` the angle in radians, `R` the inner radius, `T` the thickness and
/// `K` the K-factor:
///
/// - bend allowance = neutral axis length = `θ (R + K T)`
/// - inner length = `θ R`
/// - outer length = `θ (R + T)`
///
/// The inner radius defaults to the thickness. All lengths share the unit of
/// `thickness`. Inputs are assumed to come from a validated material.
pub struct BendAllowance {
    angle_degrees: f64,
    thickness: f64,
    k_factor: f64,
    inner_radius: Option<f64>,
}

impl BendAllowance {
    /// Creates a new `BendAllowance` calculation.
    #[must_use]
    pub fn new(angle_degrees: f64, thickness: f64, k_factor: f64) -> Self {
        Self {
            angle_degrees,
            thickness,
            k_factor,
            inner_radius: None,
        }
    }

    /// Overrides the inner bend radius (same unit as thickness).
    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self
    }

    /// Executes the calculation.
    #[must_use]
    pub fn execute(&self) -> BendDimensions {
        let theta = self.angle_degrees.to_radians();
        let radius = self.inner_radius.unwrap_or(self.thickness);
        let neutral_radius = radius + self.k_factor * self.thickness;
        let neutral_axis_length = theta * neutral_radius;

        BendDimensions {
            neutral_axis_length,
            inner_length: theta * radius,
            outer_length: theta * (radius + self.thickness),
            bend_allowance: neutral_axis_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_angle_is_all_zero() {
        let dims = BendAllowance::new(0.0, 0.0276, 0.44).execute();
        assert_eq!(dims, BendDimensions::default());
    }

    #[test]
    fn right_angle_steel() {
        let dims = BendAllowance::new(90.0, 0.0276, 0.44).execute();
        let expected = FRAC_PI_2 * (0.0276 + 0.44 * 0.0276);
        assert_relative_eq!(dims.bend_allowance, expected, epsilon = 1e-12);
        assert_relative_eq!(dims.neutral_axis_length, dims.bend_allowance);
        assert_relative_eq!(dims.inner_length, FRAC_PI_2 * 0.0276, epsilon = 1e-12);
        assert_relative_eq!(dims.outer_length, FRAC_PI_2 * 0.0552, epsilon = 1e-12);
    }

    #[test]
    fn custom_inner_radius() {
        let dims = BendAllowance::new(180.0, 0.5, 0.5)
            .with_inner_radius(1.0)
            .execute();
        assert_relative_eq!(dims.inner_length, std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(dims.bend_allowance, 1.25 * std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(dims.outer_length, 1.5 * std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn neutral_fiber_lies_between_surfaces() {
        let dims = BendAllowance::new(45.0, 0.032, 0.33).execute();
        assert!(dims.inner_length < dims.neutral_axis_length);
        assert!(dims.neutral_axis_length < dims.outer_length);
    }

    proptest! {
        #[test]
        fn allowance_grows_with_angle(
            a in 0.01f64..179.0,
            step in 0.01f64..1.0,
            t in 0.001f64..0.25,
            k in 0.01f64..0.99,
        ) {
            let lo = BendAllowance::new(a, t, k).execute().bend_allowance;
            let hi = BendAllowance::new(a + step, t, k).execute().bend_allowance;
            prop_assert!(hi > lo);
        }

        #[test]
        fn zero_angle_for_any_material(t in 0.001f64..0.25, k in 0.01f64..0.99) {
            prop_assert_eq!(BendAllowance::new(0.0, t, k).execute(), BendDimensions::default());
        }
    }
}
