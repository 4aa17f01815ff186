use tracing::{debug, warn};

use crate::catalog::Material;
use crate::math::units::from_pixels;
use crate::math::Unit;
use crate::operations::bend::{Bend, BendAllowance, BendDimensions};
use crate::profile::ProfileGraph;

/// One bend and its arc lengths, expressed in the report unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendContribution {
    pub bend: Bend,
    pub dimensions: BendDimensions,
}

/// Flat-pattern lengths of a profile in a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct DevelopedLengthReport {
    pub unit: Unit,
    /// Sum of straight segment lengths.
    pub flat_length: f64,
    /// Flat length plus neutral-axis bend allowances. This is the developed
    /// length used for width selection and pricing.
    pub neutral_length: f64,
    /// Flat length plus inner-surface arcs.
    pub inner_length: f64,
    /// Flat length plus outer-surface arcs.
    pub outer_length: f64,
    /// Per-bend figures; empty when the material lacks bend data.
    pub bends: Vec<BendContribution>,
}

impl DevelopedLengthReport {
    /// The developed (neutral-axis) length.
    #[must_use]
    pub fn developed_length(&self) -> f64 {
        self.neutral_length
    }

    /// Sum of all bend allowances.
    #[must_use]
    pub fn total_bend_allowance(&self) -> f64 {
        self.neutral_length - self.flat_length
    }

    /// Outer minus inner surface length. Diagnostic only.
    #[must_use]
    pub fn stretch_difference(&self) -> f64 {
        self.outer_length - self.inner_length
    }
}

/// Computes the developed length of a profile.
///
/// Segment lengths are converted from pixels to the target unit; material
/// thickness (authored in inches) is scaled to the same unit before the bend
/// allowance is computed. Without a material, or with a material whose
/// thickness or K-factor is not positive, bends contribute nothing and the
/// result is the flat length.
pub struct DevelopedLength<'a> {
    unit: Unit,
    material: Option<&'a Material>,
    inner_radius_inches: Option<f64>,
}

impl<'a> DevelopedLength<'a> {
    /// Creates a new `DevelopedLength` query reporting in `unit`.
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            material: None,
            inner_radius_inches: None,
        }
    }

    /// Sets the material whose thickness and K-factor drive bend allowances.
    #[must_use]
    pub fn with_material(mut self, material: Option<&'a Material>) -> Self {
        self.material = material;
        self
    }

    /// Overrides the inner bend radius (inches). Defaults to the thickness.
    #[must_use]
    pub fn with_inner_radius(mut self, inches: f64) -> Self {
        self.inner_radius_inches = Some(inches);
        self
    }

    /// Executes the query over the profile and its detected bends.
    #[must_use]
    pub fn execute(&self, graph: &ProfileGraph, bends: &[Bend]) -> DevelopedLengthReport {
        let flat_pixels: f64 = graph
            .segments()
            .filter_map(|(id, _)| match graph.segment_length(id) {
                Ok(len) => Some(len),
                Err(err) => {
                    warn!(segment = ?id, %err, "segment length unavailable, skipping");
                    None
                }
            })
            .sum();
        let flat_length = from_pixels(flat_pixels, self.unit);

        let contributions: Vec<BendContribution> = match self.bend_parameters() {
            Some((thickness, k_factor, radius)) => bends
                .iter()
                .map(|bend| {
                    let mut calc = BendAllowance::new(bend.angle_degrees, thickness, k_factor);
                    if let Some(r) = radius {
                        calc = calc.with_inner_radius(r);
                    }
                    BendContribution {
                        bend: *bend,
                        dimensions: calc.execute(),
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        let report = DevelopedLengthReport {
            unit: self.unit,
            flat_length,
            neutral_length: flat_length + sum_by(&contributions, |d| d.bend_allowance),
            inner_length: flat_length + sum_by(&contributions, |d| d.inner_length),
            outer_length: flat_length + sum_by(&contributions, |d| d.outer_length),
            bends: contributions,
        };

        debug!(
            unit = self.unit.label(),
            flat = report.flat_length,
            developed = report.neutral_length,
            bends = report.bends.len(),
            "computed developed length"
        );
        report
    }

    /// Thickness, K-factor and optional inner radius in the report unit, or
    /// `None` if the material cannot describe a bend.
    fn bend_parameters(&self) -> Option<(f64, f64, Option<f64>)> {
        let material = self.material?;
        if material.thickness_inches <= 0.0 || material.k_factor <= 0.0 {
            return None;
        }
        Some((
            self.unit.convert_inches(material.thickness_inches),
            material.k_factor,
            self.inner_radius_inches.map(|r| self.unit.convert_inches(r)),
        ))
    }
}

fn sum_by(contributions: &[BendContribution], f: impl Fn(&BendDimensions) -> f64) -> f64 {
    contributions.iter().map(|c| f(&c.dimensions)).sum()
}
