use tracing::debug;

use crate::catalog::Material;
use crate::math::WIDTH_TOLERANCE_INCHES;

/// Outcome of mapping a required strip width onto a width catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WidthSelection {
    pub required_width: f64,
    /// Narrowest catalog width that fits the requirement. Set to
    /// `max_allowed_width` when the requirement cannot be met.
    pub charged_width: f64,
    /// `charged_width / sheet_width`.
    pub sheet_fraction: f64,
    pub max_allowed_width: f64,
    /// The profile is wider than any strip this material can produce.
    pub is_exceeded: bool,
}

/// Picks the narrowest stockable strip that fits a required width.
///
/// All widths are in inches. `max_allowed_width` is
/// `min(sheet_width, max(allowed_widths))`; a requirement above it (by more
/// than [`WIDTH_TOLERANCE_INCHES`]) is flagged as exceeded.
pub struct SelectWidth<'a> {
    required_width: f64,
    allowed_widths: &'a [f64],
    sheet_width: f64,
}

impl<'a> SelectWidth<'a> {
    /// Creates a new `SelectWidth` query.
    #[must_use]
    pub fn new(required_width: f64, allowed_widths: &'a [f64], sheet_width: f64) -> Self {
        Self {
            required_width,
            allowed_widths,
            sheet_width,
        }
    }

    /// Creates a query against a material's sheet and width catalog.
    #[must_use]
    pub fn for_material(required_width: f64, material: &'a Material) -> Self {
        Self::new(required_width, &material.allowed_widths, material.sheet_width)
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> WidthSelection {
        let mut widths = self.allowed_widths.to_vec();
        widths.sort_by(f64::total_cmp);

        let max_allowed_width = widths
            .last()
            .map_or(self.sheet_width, |&widest| self.sheet_width.min(widest));
        let is_exceeded = self.required_width > max_allowed_width + WIDTH_TOLERANCE_INCHES;

        let charged_width = if is_exceeded {
            max_allowed_width
        } else {
            widths
                .iter()
                .copied()
                .find(|&w| w + WIDTH_TOLERANCE_INCHES >= self.required_width)
                .unwrap_or(max_allowed_width)
        };

        let selection = WidthSelection {
            required_width: self.required_width,
            charged_width,
            sheet_fraction: charged_width / self.sheet_width,
            max_allowed_width,
            is_exceeded,
        };
        debug!(
            required = selection.required_width,
            charged = selection.charged_width,
            exceeded = selection.is_exceeded,
            "selected strip width"
        );
        selection
    }
}
