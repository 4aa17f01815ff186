use serde::Serialize;
use tracing::{debug, info};

use super::select_width::SelectWidth;
use crate::catalog::{Material, PricingConfig, ProductType};
use crate::math::Unit;
use crate::operations::bend::DetectBends;
use crate::operations::length::DevelopedLength;
use crate::profile::ProfileGraph;

/// Strips are always cut to a full sheet length of ten feet.
pub const STRIP_LENGTH_FEET: f64 = 10.0;

/// Full price breakdown for a profile. Widths are in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalculation {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub setup_fee: f64,
    pub subtotal: f64,
    /// Margin in percent, echoed from the configuration.
    pub profit_margin: f64,
    pub profit_amount: f64,
    pub total_cost: f64,
    pub total_cost_per_unit: f64,
    pub quantity: u32,
    pub required_width: f64,
    pub charged_width: f64,
    pub strip_length_feet: f64,
    pub sheet_fraction: f64,
    pub max_allowed_width: f64,
    pub is_width_exceeded: bool,
}

impl PriceCalculation {
    /// The all-zero breakdown returned when there is nothing to price.
    #[must_use]
    pub fn empty(config: &PricingConfig) -> Self {
        Self {
            material_cost: 0.0,
            labor_cost: 0.0,
            setup_fee: 0.0,
            subtotal: 0.0,
            profit_margin: config.profit_margin,
            profit_amount: 0.0,
            total_cost: 0.0,
            total_cost_per_unit: 0.0,
            quantity: config.quantity,
            required_width: 0.0,
            charged_width: 0.0,
            strip_length_feet: STRIP_LENGTH_FEET,
            sheet_fraction: 0.0,
            max_allowed_width: 0.0,
            is_width_exceeded: false,
        }
    }
}

/// Prices a profile from its material, product type and pricing rules.
///
/// Preconditions: the material and configuration have been validated
/// (profit margin already clamped, quantity at least 1).
///
/// - No material or no geometry: [`PriceCalculation::empty`].
/// - Developed width above the material's maximum strip width: every cost is
///   zero and `is_width_exceeded` is set, with the clamped width kept for
///   display. No quote is given for a profile that cannot be produced.
/// - Otherwise: material cost is the sheet price times the sheet fraction,
///   labor comes from the product type, the setup fee is waived above the
///   configured quantity, and the margin is applied to the subtotal.
pub struct CalculatePrice<'a> {
    material: Option<&'a Material>,
    product_type: ProductType,
    config: &'a PricingConfig,
}

impl<'a> CalculatePrice<'a> {
    /// Creates a new `CalculatePrice` operation.
    #[must_use]
    pub fn new(
        material: Option<&'a Material>,
        product_type: ProductType,
        config: &'a PricingConfig,
    ) -> Self {
        Self {
            material,
            product_type,
            config,
        }
    }

    /// Executes the full geometry-to-price pass over a profile.
    #[must_use]
    pub fn execute(&self, graph: &ProfileGraph) -> PriceCalculation {
        if self.material.is_none() || !graph.has_geometry() {
            return PriceCalculation::empty(self.config);
        }
        let bends = DetectBends::new().execute(graph);
        let report = DevelopedLength::new(Unit::Inch)
            .with_material(self.material)
            .execute(graph, &bends);
        self.quote(report.developed_length())
    }

    /// Prices an already computed developed width, in inches.
    #[must_use]
    pub fn quote(&self, required_width: f64) -> PriceCalculation {
        let Some(material) = self.material else {
            return PriceCalculation::empty(self.config);
        };
        let selection = SelectWidth::for_material(required_width, material).execute();

        if selection.is_exceeded {
            info!(
                material = %material.id,
                required = selection.required_width,
                max = selection.max_allowed_width,
                "profile exceeds maximum strip width"
            );
            return PriceCalculation {
                required_width: selection.required_width,
                charged_width: selection.charged_width,
                sheet_fraction: selection.sheet_fraction,
                max_allowed_width: selection.max_allowed_width,
                is_width_exceeded: true,
                ..PriceCalculation::empty(self.config)
            };
        }

        let quantity = f64::from(self.config.quantity);
        let material_cost = material.sheet_price * selection.sheet_fraction;
        let labor_cost = self.config.labor_cost(self.product_type);
        let setup_fee = self.config.effective_setup_fee();
        let cost_per_unit = material_cost + labor_cost;
        let subtotal = cost_per_unit * quantity + setup_fee;
        let profit_amount = subtotal * self.config.profit_margin / 100.0;
        let total_cost = subtotal + profit_amount;

        let calc = PriceCalculation {
            material_cost,
            labor_cost,
            setup_fee,
            subtotal,
            profit_margin: self.config.profit_margin,
            profit_amount,
            total_cost,
            total_cost_per_unit: total_cost / quantity,
            quantity: self.config.quantity,
            required_width: selection.required_width,
            charged_width: selection.charged_width,
            strip_length_feet: STRIP_LENGTH_FEET,
            sheet_fraction: selection.sheet_fraction,
            max_allowed_width: selection.max_allowed_width,
            is_width_exceeded: false,
        };
        debug!(total = calc.total_cost, per_unit = calc.total_cost_per_unit, "priced profile");
        calc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::MaterialCatalog;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    fn copper() -> Material {
        MaterialCatalog::builtin().get("copper-16oz").cloned().unwrap()
    }

    #[test]
    fn no_material_is_empty() {
        let config = PricingConfig::default();
        let mut graph = ProfileGraph::new();
        graph.append_point(Point2::new(0.0, 0.0)).unwrap();
        graph.append_point(Point2::new(100.0, 0.0)).unwrap();

        let calc = CalculatePrice::new(None, ProductType::Valley, &config).execute(&graph);
        assert_eq!(calc, PriceCalculation::empty(&config));
        assert_relative_eq!(calc.strip_length_feet, 10.0);
    }

    #[test]
    fn no_geometry_is_empty() {
        let config = PricingConfig::default();
        let material = copper();
        let graph = ProfileGraph::new();
        let calc =
            CalculatePrice::new(Some(&material), ProductType::Valley, &config).execute(&graph);
        assert_eq!(calc, PriceCalculation::empty(&config));
    }

    #[test]
    fn quote_for_ten_inch_copper() {
        let mut config = PricingConfig::default();
        config.set_setup_fee(0.0).unwrap();
        config.set_profit_margin(0.0);
        let material = copper();

        let calc = CalculatePrice::new(Some(&material), ProductType::Valley, &config).quote(10.0);
        assert_relative_eq!(calc.charged_width, 12.0);
        assert_relative_eq!(calc.sheet_fraction, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(calc.material_cost, 242.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(calc.total_cost, 242.0 / 3.0 + 3.0, epsilon = 1e-9);
    }

    #[test]
    fn exceeded_width_zeroes_costs() {
        let config = PricingConfig::default();
        let material = copper();
        let calc = CalculatePrice::new(Some(&material), ProductType::CopingCap, &config).quote(40.0);
        assert!(calc.is_width_exceeded);
        assert_relative_eq!(calc.total_cost, 0.0);
        assert_relative_eq!(calc.material_cost, 0.0);
        assert_relative_eq!(calc.labor_cost, 0.0);
        assert_relative_eq!(calc.subtotal, 0.0);
        assert_relative_eq!(calc.charged_width, 36.0);
        assert_relative_eq!(calc.required_width, 40.0);
        assert_relative_eq!(calc.sheet_fraction, 1.0);
    }

    #[test]
    fn bulk_order_waives_setup_and_spreads_cost() {
        let mut config = PricingConfig::default();
        config.set_quantity(20).unwrap();
        let material = copper();

        let calc = CalculatePrice::new(Some(&material), ProductType::CopingCap, &config).quote(5.5);
        let unit_cost = 242.0 * 6.0 / 36.0 + 5.0;
        let subtotal = unit_cost * 20.0;
        assert_relative_eq!(calc.setup_fee, 0.0);
        assert_relative_eq!(calc.subtotal, subtotal, epsilon = 1e-9);
        assert_relative_eq!(calc.total_cost, subtotal * 1.2, epsilon = 1e-9);
        assert_relative_eq!(calc.total_cost_per_unit, subtotal * 1.2 / 20.0, epsilon = 1e-9);
    }

    #[test]
    fn unconfigured_product_uses_default_labor() {
        let config = PricingConfig::default();
        let material = copper();
        let calc = CalculatePrice::new(Some(&material), ProductType::GravelStop, &config).quote(3.0);
        assert_relative_eq!(calc.labor_cost, 3.0);
    }

    #[test]
    fn serializes_for_presentation() {
        let config = PricingConfig::default();
        let json = serde_json::to_string(&PriceCalculation::empty(&config)).unwrap();
        assert!(json.contains("\"isWidthExceeded\":false"));
        assert!(json.contains("\"stripLengthFeet\":10.0"));
    }
}
