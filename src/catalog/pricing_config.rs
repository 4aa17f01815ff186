use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Labor charged per unit when a product type has no configured entry.
pub const DEFAULT_LABOR_COST: f64 = 3.0;

/// Orders above this quantity have the setup fee waived.
pub const SETUP_FEE_WAIVER_QUANTITY: u32 = 10;

/// Flashing product family; selects the labor cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    CopingCap,
    ZClosure,
    DStyle,
    TStyle,
    Valley,
    RoofToWall,
    GravelStop,
    JChannel,
    Other,
}

/// Pricing rules applied on top of material cost.
///
/// Setters enforce the input-boundary rules: profit margin is clamped to
/// `[0, 100]`, quantity is at least 1, fees and labor costs are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Profit margin in percent.
    pub profit_margin: f64,
    pub labor_costs: HashMap<ProductType, f64>,
    pub default_labor_cost: f64,
    pub setup_fee: f64,
    pub setup_fee_waiver_quantity: u32,
    pub quantity: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let labor_costs = [
            (ProductType::CopingCap, 5.0),
            (ProductType::ZClosure, 3.0),
            (ProductType::DStyle, 3.0),
            (ProductType::TStyle, 3.0),
            (ProductType::Valley, 3.0),
            (ProductType::RoofToWall, 3.0),
            (ProductType::Other, 3.0),
        ]
        .into_iter()
        .collect();
        Self {
            profit_margin: 20.0,
            labor_costs,
            default_labor_cost: DEFAULT_LABOR_COST,
            setup_fee: 10.0,
            setup_fee_waiver_quantity: SETUP_FEE_WAIVER_QUANTITY,
            quantity: 1,
        }
    }
}

impl PricingConfig {
    /// Parses and validates a pricing configuration from JSON. Missing
    /// fields take their default values; the margin is clamped.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.profit_margin = clamp_margin(config.profit_margin);
        config.validate()?;
        Ok(config)
    }

    /// Checks quantity, fees and labor costs.
    ///
    /// # Errors
    ///
    /// Returns an error if quantity is 0 or any cost is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantity == 0 {
            return Err(ConfigError::InvalidQuantity);
        }
        check_non_negative("setup_fee", self.setup_fee)?;
        check_non_negative("default_labor_cost", self.default_labor_cost)?;
        for &cost in self.labor_costs.values() {
            check_non_negative("labor_cost", cost)?;
        }
        Ok(())
    }

    /// Labor cost for `product_type`, falling back to `default_labor_cost`.
    #[must_use]
    pub fn labor_cost(&self, product_type: ProductType) -> f64 {
        self.labor_costs
            .get(&product_type)
            .copied()
            .unwrap_or(self.default_labor_cost)
    }

    /// Setup fee actually charged at the configured quantity.
    #[must_use]
    pub fn effective_setup_fee(&self) -> f64 {
        if self.quantity > self.setup_fee_waiver_quantity {
            0.0
        } else {
            self.setup_fee
        }
    }

    /// Sets the profit margin, clamped to `[0, 100]`.
    pub fn set_profit_margin(&mut self, percent: f64) {
        self.profit_margin = clamp_margin(percent);
    }

    /// Sets the labor cost for one product type.
    ///
    /// # Errors
    ///
    /// Returns an error if `cost` is negative.
    pub fn set_labor_cost(&mut self, product_type: ProductType, cost: f64) -> Result<(), ConfigError> {
        check_non_negative("labor_cost", cost)?;
        self.labor_costs.insert(product_type, cost);
        Ok(())
    }

    /// Sets the order quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` is 0.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), ConfigError> {
        if quantity == 0 {
            return Err(ConfigError::InvalidQuantity);
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Sets the setup fee.
    ///
    /// # Errors
    ///
    /// Returns an error if `fee` is negative.
    pub fn set_setup_fee(&mut self, fee: f64) -> Result<(), ConfigError> {
        check_non_negative("setup_fee", fee)?;
        self.setup_fee = fee;
        Ok(())
    }
}

fn clamp_margin(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

fn check_non_negative(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}
