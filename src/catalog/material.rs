use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted material thickness, in inches.
pub const MAX_THICKNESS_INCHES: f64 = 0.25;

/// Base metal of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Copper,
    Steel,
    Aluminum,
    Stainless,
}

/// Sheet stock that profiles are formed from.
///
/// All lengths are in inches. Construct through [`Material::validated`] (or
/// load through a catalog) so the bend and width calculations can assume
/// sane values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// Trade designation of the gauge, e.g. `24 Ga` or `16 oz`.
    #[serde(default)]
    pub gauge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    pub thickness_inches: f64,
    pub k_factor: f64,
    /// Price of one full sheet.
    pub sheet_price: f64,
    pub sheet_width: f64,
    pub sheet_length: f64,
    /// Stockable strip widths.
    pub allowed_widths: Vec<f64>,
}

impl Material {
    /// Validates the material, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns an error if thickness, K-factor, price, sheet size or any
    /// allowed width is out of range, or if no allowed widths are given.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Checks every range constraint on the material.
    ///
    /// # Errors
    ///
    /// See [`Material::validated`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_thickness(self.thickness_inches)?;
        check_k_factor(self.k_factor)?;
        check_positive("sheet_price", self.sheet_price)?;
        check_positive("sheet_width", self.sheet_width)?;
        check_positive("sheet_length", self.sheet_length)?;
        if self.allowed_widths.is_empty() {
            return Err(ConfigError::EmptyAllowedWidths(self.id.clone()));
        }
        for &width in &self.allowed_widths {
            check_positive("allowed_width", width)?;
        }
        Ok(())
    }

    /// Widest strip that can be produced: `min(sheet_width, max(allowed_widths))`.
    #[must_use]
    pub fn max_allowed_width(&self) -> f64 {
        let widest = self
            .allowed_widths
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if widest.is_finite() {
            self.sheet_width.min(widest)
        } else {
            self.sheet_width
        }
    }

    /// Updates the sheet price.
    ///
    /// # Errors
    ///
    /// Returns an error if `price` is not positive.
    pub fn set_sheet_price(&mut self, price: f64) -> Result<(), ConfigError> {
        check_positive("sheet_price", price)?;
        self.sheet_price = price;
        Ok(())
    }

    /// Updates the thickness.
    ///
    /// # Errors
    ///
    /// Returns an error if `inches` is outside `(0, 0.25]`.
    pub fn set_thickness(&mut self, inches: f64) -> Result<(), ConfigError> {
        check_thickness(inches)?;
        self.thickness_inches = inches;
        Ok(())
    }

    /// Updates the K-factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is outside `(0, 1)`.
    pub fn set_k_factor(&mut self, k: f64) -> Result<(), ConfigError> {
        check_k_factor(k)?;
        self.k_factor = k;
        Ok(())
    }

    /// Human-readable summary, e.g. `24 Ga Kynar Steel (0.0276")`.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} ({}\")", self.name, self.thickness_inches)
    }
}

fn check_thickness(value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= MAX_THICKNESS_INCHES {
        Ok(())
    } else {
        Err(ConfigError::ParameterOutOfRange {
            parameter: "thickness_inches",
            value,
            min: 0.0,
            max: MAX_THICKNESS_INCHES,
        })
    }
}

fn check_k_factor(value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ParameterOutOfRange {
            parameter: "k_factor",
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}
