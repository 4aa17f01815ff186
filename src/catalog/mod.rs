pub mod material;
pub mod pricing_config;

pub use material::{Material, MaterialKind, MAX_THICKNESS_INCHES};
pub use pricing_config::{PricingConfig, ProductType, DEFAULT_LABOR_COST, SETUP_FEE_WAIVER_QUANTITY};

use crate::error::ConfigError;

/// Validated collection of materials, looked up by ID.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// Builds a catalog, validating every material.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn new(materials: Vec<Material>) -> Result<Self, ConfigError> {
        for material in &materials {
            material.validate()?;
        }
        Ok(Self { materials })
    }

    /// Parses a JSON array of materials and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or invalid material data.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The stock materials shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            materials: builtin_materials(),
        }
    }

    /// Looks up a material by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Iterates over all materials.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Applies a validated edit to one material. The material is left
    /// unchanged when `edit` fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is unknown or the edit is rejected.
    pub fn update<F>(&mut self, id: &str, edit: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Material) -> Result<(), ConfigError>,
    {
        let material = self
            .materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ConfigError::UnknownMaterial(id.to_owned()))?;
        let mut edited = material.clone();
        edit(&mut edited)?;
        edited.validate()?;
        *material = edited;
        Ok(())
    }
}

fn builtin_materials() -> Vec<Material> {
    let copper_36 = Material {
        id: "copper-16oz".into(),
        name: "16 oz Copper (36\"x120\")".into(),
        kind: MaterialKind::Copper,
        gauge: "16 oz".into(),
        finish: None,
        thickness_inches: 0.0216,
        k_factor: 0.40,
        sheet_price: 242.0,
        sheet_width: 36.0,
        sheet_length: 120.0,
        allowed_widths: vec![3.0, 4.0, 6.0, 9.0, 12.0, 18.0, 36.0],
    };
    let copper_24 = Material {
        id: "copper-16oz-24x120".into(),
        name: "16 oz Copper (24\"x120\")".into(),
        sheet_price: 163.0,
        sheet_width: 24.0,
        allowed_widths: vec![3.0, 4.0, 6.0, 8.0, 12.0, 24.0],
        ..copper_36.clone()
    };
    let steel = Material {
        id: "steel-24ga-kynar".into(),
        name: "24 Ga Kynar Steel".into(),
        kind: MaterialKind::Steel,
        gauge: "24 Ga".into(),
        finish: Some("Kynar".into()),
        thickness_inches: 0.0276,
        k_factor: 0.44,
        sheet_price: 90.0,
        sheet_width: 48.0,
        sheet_length: 120.0,
        allowed_widths: vec![3.0, 4.0, 6.0, 9.6, 12.0, 16.0, 24.0, 48.0],
    };
    let aluminum = Material {
        id: "aluminum-032-kynar".into(),
        name: "0.032\" Kynar Aluminum".into(),
        kind: MaterialKind::Aluminum,
        gauge: "0.032\"".into(),
        thickness_inches: 0.032,
        k_factor: 0.33,
        sheet_price: 126.5,
        ..steel.clone()
    };
    vec![copper_36, copper_24, steel, aluminum]
}
