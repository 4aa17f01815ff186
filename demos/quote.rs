//! Prices a right-angle bracket drawn in millimeters.
//!
//! Usage:
//! ```text
//! cargo run --example quote                       # 24 Ga Kynar steel
//! cargo run --example quote -- copper-16oz        # any built-in material id
//! RUST_LOG=flashform=debug cargo run --example quote
//! ```

use flashform::catalog::{MaterialCatalog, PricingConfig, ProductType};
use flashform::math::units::to_pixels;
use flashform::math::{Point2, Unit};
use flashform::operations::pricing::{format_price, CalculatePrice, Currency};
use flashform::operations::report::BuildProductionSheet;
use flashform::profile::ProfileGraph;
use flashform::{ConfigError, FlashformError};

fn main() -> Result<(), FlashformError> {
    // Default: WARN for everything, INFO for flashform.
    // Override with RUST_LOG env var (e.g. RUST_LOG=flashform=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flashform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let material_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "steel-24ga-kynar".to_owned());
    let catalog = MaterialCatalog::builtin();
    let material = catalog
        .get(&material_id)
        .ok_or(ConfigError::UnknownMaterial(material_id.clone()))?;

    let mut graph = ProfileGraph::new();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 50.0)] {
        let px = Point2::new(to_pixels(x, Unit::Millimeter), to_pixels(y, Unit::Millimeter));
        graph.append_point(px)?;
    }

    let sheet = BuildProductionSheet::new(Unit::Millimeter)
        .with_material(Some(material))
        .execute(&graph);
    println!("{}", sheet.material.as_deref().unwrap_or("-"));
    for row in &sheet.segments {
        println!(
            "  {:>3}  {:8.2} {}  {:7.1}°",
            row.label,
            row.length,
            sheet.unit.label(),
            row.direction_degrees
        );
    }
    for bend in &sheet.bends {
        println!(
            "  bend {:6.1}°  allowance {:.3} {}",
            bend.angle_degrees,
            bend.allowance,
            sheet.unit.label()
        );
    }
    println!(
        "  developed {:.2} {} (flat {:.2})",
        sheet.lengths.developed_length(),
        sheet.unit.label(),
        sheet.lengths.flat_length
    );

    let config = PricingConfig::default();
    let calc = CalculatePrice::new(Some(material), ProductType::Valley, &config).execute(&graph);
    if calc.is_width_exceeded {
        println!(
            "cannot manufacture: needs {:.2}\" but max strip is {:.2}\"",
            calc.required_width, calc.max_allowed_width
        );
        return Ok(());
    }
    println!(
        "strip {:.2}\" of {:.2}\" required, {:.0}% of sheet",
        calc.charged_width,
        calc.required_width,
        calc.sheet_fraction * 100.0
    );
    println!("  material  {}", format_price(calc.material_cost, Currency::Usd));
    println!("  labor     {}", format_price(calc.labor_cost, Currency::Usd));
    println!("  setup     {}", format_price(calc.setup_fee, Currency::Usd));
    println!("  margin    {}", format_price(calc.profit_amount, Currency::Usd));
    println!("  total     {}", format_price(calc.total_cost, Currency::Usd));
    Ok(())
}
