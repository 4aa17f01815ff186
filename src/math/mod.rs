pub mod units;
pub mod vector_2d;

pub use units::{Unit, MM_PER_INCH, PIXELS_PER_MM};

/// 2D point type (canvas space, pixels).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Angles at or below this value (or at or above `180 - ANGLE_EPSILON_DEGREES`)
/// are not treated as real bends.
pub const ANGLE_EPSILON_DEGREES: f64 = 0.001;

/// Slack allowed when comparing a required width against catalog widths.
pub const WIDTH_TOLERANCE_INCHES: f64 = 1e-6;
