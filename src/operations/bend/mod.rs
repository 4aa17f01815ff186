mod allowance;
mod detect;

pub use allowance::{BendAllowance, BendDimensions};
pub use detect::{Bend, DetectBends};
