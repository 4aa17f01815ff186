mod calculate_price;
mod format;
mod select_width;

pub use calculate_price::{CalculatePrice, PriceCalculation, STRIP_LENGTH_FEET};
pub use format::{format_price, Currency};
pub use select_width::{SelectWidth, WidthSelection};
