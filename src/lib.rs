//! Bend-allowance and pricing engine for sheet-metal flashing profiles.
//!
//! A profile is a graph of canvas points joined by segments
//! ([`profile::ProfileGraph`]). The operations in [`operations`] turn it into
//! bends, a developed (flat-pattern) length, a stock strip width and a price.

pub mod catalog;
pub mod error;
pub mod math;
pub mod operations;
pub mod profile;

pub use error::{ConfigError, FlashformError, GraphError, Result};
