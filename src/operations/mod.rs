pub mod bend;
pub mod edit;
pub mod length;
pub mod pricing;
pub mod report;
