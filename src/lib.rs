//! Discount Packager
//!
//! Groups cart line items into discount packages, filters them with line item rules, and
//! expands them per unit for product-restricted promotions.

pub mod cart;
pub mod config;
pub mod context;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod report;
pub mod rules;
pub mod tags;
