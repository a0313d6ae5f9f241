//! Promotions
//!
//! Discount packaging: deciding which cart items a discount covers and in what units.

pub mod discount;
pub mod enrichment;
pub mod filters;
pub mod package;
pub mod packager;
pub mod pipeline;
pub mod quantity;
