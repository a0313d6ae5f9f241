//! Package Filters

use crate::{
    context::PricingContext,
    promotions::{discount::DiscountLineItem, package::DiscountPackageCollection},
};

pub mod advanced_rules;

pub use advanced_rules::AdvancedPackageRules;

/// Narrows packages that have already been built for a discount.
pub trait PackageFilter {
    /// Filter the packages. Implementations never add items.
    fn filter<'a>(
        &self,
        discount: &DiscountLineItem,
        packages: DiscountPackageCollection<'a>,
        context: &PricingContext,
    ) -> DiscountPackageCollection<'a>;
}
