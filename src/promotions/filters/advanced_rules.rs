//! Advanced Package Rules
//!
//! Restricts each package to the cart items that match the discount's filter rule.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{
    cart::{collection::LineItemFlatCollection, line_item::LineItem},
    context::PricingContext,
    promotions::{
        discount::DiscountLineItem,
        filters::PackageFilter,
        package::{DiscountPackage, DiscountPackageCollection},
    },
    rules::{LineItemScope, Rule},
};

/// Drops the cart items of each package that fail the discount's filter rule, and drops
/// packages left with nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedPackageRules;

impl AdvancedPackageRules {
    fn filter_package<'a>(
        package: &DiscountPackage<'a>,
        rule: &dyn Rule,
        context: &PricingContext,
    ) -> Option<DiscountPackage<'a>> {
        let cart_items: LineItemFlatCollection<'a> = package
            .cart_items()
            .iter()
            .filter(|item| {
                let matched = rule.matches(&LineItemScope::new(item, context));

                trace!(
                    line_item = item.id(),
                    rule = rule.name(),
                    matched,
                    "evaluated package rule"
                );

                matched
            })
            .cloned()
            .collect();

        if cart_items.is_empty() {
            return None;
        }

        let matched_ids: FxHashSet<&str> = cart_items.iter().map(LineItem::id).collect();

        let mut meta_data = package.meta_data().clone();
        meta_data.retain(|entry| matched_ids.contains(entry.line_item_id()));

        let mut filtered = DiscountPackage::new(meta_data);
        filtered.set_cart_items(cart_items);

        Some(filtered)
    }
}

impl PackageFilter for AdvancedPackageRules {
    fn filter<'a>(
        &self,
        discount: &DiscountLineItem,
        packages: DiscountPackageCollection<'a>,
        context: &PricingContext,
    ) -> DiscountPackageCollection<'a> {
        let Some(rule) = discount.price_definition().filter() else {
            return packages;
        };

        let filtered: DiscountPackageCollection<'a> = packages
            .iter()
            .filter_map(|package| Self::filter_package(package, &**rule, context))
            .collect();

        debug!(
            discount = discount.id(),
            packages_in = packages.len(),
            packages_out = filtered.len(),
            cart_items_in = packages.cart_item_count(),
            cart_items_out = filtered.cart_item_count(),
            "applied advanced package rules"
        );

        filtered
    }
}
