//! Cart Scope Packager
//!
//! Packages every eligible item of the cart into at most one package.

use std::iter;

use tracing::{debug, trace};

use crate::{
    cart::{
        Cart,
        line_item::{LineItem, LineItemType},
    },
    config::PackagingConfig,
    context::PricingContext,
    promotions::{
        discount::DiscountLineItem,
        package::{DiscountPackage, DiscountPackageCollection},
        packager::{DiscountPackager, PackagerResultContext},
        quantity::{LineItemQuantity, LineItemQuantityCollection},
    },
    rules::LineItemScope,
};

/// Packager for discounts scoped to the whole cart.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartScopeDiscountPackager {
    config: PackagingConfig,
}

impl CartScopeDiscountPackager {
    /// Create a packager.
    #[must_use]
    pub fn new(config: PackagingConfig) -> Self {
        Self { config }
    }

    /// Build a single package from already-filtered line items.
    ///
    /// In advanced mode every unit becomes its own entry of quantity one; otherwise each line
    /// item contributes one entry with its full quantity. With performance tweaks off the
    /// advanced mode is always used. Returns `None` when there is nothing to package.
    pub fn discount_package<'a>(
        &self,
        line_items: &[&LineItem<'a>],
        is_advanced_ruled: bool,
    ) -> Option<DiscountPackage<'a>> {
        let is_advanced_ruled = is_advanced_ruled || !self.config.performance_tweaks;

        let entries: Vec<LineItemQuantity> = if is_advanced_ruled {
            line_items
                .iter()
                .flat_map(|item| {
                    let unit = LineItemQuantity::single(item.id());
                    let units = usize::try_from(item.quantity().get()).unwrap_or(usize::MAX);

                    iter::repeat_n(unit, units)
                })
                .collect()
        } else {
            line_items
                .iter()
                .map(|item| LineItemQuantity::new(item.id(), item.quantity()))
                .collect()
        };

        if entries.is_empty() {
            return None;
        }

        Some(DiscountPackage::new(LineItemQuantityCollection::from(
            entries,
        )))
    }
}

impl DiscountPackager for CartScopeDiscountPackager {
    fn result_context(&self) -> PackagerResultContext {
        PackagerResultContext::LineItem
    }

    fn matching_items<'a>(
        &self,
        discount: &DiscountLineItem,
        cart: &Cart<'a>,
        context: &PricingContext,
    ) -> DiscountPackageCollection<'a> {
        let mut eligible = cart.line_items().filter_flat_by_type(LineItemType::Product);

        eligible.retain(|item| item.is_stackable());

        if let Some(rule) = discount.price_definition().filter() {
            eligible.retain(|item| {
                let matched = rule.matches(&LineItemScope::new(item, context));

                trace!(
                    discount = discount.id(),
                    line_item = item.id(),
                    rule = rule.name(),
                    matched,
                    "evaluated discount filter"
                );

                matched
            });
        }

        let package = self.discount_package(&eligible, discount.is_product_restricted());

        debug!(
            discount = discount.id(),
            eligible = eligible.len(),
            entries = package
                .as_ref()
                .map_or(0, |package| package.meta_data().len()),
            "packaged cart scope discount"
        );

        package.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use super::*;

    fn tweaked() -> CartScopeDiscountPackager {
        CartScopeDiscountPackager::new(PackagingConfig::with_performance_tweaks())
    }

    #[test]
    fn per_line_entries_keep_quantity() -> TestResult {
        let item = LineItem::product("A", 4, Money::from_minor(100, GBP))?;

        let package = tweaked().discount_package(&[&item], false);
        let entries: Vec<(&str, u32)> = package
            .as_ref()
            .map(|package| {
                package
                    .meta_data()
                    .iter()
                    .map(|entry| (entry.line_item_id(), entry.quantity().get()))
                    .collect()
            })
            .unwrap_or_default();

        assert_eq!(entries, vec![("A", 4)]);

        Ok(())
    }

    #[test]
    fn advanced_entries_are_per_unit() -> TestResult {
        let item = LineItem::product("A", 4, Money::from_minor(100, GBP))?;

        let package = tweaked().discount_package(&[&item], true);
        let entries: Vec<(&str, u32)> = package
            .as_ref()
            .map(|package| {
                package
                    .meta_data()
                    .iter()
                    .map(|entry| (entry.line_item_id(), entry.quantity().get()))
                    .collect()
            })
            .unwrap_or_default();

        assert_eq!(entries, vec![("A", 1); 4]);

        Ok(())
    }

    #[test]
    fn legacy_mode_forces_per_unit() -> TestResult {
        let item = LineItem::product("A", 3, Money::from_minor(100, GBP))?;
        let packager = CartScopeDiscountPackager::new(PackagingConfig::default());

        let package = packager.discount_package(&[&item], false);

        assert_eq!(package.map(|package| package.meta_data().len()), Some(3));

        Ok(())
    }

    #[test]
    fn no_items_no_package() {
        assert!(tweaked().discount_package(&[], true).is_none());
        assert!(tweaked().discount_package(&[], false).is_none());
    }

    #[test]
    fn result_context_is_line_item() {
        let packager = tweaked();

        assert_eq!(packager.result_context(), PackagerResultContext::LineItem);
    }
}
