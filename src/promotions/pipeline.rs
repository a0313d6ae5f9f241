//! Packaging Pipeline

use tracing::info;

use crate::{
    cart::Cart,
    config::PackagingConfig,
    context::PricingContext,
    promotions::{
        discount::DiscountLineItem,
        enrichment::enrich_packages,
        filters::{AdvancedPackageRules, PackageFilter},
        package::{DiscountPackageCollection, PackageError},
        packager::{CartScopeDiscountPackager, DiscountPackager},
    },
};

/// Build the final packages for a cart-scoped discount: package the eligible items, resolve
/// them against the cart, then apply the discount's rule to the resolved cart items.
///
/// # Errors
///
/// Returns a [`PackageError`] if a package cannot be resolved against the cart.
#[tracing::instrument(
    name = "promotions.package_discount",
    skip_all,
    fields(discount = discount.id(), cart = cart.token()),
    err
)]
pub fn package_discount<'a>(
    discount: &DiscountLineItem,
    cart: &Cart<'a>,
    context: &PricingContext,
    config: PackagingConfig,
) -> Result<DiscountPackageCollection<'a>, PackageError> {
    let packager = CartScopeDiscountPackager::new(config);

    let packages = packager.matching_items(discount, cart, context);
    let packages = enrich_packages(packages, cart)?;
    let packages = AdvancedPackageRules.filter(discount, packages, context);

    info!(
        packages = packages.len(),
        cart_items = packages.cart_item_count(),
        "packaged discount"
    );

    Ok(packages)
}
