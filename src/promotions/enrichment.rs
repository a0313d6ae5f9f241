//! Package Enrichment
//!
//! Resolves the meta data of each package against the cart, so later steps can evaluate rules
//! and prices on real line items.

use tracing::debug;

use crate::{
    cart::Cart,
    promotions::package::{DiscountPackageCollection, PackageError},
};

/// Assign cart items to every package, one per meta data entry, carrying the entry's quantity.
///
/// # Errors
///
/// Returns [`PackageError::LineItemNotFound`] if an entry references a line item that is not
/// in the cart.
pub fn enrich_packages<'a>(
    packages: DiscountPackageCollection<'a>,
    cart: &Cart<'a>,
) -> Result<DiscountPackageCollection<'a>, PackageError> {
    let flat = cart.line_items().flat();

    packages
        .into_iter()
        .map(|mut package| -> Result<_, PackageError> {
            let cart_items = package
                .meta_data()
                .iter()
                .map(|entry| {
                    flat.iter()
                        .find(|item| item.id() == entry.line_item_id())
                        .map(|item| item.with_quantity(entry.quantity()))
                        .ok_or_else(|| {
                            PackageError::LineItemNotFound(entry.line_item_id().to_string())
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            debug!(cart_items = cart_items.len(), "enriched discount package");

            package.set_cart_items(cart_items.into());

            Ok(package)
        })
        .collect()
}
