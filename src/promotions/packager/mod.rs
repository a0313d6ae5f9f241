//! Discount Packagers
//!
//! A packager decides which cart items a discount can be applied to and groups them into
//! packages.

use crate::{
    cart::Cart,
    context::PricingContext,
    promotions::{discount::DiscountLineItem, package::DiscountPackageCollection},
};

pub mod cart_scope;

pub use cart_scope::CartScopeDiscountPackager;

/// How the discount value is spread over the packages a packager returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagerResultContext {
    /// The value applies across all line items of all packages.
    LineItem,

    /// The value applies to each package on its own.
    Package,
}

/// Builds discount packages for one discount scope.
pub trait DiscountPackager {
    /// How the returned packages are to be priced.
    fn result_context(&self) -> PackagerResultContext;

    /// Group the cart items the discount may apply to.
    fn matching_items<'a>(
        &self,
        discount: &DiscountLineItem,
        cart: &Cart<'a>,
        context: &PricingContext,
    ) -> DiscountPackageCollection<'a>;
}
