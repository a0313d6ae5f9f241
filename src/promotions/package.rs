//! Discount Packages
//!
//! A package is one group of cart items a discount may be applied to. Its meta data lists
//! which line items (and how many of each) belong to it; the matching cart items are
//! assigned later, once the package has been resolved against the cart.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::{collection::LineItemFlatCollection, line_item::LineItem},
    pricing::{TotalPriceError, total_price},
    promotions::quantity::LineItemQuantityCollection,
};

/// Errors raised while resolving packages against a cart.
#[derive(Debug, Error)]
pub enum PackageError {
    /// A package references a line item the cart does not contain.
    #[error("Line item {0} not found in cart")]
    LineItemNotFound(String),

    /// Wrapped price calculation error.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// One discountable grouping of line item quantities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountPackage<'a> {
    meta_data: LineItemQuantityCollection,
    cart_items: LineItemFlatCollection<'a>,
}

impl<'a> DiscountPackage<'a> {
    /// Create a package from its quantities. Cart items start out empty.
    #[must_use]
    pub fn new(meta_data: LineItemQuantityCollection) -> Self {
        Self {
            meta_data,
            cart_items: LineItemFlatCollection::new(),
        }
    }

    /// Line item quantities covered by this package.
    pub fn meta_data(&self) -> &LineItemQuantityCollection {
        &self.meta_data
    }

    /// Cart items assigned to this package.
    pub fn cart_items(&self) -> &LineItemFlatCollection<'a> {
        &self.cart_items
    }

    /// Replace the assigned cart items in one go.
    pub fn set_cart_items(&mut self, cart_items: LineItemFlatCollection<'a>) {
        self.cart_items = cart_items;
    }

    /// First assigned cart item with the given id.
    pub fn cart_item(&self, line_item_id: &str) -> Option<&LineItem<'a>> {
        self.cart_items.get(line_item_id)
    }

    /// Combined price of the assigned cart items. This is the weight used when a discount
    /// value is distributed over several packages.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::NoItems`] if no cart items have been assigned yet.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(self.cart_items.iter())
    }

    /// Whether the package covers nothing.
    pub fn is_empty(&self) -> bool {
        self.meta_data.is_empty()
    }
}

/// Ordered discount packages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountPackageCollection<'a> {
    packages: SmallVec<[DiscountPackage<'a>; 4]>,
}

impl<'a> DiscountPackageCollection<'a> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            packages: SmallVec::new(),
        }
    }

    /// Append a package.
    pub fn push(&mut self, package: DiscountPackage<'a>) {
        self.packages.push(package);
    }

    /// Package at a position.
    pub fn get(&self, index: usize) -> Option<&DiscountPackage<'a>> {
        self.packages.get(index)
    }

    /// First package.
    pub fn first(&self) -> Option<&DiscountPackage<'a>> {
        self.packages.first()
    }

    /// Iterate over the packages in order.
    pub fn iter(&self) -> impl Iterator<Item = &DiscountPackage<'a>> {
        self.packages.iter()
    }

    /// New collection holding the packages for which `keep` returns true.
    #[must_use]
    pub fn filter(&self, mut keep: impl FnMut(&DiscountPackage<'a>) -> bool) -> Self {
        self.packages
            .iter()
            .filter(|package| keep(package))
            .cloned()
            .collect()
    }

    /// Distinct line item ids across all packages, in first-seen order.
    pub fn all_line_item_ids(&self) -> SmallVec<[&str; 8]> {
        let mut ids: SmallVec<[&str; 8]> = SmallVec::new();

        for id in self
            .packages
            .iter()
            .flat_map(|package| package.meta_data().line_item_ids())
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        ids
    }

    /// Number of meta data entries across all packages.
    pub fn meta_data_count(&self) -> usize {
        self.packages
            .iter()
            .map(|package| package.meta_data().len())
            .sum()
    }

    /// Number of assigned cart items across all packages.
    pub fn cart_item_count(&self) -> usize {
        self.packages
            .iter()
            .map(|package| package.cart_items().len())
            .sum()
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether there are no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> FromIterator<DiscountPackage<'a>> for DiscountPackageCollection<'a> {
    fn from_iter<I: IntoIterator<Item = DiscountPackage<'a>>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for DiscountPackageCollection<'a> {
    type Item = DiscountPackage<'a>;
    type IntoIter = smallvec::IntoIter<[DiscountPackage<'a>; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s DiscountPackageCollection<'a> {
    type Item = &'s DiscountPackage<'a>;
    type IntoIter = std::slice::Iter<'s, DiscountPackage<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}
