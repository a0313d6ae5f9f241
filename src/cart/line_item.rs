//! Line Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    cart::{CartError, collection::LineItemCollection},
    tags::TagSet,
};

/// Kind of entry held in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    /// A purchasable product.
    Product,

    /// A promotion discount line.
    Promotion,

    /// A manual credit.
    Credit,

    /// A custom line added by an integration.
    Custom,

    /// A grouping item whose children are the real entries.
    Container,
}

/// A single cart entry, possibly with nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    id: String,
    referenced_id: Option<String>,
    label: String,
    kind: LineItemType,
    quantity: NonZeroU32,
    stackable: bool,
    price: Money<'a, Currency>,
    tags: TagSet,
    children: LineItemCollection<'a>,
}

impl<'a> LineItem<'a> {
    /// Create a line item. New items are not stackable and carry no tags or children.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero.
    pub fn new(
        id: impl Into<String>,
        kind: LineItemType,
        quantity: u32,
        price: Money<'a, Currency>,
    ) -> Result<Self, CartError> {
        let id = id.into();
        let quantity = NonZeroU32::new(quantity).ok_or_else(|| CartError::InvalidQuantity {
            id: id.clone(),
            quantity,
        })?;

        Ok(Self {
            label: id.clone(),
            id,
            referenced_id: None,
            kind,
            quantity,
            stackable: false,
            price,
            tags: TagSet::empty(),
            children: LineItemCollection::new(),
        })
    }

    /// Create a stackable product line item referencing a product with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero.
    pub fn product(
        id: impl Into<String>,
        quantity: u32,
        price: Money<'a, Currency>,
    ) -> Result<Self, CartError> {
        let id = id.into();

        Ok(Self::new(id.clone(), LineItemType::Product, quantity, price)?
            .with_referenced_id(id)
            .with_stackable(true))
    }

    /// Set the referenced entity id (for products, the product id).
    #[must_use]
    pub fn with_referenced_id(mut self, referenced_id: impl Into<String>) -> Self {
        self.referenced_id = Some(referenced_id.into());
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set whether the quantity of this item may be changed.
    #[must_use]
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Set the nested children.
    #[must_use]
    pub fn with_children(mut self, children: LineItemCollection<'a>) -> Self {
        self.children = children;
        self
    }

    /// Copy of this item carrying a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: NonZeroU32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Line item id, unique within the cart tree.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Referenced entity id, if any.
    pub fn referenced_id(&self) -> Option<&str> {
        self.referenced_id.as_deref()
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Line item type.
    pub fn kind(&self) -> LineItemType {
        self.kind
    }

    /// Quantity in the cart.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Whether the item's quantity may be changed.
    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Unit price.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Nested children.
    pub fn children(&self) -> &LineItemCollection<'a> {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn zero_quantity_is_rejected() {
        let price = Money::from_minor(100, GBP);
        let result = LineItem::new("A", LineItemType::Product, 0, price);

        assert!(matches!(
            result,
            Err(CartError::InvalidQuantity { ref id, quantity: 0 }) if id == "A"
        ));
    }

    #[test]
    fn product_is_stackable_and_references_itself() -> TestResult {
        let item = LineItem::product("A", 3, Money::from_minor(100, GBP))?;

        assert_eq!(item.kind(), LineItemType::Product);
        assert!(item.is_stackable());
        assert_eq!(item.referenced_id(), Some("A"));
        assert_eq!(item.quantity().get(), 3);
        assert_eq!(item.label(), "A");

        Ok(())
    }

    #[test]
    fn new_items_are_not_stackable() -> TestResult {
        let item = LineItem::new("ship", LineItemType::Custom, 1, Money::from_minor(0, GBP))?;

        assert!(!item.is_stackable());
        assert_eq!(item.referenced_id(), None);

        Ok(())
    }

    #[test]
    fn with_quantity_keeps_everything_else() -> TestResult {
        let item = LineItem::product("A", 4, Money::from_minor(250, GBP))?
            .with_label("Apples")
            .with_tags(TagSet::from_strs(&["fruit"]));

        let single = item.with_quantity(NonZeroU32::MIN);

        assert_eq!(single.quantity().get(), 1);
        assert_eq!(single.id(), "A");
        assert_eq!(single.label(), "Apples");
        assert_eq!(single.price(), item.price());
        assert!(single.tags().contains("fruit"));

        Ok(())
    }
}
