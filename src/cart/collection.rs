//! Line Item Collections

use std::iter;

use rustc_hash::FxHashSet;

use crate::cart::{
    CartError,
    line_item::{LineItem, LineItemType},
};

/// Ordered line items whose ids are unique across the whole tree, nested children included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemCollection<'a> {
    items: Vec<LineItem<'a>>,
}

impl<'a> LineItemCollection<'a> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a collection from items, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateLineItem`] if two items anywhere in the tree share an id.
    pub fn with_items(items: impl IntoIterator<Item = LineItem<'a>>) -> Result<Self, CartError> {
        let mut collection = Self::new();

        for item in items {
            collection.add(item)?;
        }

        Ok(collection)
    }

    /// Append an item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateLineItem`] if the item, or one of its nested children,
    /// repeats an id already present anywhere in the tree.
    pub fn add(&mut self, item: LineItem<'a>) -> Result<(), CartError> {
        self.check_unique_ids(&item)?;

        self.items.push(item);

        Ok(())
    }

    fn check_unique_ids(&self, item: &LineItem<'a>) -> Result<(), CartError> {
        let mut seen: FxHashSet<&str> = self.flat().into_iter().map(LineItem::id).collect();

        for incoming in iter::once(item).chain(item.children().flat()) {
            if !seen.insert(incoming.id()) {
                return Err(CartError::DuplicateLineItem(incoming.id().to_string()));
            }
        }

        Ok(())
    }

    /// Find a direct child by id.
    pub fn get(&self, id: &str) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Iterate over the direct children.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Every line item in the tree, depth first with parents before their children.
    pub fn flat(&self) -> Vec<&LineItem<'a>> {
        let mut flat = Vec::with_capacity(self.items.len());

        collect_flat(&self.items, &mut flat);

        flat
    }

    /// Every line item in the tree with the given type.
    pub fn filter_flat_by_type(&self, kind: LineItemType) -> Vec<&LineItem<'a>> {
        let mut flat = self.flat();

        flat.retain(|item| item.kind() == kind);

        flat
    }

    /// Find a line item anywhere in the tree by id.
    pub fn find_flat(&self, id: &str) -> Option<&LineItem<'a>> {
        self.flat().into_iter().find(|item| item.id() == id)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no direct children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn collect_flat<'s, 'a>(items: &'s [LineItem<'a>], out: &mut Vec<&'s LineItem<'a>>) {
    for item in items {
        out.push(item);
        collect_flat(&item.children().items, out);
    }
}

/// Owned, ordered line items that may repeat the same id, e.g. one entry per unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemFlatCollection<'a> {
    items: Vec<LineItem<'a>>,
}

impl<'a> LineItemFlatCollection<'a> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// First item with the given id.
    pub fn get(&self, id: &str) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Iterate over the items.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Items as a slice.
    pub fn as_slice(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> From<Vec<LineItem<'a>>> for LineItemFlatCollection<'a> {
    fn from(items: Vec<LineItem<'a>>) -> Self {
        Self { items }
    }
}

impl<'a> FromIterator<LineItem<'a>> for LineItemFlatCollection<'a> {
    fn from_iter<I: IntoIterator<Item = LineItem<'a>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
