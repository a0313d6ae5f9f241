//! Line Item Quantities
//!
//! The unit of discountable work: a line item id paired with how many of it a package covers.

use std::num::NonZeroU32;

use smallvec::SmallVec;

/// A line item id with a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemQuantity {
    line_item_id: String,
    quantity: NonZeroU32,
}

impl LineItemQuantity {
    /// Create a new entry.
    pub fn new(line_item_id: impl Into<String>, quantity: NonZeroU32) -> Self {
        Self {
            line_item_id: line_item_id.into(),
            quantity,
        }
    }

    /// Create an entry covering a single unit.
    pub fn single(line_item_id: impl Into<String>) -> Self {
        Self::new(line_item_id, NonZeroU32::MIN)
    }

    /// Id of the referenced line item.
    pub fn line_item_id(&self) -> &str {
        &self.line_item_id
    }

    /// Quantity covered.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

/// Ordered quantities. The same line item id may appear several times, once per unit
/// when a package is expanded per unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemQuantityCollection {
    entries: Vec<LineItemQuantity>,
}

impl LineItemQuantityCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entry at a position.
    pub fn get(&self, index: usize) -> Option<&LineItemQuantity> {
        self.entries.get(index)
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItemQuantity> {
        self.entries.iter()
    }

    /// Entries referencing a line item.
    pub fn for_line_item<'s>(
        &'s self,
        line_item_id: &'s str,
    ) -> impl Iterator<Item = &'s LineItemQuantity> {
        self.entries
            .iter()
            .filter(move |entry| entry.line_item_id() == line_item_id)
    }

    /// Whether any entry references the line item.
    pub fn has(&self, line_item_id: &str) -> bool {
        self.for_line_item(line_item_id).next().is_some()
    }

    /// Distinct line item ids in first-seen order.
    pub fn line_item_ids(&self) -> SmallVec<[&str; 8]> {
        let mut ids: SmallVec<[&str; 8]> = SmallVec::new();

        for entry in &self.entries {
            if !ids.contains(&entry.line_item_id()) {
                ids.push(entry.line_item_id());
            }
        }

        ids
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity().get()))
            .sum()
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&LineItemQuantity) -> bool) {
        self.entries.retain(keep);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LineItemQuantity>> for LineItemQuantityCollection {
    fn from(entries: Vec<LineItemQuantity>) -> Self {
        Self { entries }
    }
}

impl FromIterator<LineItemQuantity> for LineItemQuantityCollection {
    fn from_iter<I: IntoIterator<Item = LineItemQuantity>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'s> IntoIterator for &'s LineItemQuantityCollection {
    type Item = &'s LineItemQuantity;
    type IntoIter = std::slice::Iter<'s, LineItemQuantity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
