//! Line Item Tag Rule

use serde::Deserialize;

use crate::{
    rules::{LineItemScope, Rule},
    tags::TagSet,
};

/// How the rule's tags are compared with the line item's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagMatch {
    /// Item must have all listed tags.
    HasAll,

    /// Item must have at least one listed tag.
    HasAny,

    /// Item must have none of the listed tags.
    HasNone,
}

/// Matches line items by their tags.
#[derive(Debug, Clone)]
pub struct LineItemTagRule {
    mode: TagMatch,
    tags: TagSet,
}

impl LineItemTagRule {
    /// Create a tag rule.
    #[must_use]
    pub fn new(mode: TagMatch, tags: TagSet) -> Self {
        Self { mode, tags }
    }

    /// Item must carry every tag.
    #[must_use]
    pub fn has_all(tags: TagSet) -> Self {
        Self::new(TagMatch::HasAll, tags)
    }

    /// Item must carry at least one tag.
    #[must_use]
    pub fn has_any(tags: TagSet) -> Self {
        Self::new(TagMatch::HasAny, tags)
    }

    /// Item must carry none of the tags.
    #[must_use]
    pub fn has_none(tags: TagSet) -> Self {
        Self::new(TagMatch::HasNone, tags)
    }
}

impl Rule for LineItemTagRule {
    fn name(&self) -> &'static str {
        "line_item_tags"
    }

    fn matches(&self, scope: &LineItemScope<'_, '_>) -> bool {
        let item_tags = scope.line_item().tags();

        match self.mode {
            TagMatch::HasAll => item_tags.contains_all(&self.tags),
            TagMatch::HasAny => !self.tags.is_empty() && item_tags.intersects(&self.tags),
            TagMatch::HasNone => !item_tags.intersects(&self.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{cart::line_item::LineItem, context::PricingContext};

    use super::*;

    fn check(mode: TagMatch, tags: &[&str], scope: &LineItemScope<'_, '_>) -> bool {
        let rule = LineItemTagRule::new(mode, TagSet::from_strs(tags));

        rule.matches(scope)
    }

    #[test]
    fn modes_compare_item_tags() -> TestResult {
        let context = PricingContext::new(GBP);
        let item = LineItem::product("A", 1, Money::from_minor(100, GBP))?
            .with_tags(TagSet::from_strs(&["fruit", "organic"]));
        let scope = LineItemScope::new(&item, &context);

        assert!(check(TagMatch::HasAll, &["fruit", "organic"], &scope));
        assert!(!check(TagMatch::HasAll, &["fruit", "frozen"], &scope));
        assert!(check(TagMatch::HasAny, &["frozen", "fruit"], &scope));
        assert!(!check(TagMatch::HasAny, &["frozen"], &scope));
        assert!(check(TagMatch::HasNone, &["frozen"], &scope));
        assert!(!check(TagMatch::HasNone, &["organic"], &scope));

        Ok(())
    }

    #[test]
    fn empty_tags_edge_cases() -> TestResult {
        let context = PricingContext::new(GBP);
        let item = LineItem::product("A", 1, Money::from_minor(100, GBP))?;
        let scope = LineItemScope::new(&item, &context);

        assert!(LineItemTagRule::has_all(TagSet::empty()).matches(&scope));
        assert!(!LineItemTagRule::has_any(TagSet::empty()).matches(&scope));
        assert!(LineItemTagRule::has_none(TagSet::empty()).matches(&scope));

        Ok(())
    }
}
