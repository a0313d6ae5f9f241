//! Rules
//!
//! Boolean predicates over a line item and its pricing context. The packaging code only
//! relies on the [`Rule`] trait; the implementations here cover the common line item checks.

use std::{fmt, sync::Arc};

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{cart::line_item::LineItem, context::PricingContext};

pub mod line_item;
pub mod tags;

/// Rule shared between discounts and calculation passes.
pub type SharedRule = Arc<dyn Rule>;

/// What a rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct LineItemScope<'s, 'a> {
    line_item: &'s LineItem<'a>,
    context: &'s PricingContext,
}

impl<'s, 'a> LineItemScope<'s, 'a> {
    /// Create a scope for a line item.
    pub fn new(line_item: &'s LineItem<'a>, context: &'s PricingContext) -> Self {
        Self { line_item, context }
    }

    /// Line item under evaluation.
    pub fn line_item(&self) -> &'s LineItem<'a> {
        self.line_item
    }

    /// Pricing context of the calculation.
    pub fn context(&self) -> &'s PricingContext {
        self.context
    }
}

/// A boolean condition over a line item scope.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Rule name, used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate the rule.
    fn matches(&self, scope: &LineItemScope<'_, '_>) -> bool;
}

/// Wrap a rule implementation for sharing.
pub fn rule<R>(rule: R) -> SharedRule
where
    R: Rule + 'static,
{
    Arc::new(rule)
}

/// Comparison used by identifier rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Value is in the list.
    Equals,

    /// Value is not in the list.
    NotEquals,
}

/// Boolean operation used to combine rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolOp {
    /// All child rules must match.
    And,

    /// At least one child rule must match.
    Or,
}

/// Nested group of rules. An empty group matches everything.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    op: BoolOp,
    rules: SmallVec<[SharedRule; 2]>,
}

impl RuleGroup {
    /// Create a group from an operator and child rules.
    #[must_use]
    pub fn new(op: BoolOp, rules: SmallVec<[SharedRule; 2]>) -> Self {
        Self { op, rules }
    }
}

impl Rule for RuleGroup {
    fn name(&self) -> &'static str {
        "group"
    }

    fn matches(&self, scope: &LineItemScope<'_, '_>) -> bool {
        if self.rules.is_empty() {
            return true;
        }

        match self.op {
            BoolOp::And => self.rules.iter().all(|rule| rule.matches(scope)),
            BoolOp::Or => self.rules.iter().any(|rule| rule.matches(scope)),
        }
    }
}

/// Matches every line item.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValidRule;

impl Rule for AlwaysValidRule {
    fn name(&self) -> &'static str {
        "always_valid"
    }

    fn matches(&self, _scope: &LineItemScope<'_, '_>) -> bool {
        true
    }
}

/// Matches when the context lists a given rule as active.
#[derive(Debug, Clone)]
pub struct ContextRuleRule {
    rule_id: String,
}

impl ContextRuleRule {
    /// Create a rule bound to an active-rule id.
    #[must_use]
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
        }
    }
}

impl Rule for ContextRuleRule {
    fn name(&self) -> &'static str {
        "context_rule"
    }

    fn matches(&self, scope: &LineItemScope<'_, '_>) -> bool {
        scope.context().has_rule(&self.rule_id)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::{
        rules::{line_item::LineItemRule, tags::LineItemTagRule},
        tags::TagSet,
    };

    use super::*;

    #[test]
    fn empty_group_matches_all() -> TestResult {
        let item = LineItem::product("A", 1, Money::from_minor(100, GBP))?;
        let context = PricingContext::new(GBP);
        let group = RuleGroup::new(BoolOp::Or, SmallVec::new());

        assert!(group.matches(&LineItemScope::new(&item, &context)));

        Ok(())
    }

    #[test]
    fn supports_nested_boolean_groups() -> TestResult {
        let group = RuleGroup::new(
            BoolOp::And,
            smallvec![
                rule(LineItemTagRule::has_all(TagSet::from_strs(&["fruit"]))),
                rule(RuleGroup::new(
                    BoolOp::Or,
                    smallvec![
                        rule(LineItemRule::new(Operator::Equals, ["A"])),
                        rule(ContextRuleRule::new("members")),
                    ],
                )),
            ],
        );

        let apple = LineItem::product("A", 1, Money::from_minor(100, GBP))?
            .with_tags(TagSet::from_strs(&["fruit"]));
        let pear = LineItem::product("P", 1, Money::from_minor(100, GBP))?
            .with_tags(TagSet::from_strs(&["fruit"]));
        let bread = LineItem::product("A", 1, Money::from_minor(100, GBP))?;

        let guest = PricingContext::new(GBP);
        let member = PricingContext::with_rule_ids(GBP, ["members"]);

        assert!(group.matches(&LineItemScope::new(&apple, &guest)));
        assert!(!group.matches(&LineItemScope::new(&pear, &guest)));
        assert!(group.matches(&LineItemScope::new(&pear, &member)));
        assert!(!group.matches(&LineItemScope::new(&bread, &member)));

        Ok(())
    }

    #[test]
    fn always_valid_matches() -> TestResult {
        let item = LineItem::product("A", 1, Money::from_minor(100, GBP))?;
        let context = PricingContext::new(GBP);

        let scope = LineItemScope::new(&item, &context);

        assert!(AlwaysValidRule.matches(&scope));
        assert_eq!(AlwaysValidRule.name(), "always_valid");

        Ok(())
    }
}
