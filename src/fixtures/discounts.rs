//! Discount Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    promotions::discount::{DiscountLineItem, PriceDefinition},
    rules::{
        AlwaysValidRule, BoolOp, ContextRuleRule, Operator, RuleGroup, SharedRule,
        line_item::LineItemRule,
        rule,
        tags::{LineItemTagRule, TagMatch},
    },
    tags::TagSet,
};

/// Wrapper for discounts in YAML
#[derive(Debug, Deserialize)]
pub struct DiscountsFixture {
    /// Map of discount key -> discount fixture
    pub discounts: FxHashMap<String, DiscountFixture>,
}

/// Discount from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscountFixture {
    /// Display label
    pub label: String,

    /// Whether the discount is evaluated per unit
    #[serde(default)]
    pub product_restricted: bool,

    /// Optional filter rule
    #[serde(default)]
    pub filter: Option<RuleFixture>,
}

/// Rule from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleFixture {
    /// Line item identifier rule
    LineItem {
        /// Comparison operator
        #[serde(default = "default_operator")]
        operator: Operator,

        /// Identifiers to compare against
        identifiers: Vec<String>,
    },

    /// Line item tag rule
    Tags {
        /// How tags are compared
        #[serde(rename = "match")]
        mode: TagMatch,

        /// Tags to compare against
        tags: TagSet,
    },

    /// Active context rule
    ContextRule {
        /// Rule id that must be active
        rule_id: String,
    },

    /// Nested group
    Group {
        /// How children are combined
        op: BoolOp,

        /// Child rules
        rules: Vec<RuleFixture>,
    },

    /// Matches everything
    AlwaysValid,
}

fn default_operator() -> Operator {
    Operator::Equals
}

impl From<RuleFixture> for SharedRule {
    fn from(fixture: RuleFixture) -> Self {
        match fixture {
            RuleFixture::LineItem {
                operator,
                identifiers,
            } => rule(LineItemRule::new(operator, identifiers)),
            RuleFixture::Tags { mode, tags } => rule(LineItemTagRule::new(mode, tags)),
            RuleFixture::ContextRule { rule_id } => rule(ContextRuleRule::new(rule_id)),
            RuleFixture::Group { op, rules } => rule(RuleGroup::new(
                op,
                rules.into_iter().map(SharedRule::from).collect(),
            )),
            RuleFixture::AlwaysValid => rule(AlwaysValidRule),
        }
    }
}

impl DiscountFixture {
    /// Convert into a discount line item with the given id.
    #[must_use]
    pub fn into_discount(self, id: String) -> DiscountLineItem {
        let price_definition = match self.filter {
            Some(filter) => PriceDefinition::RuleFiltered(filter.into()),
            None => PriceDefinition::Unfiltered,
        };

        DiscountLineItem::new(id, self.label, price_definition)
            .with_product_restriction(self.product_restricted)
    }
}
