//! Discount Line Items

use crate::rules::SharedRule;

/// Which cart items a discount's price applies to.
#[derive(Debug, Clone, Default)]
pub enum PriceDefinition {
    /// Every eligible item.
    #[default]
    Unfiltered,

    /// Only eligible items matching the rule.
    RuleFiltered(SharedRule),
}

impl PriceDefinition {
    /// The filter rule, if any.
    pub fn filter(&self) -> Option<&SharedRule> {
        match self {
            Self::Unfiltered => None,
            Self::RuleFiltered(rule) => Some(rule),
        }
    }
}

/// A promotion discount being calculated for a cart.
#[derive(Debug, Clone)]
pub struct DiscountLineItem {
    id: String,
    label: String,
    price_definition: PriceDefinition,
    product_restricted: bool,
}

impl DiscountLineItem {
    /// Create an unrestricted discount.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        price_definition: PriceDefinition,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price_definition,
            product_restricted: false,
        }
    }

    /// Set whether the discount must be evaluated per unit.
    #[must_use]
    pub fn with_product_restriction(mut self, product_restricted: bool) -> Self {
        self.product_restricted = product_restricted;
        self
    }

    /// Discount id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Price definition.
    pub fn price_definition(&self) -> &PriceDefinition {
        &self.price_definition
    }

    /// Whether packages for this discount are expanded per unit.
    pub fn is_product_restricted(&self) -> bool {
        self.product_restricted
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::{AlwaysValidRule, rule};

    use super::*;

    #[test]
    fn unfiltered_has_no_rule() {
        let discount = DiscountLineItem::new("d1", "10% off", PriceDefinition::Unfiltered);

        assert!(discount.price_definition().filter().is_none());
        assert!(!discount.is_product_restricted());
        assert_eq!(discount.label(), "10% off");
    }

    #[test]
    fn rule_filtered_exposes_rule() {
        let discount = DiscountLineItem::new(
            "d1",
            "Fruit",
            PriceDefinition::RuleFiltered(rule(AlwaysValidRule)),
        )
        .with_product_restriction(true);

        assert_eq!(
            discount
                .price_definition()
                .filter()
                .map(|rule| rule.name()),
            Some("always_valid")
        );
        assert!(discount.is_product_restricted());
        assert_eq!(discount.id(), "d1");
    }
}
