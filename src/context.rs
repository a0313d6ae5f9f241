//! Pricing Context

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;

/// Per-calculation state handed to rules: currency and the ids of rules already known to be active.
#[derive(Debug, Clone)]
pub struct PricingContext {
    currency: &'static Currency,
    rule_ids: FxHashSet<String>,
}

impl PricingContext {
    /// Create a context for the given currency with no active rules.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            rule_ids: FxHashSet::default(),
        }
    }

    /// Create a context with a set of active rule ids.
    #[must_use]
    pub fn with_rule_ids<I, S>(currency: &'static Currency, rule_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            currency,
            rule_ids: rule_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Currency of the calculation.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whether the rule with the given id is active in this context.
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.rule_ids.contains(rule_id)
    }

    /// Ids of all active rules.
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.rule_ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn has_rule_reports_active_ids() {
        let context = PricingContext::with_rule_ids(GBP, ["members", "weekend"]);

        assert!(context.has_rule("members"));
        assert!(!context.has_rule("staff"));
        assert_eq!(context.rule_ids().count(), 2);
        assert_eq!(context.currency(), GBP);
    }
}
