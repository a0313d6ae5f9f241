//! Line Item Rule
//!
//! Matches line items by the entity they reference, falling back to their own id.

use rustc_hash::FxHashSet;

use crate::rules::{LineItemScope, Operator, Rule};

/// Allow- or deny-list of line item identifiers.
#[derive(Debug, Clone)]
pub struct LineItemRule {
    operator: Operator,
    identifiers: FxHashSet<String>,
}

impl LineItemRule {
    /// Create a rule over a list of identifiers.
    pub fn new<I, S>(operator: Operator, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operator,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for LineItemRule {
    fn name(&self) -> &'static str {
        "line_item"
    }

    fn matches(&self, scope: &LineItemScope<'_, '_>) -> bool {
        let line_item = scope.line_item();
        let identifier = line_item.referenced_id().unwrap_or_else(|| line_item.id());
        let listed = self.identifiers.contains(identifier);

        match self.operator {
            Operator::Equals => listed,
            Operator::NotEquals => !listed,
        }
    }
}
