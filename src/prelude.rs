//! Discount packager prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartError,
        collection::{LineItemCollection, LineItemFlatCollection},
        line_item::{LineItem, LineItemType},
    },
    config::{ConfigError, PackagingConfig},
    context::PricingContext,
    fixtures::{Fixture, FixtureError},
    pricing::{TotalPriceError, total_price},
    promotions::{
        discount::{DiscountLineItem, PriceDefinition},
        enrichment::enrich_packages,
        filters::{AdvancedPackageRules, PackageFilter},
        package::{DiscountPackage, DiscountPackageCollection, PackageError},
        packager::{CartScopeDiscountPackager, DiscountPackager, PackagerResultContext},
        pipeline::package_discount,
        quantity::{LineItemQuantity, LineItemQuantityCollection},
    },
    report::{PackageReport, ReportError},
    rules::{
        AlwaysValidRule, BoolOp, ContextRuleRule, LineItemScope, Operator, Rule, RuleGroup,
        SharedRule,
        line_item::LineItemRule,
        rule,
        tags::{LineItemTagRule, TagMatch},
    },
    tags::TagSet,
};
