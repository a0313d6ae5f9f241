//! Integration tests for advanced package rules

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use discount_packager::{
    cart::{CartError, collection::LineItemFlatCollection, line_item::LineItem},
    context::PricingContext,
    promotions::{
        discount::{DiscountLineItem, PriceDefinition},
        filters::{AdvancedPackageRules, PackageFilter},
        package::{DiscountPackage, DiscountPackageCollection},
        quantity::LineItemQuantity,
    },
    rules::{Operator, line_item::LineItemRule, rule, tags::LineItemTagRule},
    tags::TagSet,
};

fn package_of(ids: &[&str]) -> Result<DiscountPackage<'static>, CartError> {
    let mut package =
        DiscountPackage::new(ids.iter().map(|id| LineItemQuantity::single(*id)).collect());

    let cart_items = ids
        .iter()
        .map(|id| LineItem::product(*id, 1, Money::from_minor(100, GBP)))
        .collect::<Result<LineItemFlatCollection<'_>, _>>()?;

    package.set_cart_items(cart_items);

    Ok(package)
}

fn a_and_c() -> DiscountLineItem {
    DiscountLineItem::new(
        "d1",
        "A and C",
        PriceDefinition::RuleFiltered(rule(LineItemRule::new(Operator::Equals, ["A", "C"]))),
    )
}

#[test]
fn keeps_matching_items_and_drops_empty_packages() -> TestResult {
    let mut packages = DiscountPackageCollection::new();
    packages.push(package_of(&["A", "B", "C", "D"])?);
    packages.push(package_of(&[])?);

    let context = PricingContext::new(GBP);

    assert_eq!(packages.len(), 2);

    let filtered = AdvancedPackageRules.filter(&a_and_c(), packages, &context);

    assert_eq!(filtered.len(), 1);

    for package in &filtered {
        let cart_ids: Vec<&str> = package.cart_items().iter().map(LineItem::id).collect();
        let meta_ids: Vec<&str> = package
            .meta_data()
            .iter()
            .map(LineItemQuantity::line_item_id)
            .collect();

        assert_eq!(cart_ids, vec!["A", "C"]);
        assert_eq!(meta_ids, vec!["A", "C"]);
    }

    Ok(())
}

#[test]
fn filtering_never_grows_packages() -> TestResult {
    let mut packages = DiscountPackageCollection::new();
    packages.push(package_of(&["A", "B"])?);
    packages.push(package_of(&["B", "D"])?);
    packages.push(package_of(&["C", "C", "A"])?);

    let original = packages.clone();
    let context = PricingContext::new(GBP);

    let filtered = AdvancedPackageRules.filter(&a_and_c(), packages, &context);

    assert!(filtered.len() <= original.len());
    assert!(filtered.cart_item_count() <= original.cart_item_count());
    assert!(filtered.meta_data_count() <= original.meta_data_count());

    // Order follows the input, minus the package with no match.
    let sizes: Vec<usize> = filtered
        .iter()
        .map(|package| package.cart_items().len())
        .collect();

    assert_eq!(sizes, vec![1, 3]);

    Ok(())
}

#[test]
fn tag_rules_evaluate_cart_items() -> TestResult {
    let meta_data = ["apple", "bread"].map(LineItemQuantity::single);
    let mut package = DiscountPackage::new(meta_data.into_iter().collect());

    package.set_cart_items(LineItemFlatCollection::from(vec![
        LineItem::product("apple", 1, Money::from_minor(50, GBP))?
            .with_tags(TagSet::from_strs(&["fruit"])),
        LineItem::product("bread", 1, Money::from_minor(120, GBP))?,
    ]));

    let fruit = LineItemTagRule::has_any(TagSet::from_strs(&["fruit"]));
    let discount = DiscountLineItem::new("d1", "Fruit", PriceDefinition::RuleFiltered(rule(fruit)));
    let context = PricingContext::new(GBP);

    let mut packages = DiscountPackageCollection::new();
    packages.push(package);

    let filtered = AdvancedPackageRules.filter(&discount, packages, &context);

    assert_eq!(filtered.all_line_item_ids().as_slice(), &["apple"]);

    Ok(())
}

#[test]
fn packages_without_cart_items_are_dropped() {
    let package = DiscountPackage::new(vec![LineItemQuantity::single("A")].into());
    let mut packages = DiscountPackageCollection::new();
    packages.push(package);

    let context = PricingContext::new(GBP);

    let filtered = AdvancedPackageRules.filter(&a_and_c(), packages, &context);

    assert!(filtered.is_empty());
}
