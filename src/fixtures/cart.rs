//! Cart Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    cart::{
        Cart,
        collection::LineItemCollection,
        line_item::{LineItem, LineItemType},
    },
    fixtures::FixtureError,
    tags::TagSet,
};

/// Cart from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartFixture {
    /// Cart token
    #[serde(default = "default_token")]
    pub token: String,

    /// ISO currency code (e.g., "GBP")
    pub currency: String,

    /// Ids of rules active for this cart's context
    #[serde(default)]
    pub active_rules: Vec<String>,

    /// Top-level line items
    pub line_items: Vec<LineItemFixture>,
}

/// Line item from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItemFixture {
    /// Line item id
    pub id: String,

    /// Line item type
    #[serde(rename = "type", default = "default_type")]
    pub kind: LineItemType,

    /// Referenced entity id; products default to their own id
    #[serde(default)]
    pub referenced_id: Option<String>,

    /// Display label
    #[serde(default)]
    pub label: Option<String>,

    /// Quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Unit price (e.g., "2.99 GBP")
    pub price: String,

    /// Stackable flag; products default to stackable
    #[serde(default)]
    pub stackable: Option<bool>,

    /// Tags
    #[serde(default)]
    pub tags: TagSet,

    /// Nested line items
    #[serde(default)]
    pub children: Vec<LineItemFixture>,
}

fn default_token() -> String {
    "fixture".to_string()
}

fn default_type() -> LineItemType {
    LineItemType::Product
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<LineItemFixture> for LineItem<'static> {
    type Error = FixtureError;

    fn try_from(fixture: LineItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);

        let is_product = fixture.kind == LineItemType::Product;
        let mut item = LineItem::new(fixture.id.clone(), fixture.kind, fixture.quantity, price)?
            .with_stackable(fixture.stackable.unwrap_or(is_product))
            .with_tags(fixture.tags);

        if let Some(referenced_id) = fixture.referenced_id {
            item = item.with_referenced_id(referenced_id);
        } else if is_product {
            item = item.with_referenced_id(fixture.id);
        }

        if let Some(label) = fixture.label {
            item = item.with_label(label);
        }

        if !fixture.children.is_empty() {
            let children = fixture
                .children
                .into_iter()
                .map(LineItem::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            let children = LineItemCollection::with_items(children)?;

            item = item.with_children(children);
        }

        Ok(item)
    }
}

impl TryFrom<CartFixture> for Cart<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CartFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let line_items = fixture
            .line_items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_line_items(fixture.token, line_items, currency)?)
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let minor_units = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, parse_currency(code)?))
}

/// Resolve a supported ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for anything other than GBP, USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
