//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::pricing::{TotalPriceError, total_price};

pub mod collection;
pub mod line_item;

use collection::LineItemCollection;
use line_item::LineItem;

/// Errors related to cart construction.
#[derive(Debug, Error)]
pub enum CartError {
    /// A line item's currency differs from the cart currency (id, item currency, cart currency).
    #[error("Line item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// Two line items in the same cart tree share an id.
    #[error("Line item {0} already exists")]
    DuplicateLineItem(String),

    /// A line item was created with a quantity of zero.
    #[error("Line item {id} has invalid quantity {quantity}")]
    InvalidQuantity {
        /// Line item id
        id: String,

        /// Rejected quantity
        quantity: u32,
    },
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    token: String,
    line_items: LineItemCollection<'a>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    #[must_use]
    pub fn new(token: impl Into<String>, currency: &'static Currency) -> Self {
        Cart {
            token: token.into(),
            line_items: LineItemCollection::new(),
            currency,
        }
    }

    /// Create a cart with the given line items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if ids collide or any line item, nested ones included,
    /// is priced in another currency.
    pub fn with_line_items(
        token: impl Into<String>,
        line_items: impl IntoIterator<Item = LineItem<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let line_items = LineItemCollection::with_items(line_items)?;

        line_items
            .flat()
            .into_iter()
            .try_for_each(|item| check_currency(item, currency))?;

        Ok(Cart {
            token: token.into(),
            line_items,
            currency,
        })
    }

    /// Add a line item to the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` on a currency mismatch or duplicate id.
    pub fn add(&mut self, item: LineItem<'a>) -> Result<(), CartError> {
        check_currency(&item, self.currency)?;

        item.children()
            .flat()
            .into_iter()
            .try_for_each(|child| check_currency(child, self.currency))?;

        self.line_items.add(item)
    }

    /// Calculate the subtotal of all top-level line items.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if money arithmetic overflows.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.line_items.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(self.line_items.iter())
    }

    /// Cart token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Top-level line items.
    pub fn line_items(&self) -> &LineItemCollection<'a> {
        &self.line_items
    }

    /// Cart currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn check_currency(item: &LineItem<'_>, currency: &'static Currency) -> Result<(), CartError> {
    let item_currency = item.price().currency();

    if item_currency == currency {
        Ok(())
    } else {
        Err(CartError::CurrencyMismatch(
            item.id().to_string(),
            item_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ))
    }
}
