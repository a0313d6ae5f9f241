//! Fixtures
//!
//! YAML carts and discounts under `fixtures/carts/<name>.yml` and `fixtures/discounts/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    context::PricingContext,
    fixtures::{cart::CartFixture, discounts::DiscountsFixture},
    promotions::discount::DiscountLineItem,
};

pub mod cart;
pub mod discounts;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Discount not found
    #[error("Discount not found: {0}")]
    DiscountNotFound(String),

    /// No cart loaded
    #[error("No cart loaded")]
    NoCart,

    /// Cart construction error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    cart: Option<Cart<'static>>,
    active_rules: Vec<String>,
    discounts: FxHashMap<String, DiscountLineItem>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            cart: None,
            active_rules: Vec::new(),
            discounts: FxHashMap::default(),
        }
    }

    /// Load a cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the cart is invalid.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.load_cart_str(&contents)
    }

    /// Load a cart from a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or the cart is invalid.
    pub fn load_cart_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let mut fixture: CartFixture = serde_norway::from_str(contents)?;

        self.active_rules = std::mem::take(&mut fixture.active_rules);

        let cart = Cart::try_from(fixture)?;

        debug!(
            cart = cart.token(),
            line_items = cart.line_items().len(),
            "loaded cart fixture"
        );

        self.cart = Some(cart);

        Ok(self)
    }

    /// Load discounts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_discounts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("discounts")
            .join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.load_discounts_str(&contents)
    }

    /// Load discounts from a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn load_discounts_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: DiscountsFixture = serde_norway::from_str(contents)?;

        for (key, discount) in fixture.discounts {
            let discount = discount.into_discount(key.clone());

            self.discounts.insert(key, discount);
        }

        debug!(discounts = self.discounts.len(), "loaded discount fixtures");

        Ok(self)
    }

    /// Load a complete fixture set (cart and discounts with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_cart(name)?.load_discounts(name)?;

        Ok(fixture)
    }

    /// The loaded cart
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCart`] if no cart has been loaded.
    pub fn cart(&self) -> Result<&Cart<'static>, FixtureError> {
        self.cart.as_ref().ok_or(FixtureError::NoCart)
    }

    /// Get a discount by its key
    ///
    /// # Errors
    ///
    /// Returns an error if the discount is not found.
    pub fn discount(&self, key: &str) -> Result<&DiscountLineItem, FixtureError> {
        self.discounts
            .get(key)
            .ok_or_else(|| FixtureError::DiscountNotFound(key.to_string()))
    }

    /// Pricing context for the loaded cart, carrying its active rules
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCart`] if no cart has been loaded.
    pub fn context(&self) -> Result<PricingContext, FixtureError> {
        let cart = self.cart()?;

        Ok(PricingContext::with_rule_ids(
            cart.currency(),
            self.active_rules.iter().cloned(),
        ))
    }
}
