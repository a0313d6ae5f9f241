//! Prices

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::line_item::LineItem;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// Unit price multiplied by quantity does not fit in minor units.
    #[error("line item {0} total overflows")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Unit price times quantity for a single line item.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the result does not fit in minor units.
pub fn line_total<'a>(item: &LineItem<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor = item
        .price()
        .to_minor_units()
        .checked_mul(i64::from(item.quantity().get()))
        .ok_or_else(|| TotalPriceError::Overflow(item.id().to_string()))?;

    Ok(Money::from_minor(minor, item.price().currency()))
}

/// Calculates the total price of a list of line items, respecting quantities.
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No items were provided, so currency could not be determined.
/// - [`TotalPriceError::Overflow`]: A line total does not fit in minor units.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'s, 'a: 's>(
    items: impl IntoIterator<Item = &'s LineItem<'a>>,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let mut items = items.into_iter().peekable();
    let currency = items
        .peek()
        .ok_or(TotalPriceError::NoItems)?
        .price()
        .currency();

    let total = items.try_fold(
        Money::from_minor(0, currency),
        |acc, item| -> Result<_, TotalPriceError> { Ok(acc.add(line_total(item)?)?) },
    )?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_price_respects_quantities() -> TestResult {
        let items = [
            LineItem::product("A", 3, Money::from_minor(100, GBP))?,
            LineItem::product("B", 1, Money::from_minor(200, GBP))?,
        ];

        assert_eq!(total_price(&items)?, Money::from_minor(500, GBP));

        Ok(())
    }

    #[test]
    fn total_price_empty() {
        let items: [LineItem<'static>; 0] = [];

        assert!(matches!(total_price(&items), Err(TotalPriceError::NoItems)));
    }

    #[test]
    fn total_price_currency_mismatch() -> TestResult {
        let items = [
            LineItem::product("A", 1, Money::from_minor(100, GBP))?,
            LineItem::product("B", 1, Money::from_minor(100, USD))?,
        ];

        assert!(matches!(
            total_price(&items),
            Err(TotalPriceError::Money(_))
        ));

        Ok(())
    }

    #[test]
    fn line_total_overflow() -> TestResult {
        let item = LineItem::product("A", 2, Money::from_minor(i64::MAX, GBP))?;

        assert_eq!(
            line_total(&item),
            Err(TotalPriceError::Overflow("A".to_string()))
        );

        Ok(())
    }
}
