//! Package Report
//!
//! Renders discount packages as a table, one row per meta data entry.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    pricing::{TotalPriceError, line_total},
    promotions::package::DiscountPackageCollection,
};

const HEADER: [&str; 5] = ["Package", "Line Item", "Label", "Quantity", "Price"];

/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Price of a cart item could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Table view over a package collection.
#[derive(Debug)]
pub struct PackageReport<'r, 'a> {
    packages: &'r DiscountPackageCollection<'a>,
}

impl<'r, 'a> PackageReport<'r, 'a> {
    /// Create a report for the packages.
    pub fn new(packages: &'r DiscountPackageCollection<'a>) -> Self {
        Self { packages }
    }

    /// Write the table and a summary line.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if a price cannot be calculated or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(HEADER);

        for (number, package) in self.packages.iter().enumerate() {
            let number = (number + 1).to_string();

            for entry in package.meta_data() {
                // Packages that were never enriched only know the id and quantity.
                let (label, price) = match package.cart_item(entry.line_item_id()) {
                    Some(item) => {
                        let total = line_total(&item.with_quantity(entry.quantity()))?;

                        (item.label().to_string(), total.to_string())
                    }
                    None => (String::new(), String::new()),
                };

                builder.push_record([
                    number.clone(),
                    entry.line_item_id().to_string(),
                    label,
                    entry.quantity().to_string(),
                    price,
                ]);
            }
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..5), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(
            out,
            "{} package(s), {} entries",
            self.packages.len(),
            self.packages.meta_data_count()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{
        cart::{collection::LineItemFlatCollection, line_item::LineItem},
        promotions::{package::DiscountPackage, quantity::LineItemQuantity},
    };

    use super::*;

    #[test]
    fn writes_one_row_per_entry() -> TestResult {
        let meta_data = ["A", "B"].map(LineItemQuantity::single);
        let mut package = DiscountPackage::new(meta_data.into_iter().collect());

        package.set_cart_items(LineItemFlatCollection::from(vec![
            LineItem::product("A", 1, Money::from_minor(250, GBP))?
                .with_label("Apples"),
            LineItem::product("B", 1, Money::from_minor(100, GBP))?
                .with_label("Bread"),
        ]));

        let packages: DiscountPackageCollection<'_> = [package].into_iter().collect();
        let mut out = Vec::new();

        PackageReport::new(&packages).write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Apples"));
        assert!(rendered.contains("Bread"));
        assert!(rendered.contains("2.50"));
        assert!(rendered.contains("1 package(s), 2 entries"));

        Ok(())
    }

    #[test]
    fn empty_collection_still_has_summary() -> TestResult {
        let packages = DiscountPackageCollection::new();
        let mut out = Vec::new();

        PackageReport::new(&packages).write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("0 package(s), 0 entries"));

        Ok(())
    }
}
