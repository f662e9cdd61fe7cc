use std::io;

use anyhow::Result;
use storefront::{catalog::Catalog, prices::format_price};
use tabled::{builder::Builder, settings::Style};

/// Write each category as a table of listings.
pub(crate) fn write_catalog(out: &mut impl io::Write, catalog: &Catalog) -> Result<()> {
    let sections = catalog.sections();

    if sections.is_empty() {
        writeln!(out, "The catalog is empty.")?;
        return Ok(());
    }

    for section in sections {
        let mut builder = Builder::default();

        builder.push_record(["Key", "Product", "Description", "Monthly", "Contract"]);

        for listing in &section.listings {
            builder.push_record([
                listing.key.to_string(),
                listing.product.name.clone(),
                listing.product.description.clone(),
                format_price(&listing.product.monthly_cost),
                format!("{} months", listing.product.contract_length),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());

        writeln!(out, "{}\n{table}\n", section.name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use storefront::products::Product;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn writes_one_table_per_category() -> TestResult {
        let products = [("Sky F1", "Sports"), ("Sky Cinema", "Movies")].map(|(name, kind)| {
            Product {
                name: name.to_string(),
                description: String::new(),
                kind: kind.to_string(),
                monthly_cost: Money::from_minor(1800, GBP),
                contract_length: 12,
            }
        });

        let mut out = Vec::new();

        write_catalog(&mut out, &Catalog::new(products, GBP))?;

        let text = String::from_utf8(out)?;

        assert!(text.starts_with("Sports\n"));
        assert!(text.contains("Movies\n"));
        assert!(text.contains("Sports_0"));
        assert!(text.contains("Movies_0"));
        assert!(text.contains("£18.00"));
        assert!(text.contains("12 months"));

        Ok(())
    }

    #[test]
    fn empty_catalog_says_so() -> TestResult {
        let mut out = Vec::new();

        write_catalog(&mut out, &Catalog::new(Vec::new(), GBP))?;

        assert_eq!(String::from_utf8(out)?, "The catalog is empty.\n");

        Ok(())
    }
}
