use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::models::{expense::Expense, product::Product};

fn read_rows<T: DeserializeOwned, P: AsRef<Path>>(path: P, what: &str) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {} file {}", what, path.display()))?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        let row = result.with_context(|| {
            format!("Failed to parse {} on line {} of {}", what, index + 2, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads `id,name,category,price,image,in_stock` rows. Product ids must be unique.
pub fn read_products_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let products: Vec<Product> = read_rows(path, "products")?;

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.id) {
            bail!("Duplicate product id {} ({})", product.id, product.name);
        }
    }

    tracing::info!(count = products.len(), "Loaded products from CSV");
    Ok(products)
}

/// Reads `id,name,amount,category,date` rows, dates as `YYYY-MM-DD`.
pub fn read_expenses_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Expense>> {
    let expenses: Vec<Expense> = read_rows(path, "expenses")?;
    tracing::info!(count = expenses.len(), "Loaded expenses from CSV");
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_products() {
        let file = write_csv(
            "id,name,category,price,image,in_stock\n\
             1,Кран,Сантехника,2300,🚰,true\n\
             2,Дверь,Двери,15000,🚪,false\n",
        );
        let products = read_products_from_csv(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Кран");
        assert_eq!(products[1].price, Decimal::from(15000));
        assert!(!products[1].in_stock);
    }

    #[test]
    fn rejects_duplicate_product_ids() {
        let file = write_csv(
            "id,name,category,price,image,in_stock\n\
             1,A,X,1,a,true\n\
             1,B,Y,2,b,true\n",
        );
        let err = read_products_from_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate product id 1"));
    }

    #[test]
    fn reads_expenses_with_iso_dates() {
        let file = write_csv("id,name,amount,category,date\n7,Грунтовка,900,Материалы,2025-02-03\n");
        let expenses = read_expenses_from_csv(file.path()).unwrap();
        assert_eq!(expenses[0].amount, Decimal::from(900));
        assert_eq!(expenses[0].date.to_string(), "2025-02-03");
    }

    #[test]
    fn bad_row_reports_line_number() {
        let file = write_csv("id,name,amount,category,date\n1,A,abc,X,2025-01-01\n");
        let err = read_expenses_from_csv(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_products_from_csv("/definitely/not/here.csv").is_err());
    }
}
