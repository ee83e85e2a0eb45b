use std::io::Write;
use std::path::Path;

use crate::catalog::{effective_calories, effective_category};
use crate::error::Result;
use crate::models::MenuItem;

/// Column names of the CSV export, always written even with no rows.
pub const EXPORT_HEADER: [&str; 6] = ["id", "name", "category", "price", "calories", "ingredients"];

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, items: &[&MenuItem]) -> Result<()> {
    // Write header
    wtr.write_record(EXPORT_HEADER)?;

    for item in items {
        wtr.write_record([
            item.id.clone(),
            item.name.clone(),
            effective_category(item).to_string(),
            item.price.clone(),
            effective_calories(item).to_string(),
            item.ingredients.len().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write items as CSV with a header row.
pub fn write_items_csv<W: Write>(writer: W, items: &[&MenuItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_rows(&mut wtr, items)
}

/// Export items to a CSV file.
pub fn export_csv<P: AsRef<Path>>(path: P, items: &[&MenuItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter_items;
    use crate::models::{sample_catalog, Ingredient};

    #[test]
    fn test_csv_uses_effective_values() {
        let dosa = MenuItem::new("1", "Plain Dosa", "₹60")
            .with_category("Dosa")
            .with_ingredients(vec![
                Ingredient::new("Batter", "120g", 210),
                Ingredient::new("Oil", "10ml", 120),
            ]);
        let special = MenuItem::new("2", "Special", "Market price");

        let mut buf = Vec::new();
        write_items_csv(&mut buf, &[&dosa, &special]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "id,name,category,price,calories,ingredients");
        assert_eq!(lines[1], "1,Plain Dosa,Dosa,₹60,330,2");
        assert_eq!(lines[2], "2,Special,Uncategorized,Market price,0,0");
    }

    #[test]
    fn test_no_matches_still_writes_header() {
        let catalog = sample_catalog();
        let items = filter_items(&catalog, "All", "sushi");
        assert!(items.is_empty());

        let mut buf = Vec::new();
        write_items_csv(&mut buf, &items).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["id,name,category,price,calories,ingredients"]);
    }

    #[test]
    fn test_export_empty_list_writes_header_only() {
        let file = tempfile::NamedTempFile::new().unwrap();
        export_csv(file.path(), &[]).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec![EXPORT_HEADER.join(",")]);
    }

    #[test]
    fn test_export_file_roundtrip() {
        let catalog = sample_catalog();
        let items = filter_items(&catalog, "Beverages", "");

        let file = tempfile::NamedTempFile::new().unwrap();
        export_csv(file.path(), &items).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let ids: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(ids, vec!["6", "7"]);
    }
}
