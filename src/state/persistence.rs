use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::MenuItem;

/// Load a catalog from a JSON array of menu items.
///
/// Order is preserved; duplicate ids are not collapsed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    info!(count = items.len(), path = %path.display(), "loaded catalog");
    Ok(items)
}

/// Save a catalog as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    info!(count = items.len(), path = %path.display(), "saved catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": "1", "name": "Plain Dosa", "price": "₹60", "category": "Dosa",
             "ingredients": [{"name": "Batter", "amount": "120g", "calories": 210}]},
            {"id": "2", "name": "Chef's Special", "price": "Market price"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Plain Dosa");
        assert!(items[1].category.is_none());

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &items).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let json = r#"[
            {"id": "2", "name": "B", "price": "$1"},
            {"id": "1", "name": "A", "price": "$1"},
            {"id": "2", "name": "B again", "price": "$1"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B again"]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
