use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::{CafeError, CafeResult};

/// Stable identifier of a menu item, assigned when the item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MenuItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl MenuItem {
    /// Creates a menu item with a fresh id. Nothing is validated: empty names
    /// and negative prices are accepted as given.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: MenuItemId::new(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Name: {}, Price: {:.2}, Category: {}",
            self.name, self.price, self.category
        )
    }
}

/// Parses a user-entered price. A comma is accepted as the decimal separator.
pub fn parse_price(input: &str) -> CafeResult<f64> {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(CafeError::InvalidPrice(input.trim().to_string())),
    }
}

// One entry of the JSON menu file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuEntry {
    #[serde(rename = "itemName")]
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl From<MenuEntry> for MenuItem {
    fn from(entry: MenuEntry) -> Self {
        MenuItem::new(entry.name, entry.price, entry.category)
    }
}

/// Starting menu read from a JSON file at startup. The file is never written.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MenuFile {
    pub items: Vec<MenuEntry>,
}

impl MenuFile {
    pub fn load(path: &Path) -> CafeResult<Self> {
        let read = || -> CafeResult<Self> {
            let content = fs::read_to_string(path)?;
            let menu: MenuFile = serde_json::from_str(&content)?;
            Ok(menu)
        };
        read().map_err(|err| CafeError::MenuFile {
            path: path.to_path_buf(),
            source: Box::new(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_price_accepts_comma() {
        assert_eq!(parse_price("2,50").unwrap(), 2.5);
        assert_eq!(parse_price(" 3.00 ").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(
            parse_price("cheap"),
            Err(CafeError::InvalidPrice(s)) if s == "cheap"
        ));
        assert!(parse_price("").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("1,2,3").is_err());
    }

    #[test]
    fn test_menu_item_accepts_anything() {
        let item = MenuItem::new("", -1.0, "");
        assert_eq!(item.name, "");
        assert_eq!(item.price, -1.0);
    }

    #[test]
    fn test_menu_item_display() {
        let item = MenuItem::new("Coffee", 2.5, "Drinks");
        assert_eq!(item.to_string(), "Name: Coffee, Price: 2.50, Category: Drinks");
    }

    #[test]
    fn test_items_get_distinct_ids() {
        let a = MenuItem::new("Tea", 1.0, "Drinks");
        let b = MenuItem::new("Tea", 1.0, "Drinks");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_load_menu_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"items": [
                {{"itemName": "Coffee", "price": 2.5, "category": "Drinks"}},
                {{"itemName": "Cake", "price": 3.0, "category": "Desserts"}}
            ]}}"#
        )
        .unwrap();

        let menu = MenuFile::load(file.path()).unwrap();
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].name, "Coffee");
        assert_eq!(menu.items[1].category, "Desserts");
    }

    #[test]
    fn test_load_missing_menu_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = MenuFile::load(&path).unwrap_err();
        assert!(matches!(err, CafeError::MenuFile { .. }));
    }
}
