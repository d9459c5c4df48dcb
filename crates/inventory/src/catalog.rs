//! Catalog exchange format: a JSON array of items.
//!
//! Inventories cross process boundaries as plain JSON lists, e.g.
//!
//! ```json
//! [
//!   { "name": "+5 Dexterity Vest", "sell_in": 10, "quality": 20 },
//!   { "name": "Aged Brie", "sell_in": 2, "quality": 0 }
//! ]
//! ```
//!
//! Decoding accepts whatever quality the document carries, out-of-range
//! values included; validation of the range is not a decode concern.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;

/// Decode an inventory from a JSON array of items.
pub fn items_from_json(json: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(json).map_err(|err| DomainError::decode(format!("item catalog: {err}")))
}

/// Encode an inventory as pretty-printed JSON, preserving item order.
pub fn items_to_json(items: &[Item]) -> DomainResult<String> {
    serde_json::to_string_pretty(items)
        .map_err(|err| DomainError::encode(format!("item catalog: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_catalog_document() {
        let json = r#"[
            { "name": "+5 Dexterity Vest", "sell_in": 10, "quality": 20 },
            { "name": "Aged Brie", "sell_in": 2, "quality": 0 },
            { "name": "Sulfuras, Hand of Ragnaros", "sell_in": 0, "quality": 80 }
        ]"#;

        let items = items_from_json(json).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Item::new("+5 Dexterity Vest", 10, 20));
        assert_eq!(items[1], Item::new("Aged Brie", 2, 0));
        // Out-of-range quality survives decoding untouched.
        assert_eq!(items[2].quality(), 80);
    }

    #[test]
    fn decodes_an_empty_catalog() {
        assert!(items_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = items_from_json(r#"[ { "name": "Aged Brie" "#).unwrap_err();
        match err {
            DomainError::Decode(msg) => assert!(msg.contains("item catalog")),
            _ => panic!("Expected Decode error for malformed JSON"),
        }
    }

    #[test]
    fn missing_fields_are_a_decode_error() {
        let err = items_from_json(r#"[ { "name": "Aged Brie", "sell_in": 2 } ]"#).unwrap_err();
        assert!(matches!(err, DomainError::Decode(_)));
    }

    #[test]
    fn encoded_catalog_decodes_back_to_the_same_items() {
        let items = vec![
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new("Conjured Mana Cake", 3, 6),
        ];

        let json = items_to_json(&items).unwrap();
        let decoded = items_from_json(&json).unwrap();

        assert_eq!(decoded, items);
    }
}
