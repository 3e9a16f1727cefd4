//! Fixture record types.
//!
//! The serialized shape follows the fixture-loader layout: a model label, a
//! primary key and a mapping of field values. Field order in the JSON output is
//! the declaration order below.

use serde::{Deserialize, Serialize};

/// One generated book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Fixture model label, e.g. `books.book`
    pub model: String,
    /// Primary key, strictly increasing within one generator
    pub pk: u64,
    /// Book attributes
    pub fields: FieldSet,
}

/// Book attributes of a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    pub title: String,
    pub year: u16,
    pub pages: u16,
    pub isbn13: String,
    /// Average rating in `0..=5`, two decimals
    pub rating: f64,
    /// Price in `1..=2000`, two decimals
    pub price: f64,
    /// Discount percentage in `1..99`
    pub discount: u8,
    /// One to three author names, in generation order
    pub author: Vec<String>,
}

impl FieldSet {
    /// Names of the serialized fields, in output order.
    pub const KEYS: [&'static str; 8] = [
        "title", "year", "pages", "isbn13", "rating", "price", "discount", "author",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            model: "books.book".to_string(),
            pk: 7,
            fields: FieldSet {
                title: "Моби Дик".to_string(),
                year: 1851,
                pages: 635,
                isbn13: "978-5-389-07435-1".to_string(),
                rating: 4.5,
                price: 799.99,
                discount: 15,
                author: vec!["Мелвилл Герман".to_string()],
            },
        }
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();

        let model = json.find("\"model\"").unwrap();
        let pk = json.find("\"pk\"").unwrap();
        let fields = json.find("\"fields\"").unwrap();
        assert!(model < pk && pk < fields);

        let positions: Vec<usize> = FieldSet::KEYS
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_non_ascii_kept_verbatim() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(json.contains("Моби Дик"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_fields_object_has_exactly_eight_keys() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let fields = value["fields"].as_object().unwrap();

        assert_eq!(fields.len(), 8);
        for key in FieldSet::KEYS {
            assert!(fields.contains_key(key), "missing key {key}");
        }
    }
}
