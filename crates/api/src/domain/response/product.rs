use crate::model::document::{Document, coerce_f64, truthy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum DocumentDecodeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Typed view of a stored product document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image_url: Option<String>,
    pub rating: f64,
    pub brand: Option<String>,
    pub weight: Option<String>,
}

impl ProductResponse {
    /// Pure decode of a loosely-typed stored document. Defaulting rules:
    ///
    /// | field     | rule                                         |
    /// |-----------|----------------------------------------------|
    /// | title     | required string                              |
    /// | price     | numeric cast, 0.0 when absent                |
    /// | category  | "Food" when absent                           |
    /// | in_stock  | truthiness cast, true only when absent       |
    /// | rating    | numeric cast, 4.5 when absent or null        |
    pub fn from_document(doc: &Document) -> Result<Self, DocumentDecodeError> {
        let data = &doc.data;

        let title = string_field(data, "title")
            .ok_or(DocumentDecodeError::MissingField("title"))?;

        let price = data.get("price").and_then(coerce_f64).unwrap_or(0.0);

        let category = string_field(data, "category").unwrap_or_else(|| "Food".to_string());

        // The default only applies when the field is absent; a stored null
        // goes through the truthiness cast and comes out false.
        let in_stock = match data.get("in_stock") {
            None => true,
            Some(value) => truthy(value),
        };

        let rating = data.get("rating").and_then(coerce_f64).unwrap_or(4.5);

        Ok(Self {
            id: doc.id.to_string(),
            title,
            description: string_field(data, "description"),
            price,
            category,
            in_stock,
            image_url: string_field(data, "image_url"),
            rating,
            brand: string_field(data, "brand"),
            weight: string_field(data, "weight"),
        })
    }
}

fn string_field(data: &Value, field: &str) -> Option<String> {
    data.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn doc(data: Value) -> Document {
        Document {
            id: Uuid::new_v4(),
            data,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn decodes_fully_populated_document() {
        let d = doc(json!({
            "title": "Premium Dry Dog Food - Chicken",
            "description": "High-protein kibble with vitamins and minerals.",
            "price": 29.99,
            "category": "Dog",
            "in_stock": true,
            "image_url": "https://example.com/dog.jpg",
            "rating": 4.7,
            "brand": "Pawsome",
            "weight": "5 lb",
        }));

        let product = ProductResponse::from_document(&d).unwrap();
        assert_eq!(product.id, d.id.to_string());
        assert_eq!(product.title, "Premium Dry Dog Food - Chicken");
        assert_eq!(product.price, 29.99);
        assert_eq!(product.category, "Dog");
        assert!(product.in_stock);
        assert_eq!(product.rating, 4.7);
        assert_eq!(product.brand.as_deref(), Some("Pawsome"));
        assert_eq!(product.weight.as_deref(), Some("5 lb"));
    }

    #[test]
    fn applies_defaults_for_absent_fields() {
        let product = ProductResponse::from_document(&doc(json!({"title": "Bare"}))).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.category, "Food");
        assert!(product.in_stock);
        assert_eq!(product.rating, 4.5);
        assert!(product.description.is_none());
        assert!(product.image_url.is_none());
        assert!(product.brand.is_none());
        assert!(product.weight.is_none());
    }

    #[test]
    fn rating_defaults_when_explicitly_null() {
        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "rating": null}))).unwrap();
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn in_stock_is_boolean_for_truthy_non_boolean_values() {
        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "in_stock": 1}))).unwrap();
        assert!(product.in_stock);

        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "in_stock": 0}))).unwrap();
        assert!(!product.in_stock);

        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "in_stock": "yes"})))
                .unwrap();
        assert!(product.in_stock);
    }

    #[test]
    fn in_stock_explicit_null_is_false() {
        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "in_stock": null})))
                .unwrap();
        assert!(!product.in_stock);

        let product = ProductResponse::from_document(&doc(json!({"title": "T"}))).unwrap();
        assert!(product.in_stock);
    }

    #[test]
    fn price_accepts_numeric_strings() {
        let product =
            ProductResponse::from_document(&doc(json!({"title": "T", "price": "19.49"})))
                .unwrap();
        assert_eq!(product.price, 19.49);
    }

    #[test]
    fn missing_title_is_a_typed_error() {
        let err = ProductResponse::from_document(&doc(json!({"price": 9.99}))).unwrap_err();
        assert!(matches!(err, DocumentDecodeError::MissingField("title")));
    }
}
