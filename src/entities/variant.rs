//! The product variant entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unit of measurement for a variant's weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Grams
    G,
    /// Pounds
    Lb,
    /// Ounces
    Oz,
}

/// One purchasable version of a product, distinguished by up to three
/// option values (size, color, material).
///
/// Prices are strings to preserve decimal precision exactly as the
/// platform sends them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    /// The unique identifier of the variant.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The id of the product the variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The original price, shown struck through for sale pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// The stock keeping unit of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The barcode, UPC, or ISBN number of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The position of the variant in the product's variant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The weight of the variant in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// The weight of the variant, in the unit given by `weight_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// The unit of measurement for `weight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,

    /// The id of the inventory item backing this variant.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_item_id: Option<u64>,

    /// The available quantity. Modified through the inventory endpoints,
    /// not through variant updates.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,

    /// The service tracking inventory: "shopify", a fulfillment service
    /// handle, or null when inventory is not tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// Whether customers can purchase when out of stock: "deny" or
    /// "continue".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    /// The fulfillment service handling this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// The value of the first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// The id of the image associated with this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// Whether the variant is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Whether the variant requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// When the variant was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variant_deserializes_from_response() {
        let variant: Variant = serde_json::from_value(json!({
            "id": 39072856,
            "product_id": 632910392,
            "title": "Large / Blue",
            "price": "29.99",
            "compare_at_price": "39.99",
            "sku": "PROD-LG-BL",
            "barcode": "1234567890123",
            "position": 2,
            "grams": 500,
            "weight": 0.5,
            "weight_unit": "kg",
            "inventory_item_id": 111222333,
            "inventory_quantity": 100,
            "inventory_management": "shopify",
            "inventory_policy": "deny",
            "fulfillment_service": "manual",
            "option1": "Large",
            "option2": "Blue",
            "option3": null,
            "image_id": 999888777,
            "taxable": true,
            "requires_shipping": true,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-06-20T15:45:00Z"
        }))
        .unwrap();

        assert_eq!(variant.id, Some(39072856));
        assert_eq!(variant.price.as_deref(), Some("29.99"));
        assert_eq!(variant.weight_unit, Some(WeightUnit::Kg));
        assert_eq!(variant.inventory_quantity, Some(100));
        assert_eq!(variant.option1.as_deref(), Some("Large"));
        assert!(variant.option3.is_none());
        assert!(variant.created_at.is_some());
    }

    #[test]
    fn test_variant_read_only_fields_not_serialized() {
        let variant = Variant {
            id: Some(39072856),
            inventory_item_id: Some(111222333),
            inventory_quantity: Some(100),
            product_id: Some(632910392),
            title: Some("Large / Blue".to_string()),
            price: Some("29.99".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&variant).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("inventory_item_id").is_none());
        assert!(value.get("inventory_quantity").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["price"], "29.99");
        assert_eq!(value["product_id"], 632910392);
    }

    #[test]
    fn test_weight_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WeightUnit::Kg).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Oz).unwrap(), "\"oz\"");

        let unit: WeightUnit = serde_json::from_str("\"lb\"").unwrap();
        assert_eq!(unit, WeightUnit::Lb);
    }
}
