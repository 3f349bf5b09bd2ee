//! The customer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Address;

/// A customer of a shop.
///
/// The `state` field describes the customer's account standing:
/// "disabled", "invited", "enabled", or "declined". It is free-form and
/// controlled server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    /// The unique identifier of the customer.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The customer's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The customer's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the customer consented to receive email marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,

    /// The state of the customer's account: "disabled", "invited",
    /// "enabled", or "declined".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// A note a shop owner can attach to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the customer's email address has been verified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub verified_email: Option<bool>,

    /// Comma-separated short descriptors, commonly used for filtering
    /// and searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The three-letter currency code of the customer's last order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub currency: Option<String>,

    /// The number of orders the customer has placed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub orders_count: Option<i64>,

    /// The id of the customer's last order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub last_order_id: Option<u64>,

    /// The name of the customer's last order, e.g. "#1001".
    /// Read-only field.
    #[serde(skip_serializing)]
    pub last_order_name: Option<String>,

    /// The total amount the customer has spent across all orders.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub total_spent: Option<String>,

    /// Whether the customer is exempt from taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,

    /// The customer's mailing addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,

    /// The customer's default mailing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<Address>,

    /// When the customer was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the customer was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserializes_from_response() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 207119551,
            "email": "bob.norman@hostmail.com",
            "first_name": "Bob",
            "last_name": "Norman",
            "phone": "+16136120707",
            "accepts_marketing": false,
            "state": "disabled",
            "note": null,
            "verified_email": true,
            "tags": "loyal",
            "currency": "USD",
            "orders_count": 1,
            "last_order_id": 450789469,
            "last_order_name": "#1001",
            "total_spent": "199.65",
            "tax_exempt": false,
            "default_address": {
                "address1": "Chestnut Street 92",
                "city": "Louisville",
                "country_code": "US",
                "zip": "40202"
            },
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-06-20T15:45:00Z"
        }))
        .unwrap();

        assert_eq!(customer.id, Some(207119551));
        assert_eq!(customer.state.as_deref(), Some("disabled"));
        assert_eq!(customer.orders_count, Some(1));
        assert_eq!(customer.total_spent.as_deref(), Some("199.65"));
        assert_eq!(
            customer.default_address.as_ref().unwrap().city.as_deref(),
            Some("Louisville")
        );
    }

    #[test]
    fn test_customer_server_owned_fields_not_serialized() {
        let customer = Customer {
            id: Some(207119551),
            orders_count: Some(5),
            total_spent: Some("995.00".to_string()),
            verified_email: Some(true),
            email: Some("bob.norman@hostmail.com".to_string()),
            first_name: Some("Bob".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("orders_count").is_none());
        assert!(value.get("total_spent").is_none());
        assert!(value.get("verified_email").is_none());
        assert_eq!(value["email"], "bob.norman@hostmail.com");
    }
}
