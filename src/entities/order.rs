//! The Order entity and its order-specific composites.
//!
//! An [`Order`] mirrors the platform's order JSON shape: identifiers,
//! monetary totals, free-form status strings, nested composites, and
//! timestamps. Nothing is validated client-side; the record is a pure
//! transport shape constructed either by deserializing a response or by
//! the caller ahead of a create/update call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, DiscountCode, LineItem, NoteAttribute, ShippingLine, TaxLine};
use super::customer::Customer;

/// An order placed in a shop.
///
/// Status fields (`financial_status`, `fulfillment_status`,
/// `cancel_reason`, `processing_method`, `source_name`) are free-form
/// strings; the platform documents known values but the type does not
/// enumerate them. Monetary totals are decimal-equivalent doubles.
///
/// # Known status values
///
/// - `financial_status`: "authorized", "paid", "pending",
///   "partially_paid", "partially_refunded", "refunded", "voided"
/// - `fulfillment_status`: "fulfilled", "partial", or null
/// - `cancel_reason`: "customer", "fraud", "inventory", "other"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order, used for API purposes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The mailing address associated with the payment method. Not
    /// present on orders that do not require one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// The IP address of the browser used by the customer when placing
    /// the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    /// Whether the customer consented to receive email updates from the
    /// shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    /// Why the order was cancelled; null when the order was not
    /// cancelled. Known values are "customer", "fraud", "inventory" and
    /// "other".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    /// When the order was cancelled; null when the order was not
    /// cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// Unique identifier for the cart attached to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,

    /// Details about the client that placed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,

    /// When the order was closed; null when the order is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,

    /// The customer's contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// When the order was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// The three-letter currency code (ISO 4217) used for payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The customer who placed the order. May be null for orders created
    /// through the point of sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Discount codes applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,

    /// The order's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The payment status of the order. Known values are "authorized",
    /// "paid", "pending", "partially_paid", "partially_refunded",
    /// "refunded" and "voided".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// Fulfillments associated with the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillments: Option<Vec<Fulfillment>>,

    /// The fulfillment status of the order. Known values are "fulfilled",
    /// "partial" and null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Comma-separated short descriptors, commonly used for filtering
    /// and searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The URL of the page the buyer landed on when entering the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,

    /// The items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// The customer-facing order name, e.g. "#1001".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An optional note a shop owner can attach to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Extra information added to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    /// Sequential numeric identifier unique to the shop, starting at
    /// 1000.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub number: Option<i64>,

    /// The numeric identifier used by the shop owner and customer,
    /// distinct from `id`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub order_number: Option<i64>,

    /// Payment details for the order. May be null for orders created via
    /// the API without payment details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,

    /// When the order was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    /// The type of payment processing method. Known values are
    /// "checkout", "direct", "manual", "offsite", "express", "free" and
    /// "none".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,

    /// The website the customer clicked on to come to the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,

    /// The mailing address the order will be shipped to. Not present on
    /// orders that do not require shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// The shipping methods used for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    /// Where the order originated. May only be set during creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// The price of the order before shipping and taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<f64>,

    /// The taxes applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Whether taxes are included in the order subtotal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    /// Unique token identifying the order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// The total amount of discounts applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<f64>,

    /// The sum of the prices of all items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<f64>,

    /// The sum of all item prices, taxes and discounts included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,

    /// The total price in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_usd: Option<f64>,

    /// The sum of all taxes applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<f64>,

    /// The sum of the weights of all line items, in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,

    /// When the order was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Transactions recorded against the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

/// Details about the client that placed an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    /// The language the browser accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,

    /// The browser screen height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<i64>,

    /// The browser IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    /// The browser screen width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<i64>,

    /// A hash of the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,

    /// The browser's user agent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Payment details for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    /// The response code from the address verification system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,

    /// The issuer identification number of the credit card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<String>,

    /// The company that issued the credit card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,

    /// The masked credit card number, showing only the last four digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_number: Option<String>,

    /// The response code from the credit card verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,
}

/// A shipment of one or more items in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    /// The unique identifier of the fulfillment.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The id of the order the fulfillment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The status of the fulfillment. Known values are "pending",
    /// "open", "success", "cancelled", "error" and "failure".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The name of the shipping company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    /// The shipment's tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// All tracking numbers for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,

    /// The URL to track the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// All tracking URLs for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,

    /// The line items included in the fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// When the fulfillment was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the fulfillment was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A transaction recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Transaction {
    /// The unique identifier of the transaction.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The id of the order the transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The amount of money involved in the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The authorization code from the payment gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// The three-letter currency code of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The payment gateway used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// The kind of transaction. Known values are "authorization",
    /// "capture", "sale", "void" and "refund".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The status of the transaction. Known values are "pending",
    /// "failure", "success" and "error".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the transaction is a test transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// When the transaction was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn representative_order_json() -> serde_json::Value {
        json!({
            "id": 450789469,
            "billing_address": {
                "address1": "123 Amoebobacterieae St",
                "city": "Ottawa",
                "country": "Canada",
                "country_code": "CA",
                "first_name": "Bob",
                "last_name": "Bobsen",
                "name": "Bob Bobsen",
                "province": "Ontario",
                "province_code": "ON",
                "zip": "K2P0V6",
                "latitude": 45.41634,
                "longitude": -75.6868
            },
            "browser_ip": "0.0.0.0",
            "buyer_accepts_marketing": false,
            "cancel_reason": null,
            "cancelled_at": null,
            "cart_token": "68778783ad298f1c80c3bafcddeea02f",
            "closed_at": null,
            "contact_email": "bob.norman@hostmail.com",
            "created_at": "2008-01-10T11:00:00Z",
            "currency": "USD",
            "customer": {
                "id": 207119551,
                "email": "bob.norman@hostmail.com",
                "first_name": "Bob",
                "last_name": "Norman",
                "orders_count": 1,
                "state": "disabled",
                "verified_email": true
            },
            "discount_codes": [
                {"code": "TENOFF", "amount": 10.0, "type": "percentage"}
            ],
            "email": "bob.norman@hostmail.com",
            "financial_status": "authorized",
            "fulfillment_status": null,
            "tags": "imported, vip",
            "landing_site": "http://www.example.com?source=abc",
            "line_items": [
                {
                    "id": 466157049,
                    "variant_id": 39072856,
                    "product_id": 632910392,
                    "title": "IPod Nano - 8gb",
                    "variant_title": "green",
                    "sku": "IPOD2008GREEN",
                    "vendor": null,
                    "quantity": 1,
                    "price": "199.00",
                    "grams": 200,
                    "requires_shipping": true,
                    "taxable": true,
                    "fulfillment_status": null,
                    "properties": [
                        {"name": "Custom Engraving", "value": "Happy Birthday"}
                    ]
                }
            ],
            "name": "#1001",
            "note": null,
            "note_attributes": [
                {"name": "custom name", "value": "custom value"}
            ],
            "number": 1,
            "order_number": 1001,
            "processed_at": "2008-01-10T11:00:00Z",
            "processing_method": "direct",
            "referring_site": "http://www.otherexample.com",
            "shipping_address": {
                "address1": "123 Amoebobacterieae St",
                "city": "Ottawa",
                "country_code": "CA"
            },
            "shipping_lines": [
                {
                    "id": 369256396,
                    "code": "Free Shipping",
                    "price": 0.0,
                    "source": "shopify",
                    "title": "Free Shipping"
                }
            ],
            "source_name": "web",
            "subtotal_price": 398.0,
            "tax_lines": [
                {"title": "State Tax", "price": 11.94, "rate": 0.06}
            ],
            "taxes_included": false,
            "token": "b1946ac92492d2347c6235b4d2611184",
            "total_discounts": 0.0,
            "total_line_items_price": 398.0,
            "total_price": 409.94,
            "total_price_usd": 409.94,
            "total_tax": 11.94,
            "total_weight": 400,
            "updated_at": "2008-01-10T11:00:00Z"
        })
    }

    #[test]
    fn test_order_deserializes_all_field_groups() {
        let order: Order = serde_json::from_value(representative_order_json()).unwrap();

        // Identifiers
        assert_eq!(order.id, Some(450789469));
        assert_eq!(order.number, Some(1));
        assert_eq!(order.order_number, Some(1001));
        assert_eq!(order.name.as_deref(), Some("#1001"));
        assert_eq!(
            order.token.as_deref(),
            Some("b1946ac92492d2347c6235b4d2611184")
        );

        // Monetary totals
        assert_eq!(order.subtotal_price, Some(398.0));
        assert_eq!(order.total_price, Some(409.94));
        assert_eq!(order.total_tax, Some(11.94));
        assert_eq!(order.total_discounts, Some(0.0));
        assert_eq!(order.total_weight, Some(400));

        // Status strings stay free-form
        assert_eq!(order.financial_status.as_deref(), Some("authorized"));
        assert!(order.fulfillment_status.is_none());
        assert!(order.cancel_reason.is_none());
        assert_eq!(order.processing_method.as_deref(), Some("direct"));
        assert_eq!(order.source_name.as_deref(), Some("web"));

        // Nested composites
        let billing = order.billing_address.as_ref().unwrap();
        assert_eq!(billing.city.as_deref(), Some("Ottawa"));
        let customer = order.customer.as_ref().unwrap();
        assert_eq!(customer.id, Some(207119551));
        let items = order.line_items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku.as_deref(), Some("IPOD2008GREEN"));
        let properties = items[0].properties.as_ref().unwrap();
        assert_eq!(properties[0].name.as_deref(), Some("Custom Engraving"));
        assert_eq!(order.discount_codes.as_ref().unwrap().len(), 1);
        assert_eq!(order.shipping_lines.as_ref().unwrap()[0].price, Some(0.0));
        assert_eq!(order.tax_lines.as_ref().unwrap()[0].rate, Some(0.06));

        // Timestamps
        assert!(order.created_at.is_some());
        assert!(order.updated_at.is_some());
        assert!(order.processed_at.is_some());
        assert!(order.cancelled_at.is_none());
        assert!(order.closed_at.is_none());
    }

    #[test]
    fn test_order_read_only_fields_omitted_on_serialize() {
        let order: Order = serde_json::from_value(representative_order_json()).unwrap();
        let value = serde_json::to_value(&order).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("number").is_none());
        assert!(value.get("order_number").is_none());
        assert!(value.get("token").is_none());
        assert!(value.get("created_at").is_none());
        assert!(value.get("updated_at").is_none());

        // Writable fields survive
        assert_eq!(value["email"], "bob.norman@hostmail.com");
        assert_eq!(value["total_price"], 409.94);
    }

    #[test]
    fn test_new_order_serializes_only_set_fields() {
        let order = Order {
            email: Some("buyer@example.com".to_string()),
            financial_status: Some("pending".to_string()),
            line_items: Some(vec![LineItem {
                variant_id: Some(39072856),
                quantity: Some(1),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let value = serde_json::to_value(&order).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["financial_status"], "pending");
    }

    #[test]
    fn test_cancelled_order_carries_reason_and_timestamp() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "cancel_reason": "customer",
            "cancelled_at": "2025-03-01T09:00:00Z",
            "financial_status": "refunded"
        }))
        .unwrap();

        assert_eq!(order.cancel_reason.as_deref(), Some("customer"));
        assert!(order.cancelled_at.is_some());
    }
}
