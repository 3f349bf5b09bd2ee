//! Composite records shared across entities.
//!
//! These are pure transport shapes: no invariants are enforced beyond
//! field presence, and every field is optional because the platform omits
//! properties freely depending on the endpoint and shop configuration.

use serde::{Deserialize, Serialize};

/// A mailing address attached to an order or customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The first line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// The second line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The company of the person associated with the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The first name of the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The full name of the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The province or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The abbreviated province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// The postal or zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The latitude of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// The longitude of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A name/value pair of extra information attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NoteAttribute {
    /// The attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A single tax applied to an order or line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// The name of the tax (e.g., "GST", "State tax").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The amount of tax charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// The tax rate as a decimal fraction (e.g., 0.06).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// A shipping method chosen for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    /// The unique identifier of the shipping line.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// A reference to the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The price of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// The source of the shipping method (e.g., "shopify").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The title of the shipping method shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Taxes applied to the shipping cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}

/// A discount code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscountCode {
    /// The code that was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The amount deducted from the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// The discount type: "percentage", "shipping", or "fixed_amount".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A single item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// The unique identifier of the line item.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The id of the product variant being ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The id of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The title of the product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// The name of the item as displayed on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The stock keeping unit of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// The number of units ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The number of units still to be fulfilled.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub fulfillable_quantity: Option<i64>,

    /// The fulfillment status of the item: "fulfilled", "partial", or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// The price of the item before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The total discount applied to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,

    /// The weight of the item in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// Whether the item requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Whether the item is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Whether the item is a gift card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    /// Custom properties entered for the item at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<NoteAttribute>>,

    /// Taxes applied to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}
