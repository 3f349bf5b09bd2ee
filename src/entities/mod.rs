//! Entity records for the Admin REST resources.
//!
//! Entities are passive data carriers shaped 1:1 after the platform's
//! JSON: every field is optional, nothing is validated client-side, and
//! the same struct is used for responses and for create/update payloads.
//! Server-owned fields (ids, counters, timestamps) carry
//! `#[serde(skip_serializing)]` so they never leak into outbound bodies.

mod common;
mod customer;
mod order;
mod product;
mod variant;

pub use common::{Address, DiscountCode, LineItem, NoteAttribute, ShippingLine, TaxLine};
pub use customer::Customer;
pub use order::{ClientDetails, Fulfillment, Order, PaymentDetails, Transaction};
pub use product::{Product, ProductImage, ProductOption};
pub use variant::{Variant, WeightUnit};
