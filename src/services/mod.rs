//! Per-resource service objects.
//!
//! Each service is a thin wrapper over an [`ApiClient`](crate::ApiClient):
//! a method builds one request descriptor, executes exactly one HTTP
//! call, and unwraps the response payload from its root key. Services
//! hold no state beyond the client and are cheap to clone; construct
//! them either from [`Credentials`](crate::Credentials) or from a shared
//! client via `with_client`.

mod customers;
mod orders;
mod products;
mod variants;

pub use customers::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
pub use variants::ProductVariantService;
