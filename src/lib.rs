//! # Shopify Admin REST Client
//!
//! A typed async client for the Shopify Admin REST API, organized as
//! per-resource services over entity records that mirror the platform's
//! JSON shapes.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration newtypes via [`Credentials`], [`ShopDomain`],
//!   [`AccessToken`], and [`ApiVersion`]
//! - Passive entity records under [`entities`] that deserialize API
//!   responses and serialize create/update payloads
//! - Per-resource services under [`services`] where each method issues
//!   exactly one HTTP call
//! - A shared [`ApiClient`] handling headers, paths, and root-key
//!   unwrapping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopify_rest::{AccessToken, Credentials, ShopDomain};
//! use shopify_rest::services::ProductVariantService;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new(
//!     ShopDomain::new("my-store")?,
//!     AccessToken::new("shpat_example")?,
//! );
//!
//! let variants = ProductVariantService::new(&credentials);
//!
//! let count = variants.count(632910392).await?;
//! println!("product has {count} variants");
//!
//! let all = variants.list(632910392, None).await?;
//! for variant in &all {
//!     println!("{:?} - {:?}", variant.title, variant.price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating and Updating Resources
//!
//! Entities are plain structs; set the fields you want to send and leave
//! the rest `None`. Server-owned fields (ids, counters, timestamps) are
//! never serialized into request bodies:
//!
//! ```rust,no_run
//! use shopify_rest::entities::Variant;
//! # use shopify_rest::services::ProductVariantService;
//! # async fn run(variants: ProductVariantService) -> Result<(), Box<dyn std::error::Error>> {
//! let new_variant = Variant {
//!     title: Some("Large / Blue".to_string()),
//!     price: Some("29.99".to_string()),
//!     sku: Some("PROD-LG-BL".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut created = variants.create(632910392, &new_variant).await?;
//!
//! created.price = Some("24.99".to_string());
//! let updated = variants.update(&created).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Sharing a Client
//!
//! Services constructed from the same [`ApiClient`] share one connection
//! pool:
//!
//! ```rust,no_run
//! use shopify_rest::{AccessToken, ApiClient, Credentials, ShopDomain};
//! use shopify_rest::services::{OrderService, ProductService};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new(
//!     ShopDomain::new("my-store")?,
//!     AccessToken::new("shpat_example")?,
//! );
//! let client = ApiClient::new(&credentials);
//!
//! let orders = OrderService::with_client(client.clone());
//! let products = ProductService::with_client(client);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **One call per method**: no retries, no pagination walking, no
//!   caching; every failure surfaces as an [`Error`]
//! - **Fail-fast validation**: configuration newtypes validate on
//!   construction
//! - **Thread-safe**: services and the client are `Send + Sync` and
//!   cheap to clone
//! - **Async-first**: designed for the Tokio runtime

pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod filters;
pub mod services;

// Re-export the types most callers need at the crate root
pub use client::ApiClient;
pub use config::{AccessToken, ApiVersion, Credentials, ShopDomain};
pub use error::{ConfigError, Error};
pub use filters::{CountFilter, ListFilter};
