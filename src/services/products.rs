//! Service for product endpoints.

use serde_json::json;

use crate::client::{ApiClient, Method, Request};
use crate::config::Credentials;
use crate::entities::Product;
use crate::error::Error;
use crate::filters::{self, CountFilter, ListFilter};

/// Manages a shop's products.
#[derive(Clone, Debug)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    /// Creates a service for the given shop credentials.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: ApiClient::new(credentials),
        }
    }

    /// Creates a service sharing an existing client.
    #[must_use]
    pub const fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Counts the shop's products.
    ///
    /// `GET products/count.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn count(&self, filter: Option<&CountFilter>) -> Result<u64, Error> {
        let mut builder = Request::builder(Method::Get, "products/count").root_key("count");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Lists the shop's products.
    ///
    /// `GET products.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Product>, Error> {
        let mut builder = Request::builder(Method::Get, "products").root_key("products");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Retrieves a product by id.
    ///
    /// `GET products/{product_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn get(&self, product_id: u64) -> Result<Product, Error> {
        let request = Request::builder(Method::Get, format!("products/{product_id}"))
            .root_key("product")
            .build()?;
        self.client.execute(request).await
    }

    /// Creates a product, returning the created product with its
    /// server-assigned fields.
    ///
    /// `POST products.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn create(&self, product: &Product) -> Result<Product, Error> {
        let request = Request::builder(Method::Post, "products")
            .root_key("product")
            .body(json!({ "product": product }))
            .build()?;
        self.client.execute(request).await
    }

    /// Updates a product, returning the updated product.
    ///
    /// `PUT products/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] when `product.id` is unset, and
    /// otherwise any [`Error`] the request produces.
    pub async fn update(&self, product: &Product) -> Result<Product, Error> {
        let id = product.id.ok_or(Error::MissingId {
            resource: "product",
        })?;
        let request = Request::builder(Method::Put, format!("products/{id}"))
            .root_key("product")
            .body(json!({ "product": product }))
            .build()?;
        self.client.execute(request).await
    }

    /// Deletes a product.
    ///
    /// `DELETE products/{product_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails.
    pub async fn delete(&self, product_id: u64) -> Result<(), Error> {
        let request = Request::builder(Method::Delete, format!("products/{product_id}")).build()?;
        self.client.execute_empty(request).await
    }
}
