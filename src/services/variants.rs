//! Service for product variant endpoints.

use serde_json::json;

use crate::client::{ApiClient, Method, Request};
use crate::config::Credentials;
use crate::entities::Variant;
use crate::error::Error;
use crate::filters::{self, ListFilter};

/// Manages the variants of a product.
///
/// Variants are nested under their product for count, list, create, and
/// delete; get and update address the variant directly by its own id.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::services::ProductVariantService;
///
/// let service = ProductVariantService::new(&credentials);
/// let count = service.count(632910392).await?;
/// let variants = service.list(632910392, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ProductVariantService {
    client: ApiClient,
}

impl ProductVariantService {
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

    /// Counts the variants of the given product.
    ///
    /// `GET products/{product_id}/variants/count.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn count(&self, product_id: u64) -> Result<u64, Error> {
        let request = Request::builder(Method::Get, format!("products/{product_id}/variants/count"))
            .root_key("count")
            .build()?;
        self.client.execute(request).await
    }

    /// Lists the variants of the given product.
    ///
    /// `GET products/{product_id}/variants.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn list(
        &self,
        product_id: u64,
        filter: Option<&ListFilter>,
    ) -> Result<Vec<Variant>, Error> {
        let mut builder = Request::builder(Method::Get, format!("products/{product_id}/variants"))
            .root_key("variants");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Retrieves a variant by its own id.
    ///
    /// `GET variants/{variant_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn get(&self, variant_id: u64) -> Result<Variant, Error> {
        let request = Request::builder(Method::Get, format!("variants/{variant_id}"))
            .root_key("variant")
            .build()?;
        self.client.execute(request).await
    }

    /// Creates a variant under the given product, returning the created
    /// variant with its server-assigned fields.
    ///
    /// `POST products/{product_id}/variants.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, Error> {
        let request = Request::builder(Method::Post, format!("products/{product_id}/variants"))
            .root_key("variant")
            .body(json!({ "variant": variant }))
            .build()?;
        self.client.execute(request).await
    }

    /// Updates a variant, returning the updated variant.
    ///
    /// `PUT variants/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] when `variant.id` is unset, and
    /// otherwise any [`Error`] the request produces.
    pub async fn update(&self, variant: &Variant) -> Result<Variant, Error> {
        let id = variant.id.ok_or(Error::MissingId {
            resource: "variant",
        })?;
        let request = Request::builder(Method::Put, format!("variants/{id}"))
            .root_key("variant")
            .body(json!({ "variant": variant }))
            .build()?;
        self.client.execute(request).await
    }

    /// Deletes a variant from the given product.
    ///
    /// `DELETE products/{product_id}/variants/{variant_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails.
    pub async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), Error> {
        let request = Request::builder(
            Method::Delete,
            format!("products/{product_id}/variants/{variant_id}"),
        )
        .build()?;
        self.client.execute_empty(request).await
    }
}
