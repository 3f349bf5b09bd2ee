//! Service for order endpoints.

use serde_json::json;

use crate::client::{ApiClient, Method, Request};
use crate::config::Credentials;
use crate::entities::Order;
use crate::error::Error;
use crate::filters::{self, CountFilter, ListFilter};

/// Manages a shop's orders, including the close/open/cancel state
/// transitions.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::services::OrderService;
///
/// let service = OrderService::new(&credentials);
/// let open_orders = service.list(None).await?;
/// let order = service.get(450789469).await?;
/// ```
#[derive(Clone, Debug)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
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

    /// Counts the shop's orders.
    ///
    /// `GET orders/count.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn count(&self, filter: Option<&CountFilter>) -> Result<u64, Error> {
        let mut builder = Request::builder(Method::Get, "orders/count").root_key("count");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Lists the shop's orders.
    ///
    /// `GET orders.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Order>, Error> {
        let mut builder = Request::builder(Method::Get, "orders").root_key("orders");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Retrieves an order by id.
    ///
    /// `GET orders/{order_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn get(&self, order_id: u64) -> Result<Order, Error> {
        let request = Request::builder(Method::Get, format!("orders/{order_id}"))
            .root_key("order")
            .build()?;
        self.client.execute(request).await
    }

    /// Creates an order, returning the created order with its
    /// server-assigned fields.
    ///
    /// `POST orders.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn create(&self, order: &Order) -> Result<Order, Error> {
        let request = Request::builder(Method::Post, "orders")
            .root_key("order")
            .body(json!({ "order": order }))
            .build()?;
        self.client.execute(request).await
    }

    /// Updates an order, returning the updated order.
    ///
    /// `PUT orders/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] when `order.id` is unset, and
    /// otherwise any [`Error`] the request produces.
    pub async fn update(&self, order: &Order) -> Result<Order, Error> {
        let id = order.id.ok_or(Error::MissingId { resource: "order" })?;
        let request = Request::builder(Method::Put, format!("orders/{id}"))
            .root_key("order")
            .body(json!({ "order": order }))
            .build()?;
        self.client.execute(request).await
    }

    /// Deletes an order.
    ///
    /// `DELETE orders/{order_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails.
    pub async fn delete(&self, order_id: u64) -> Result<(), Error> {
        let request = Request::builder(Method::Delete, format!("orders/{order_id}")).build()?;
        self.client.execute_empty(request).await
    }

    /// Closes an order, returning the closed order.
    ///
    /// `POST orders/{order_id}/close.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn close(&self, order_id: u64) -> Result<Order, Error> {
        self.transition(order_id, "close").await
    }

    /// Re-opens a closed order, returning the re-opened order.
    ///
    /// `POST orders/{order_id}/open.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn open(&self, order_id: u64) -> Result<Order, Error> {
        self.transition(order_id, "open").await
    }

    /// Cancels an order, returning the cancelled order.
    ///
    /// `POST orders/{order_id}/cancel.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn cancel(&self, order_id: u64) -> Result<Order, Error> {
        self.transition(order_id, "cancel").await
    }

    async fn transition(&self, order_id: u64, action: &str) -> Result<Order, Error> {
        let request = Request::builder(Method::Post, format!("orders/{order_id}/{action}"))
            .root_key("order")
            .body(json!({}))
            .build()?;
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_without_id_fails_before_any_request() {
        let service = OrderService::with_client(ApiClient::with_base_url("http://127.0.0.1:1", ""));
        let order = Order {
            note: Some("updated note".to_string()),
            ..Default::default()
        };

        let result = service.update(&order).await;
        assert!(matches!(
            result,
            Err(Error::MissingId { resource: "order" })
        ));
    }
}
