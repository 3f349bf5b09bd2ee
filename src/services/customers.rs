//! Service for customer endpoints.

use serde_json::json;

use crate::client::{ApiClient, Method, Request};
use crate::config::Credentials;
use crate::entities::Customer;
use crate::error::Error;
use crate::filters::{self, CountFilter, ListFilter};

/// Manages a shop's customers.
#[derive(Clone, Debug)]
pub struct CustomerService {
    client: ApiClient,
}

impl CustomerService {
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

    /// Counts the shop's customers.
    ///
    /// `GET customers/count.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn count(&self, filter: Option<&CountFilter>) -> Result<u64, Error> {
        let mut builder = Request::builder(Method::Get, "customers/count").root_key("count");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Lists the shop's customers.
    ///
    /// `GET customers.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Customer>, Error> {
        let mut builder = Request::builder(Method::Get, "customers").root_key("customers");
        if let Some(filter) = filter {
            builder = builder.query(filters::to_query(filter));
        }
        self.client.execute(builder.build()?).await
    }

    /// Retrieves a customer by id.
    ///
    /// `GET customers/{customer_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn get(&self, customer_id: u64) -> Result<Customer, Error> {
        let request = Request::builder(Method::Get, format!("customers/{customer_id}"))
            .root_key("customer")
            .build()?;
        self.client.execute(request).await
    }

    /// Creates a customer, returning the created customer with their
    /// server-assigned fields.
    ///
    /// `POST customers.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails or the response cannot
    /// be read.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, Error> {
        let request = Request::builder(Method::Post, "customers")
            .root_key("customer")
            .body(json!({ "customer": customer }))
            .build()?;
        self.client.execute(request).await
    }

    /// Updates a customer, returning the updated customer.
    ///
    /// `PUT customers/{id}.json`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] when `customer.id` is unset, and
    /// otherwise any [`Error`] the request produces.
    pub async fn update(&self, customer: &Customer) -> Result<Customer, Error> {
        let id = customer.id.ok_or(Error::MissingId {
            resource: "customer",
        })?;
        let request = Request::builder(Method::Put, format!("customers/{id}"))
            .root_key("customer")
            .body(json!({ "customer": customer }))
            .build()?;
        self.client.execute(request).await
    }

    /// Deletes a customer. Customers with existing orders cannot be
    /// deleted; the platform rejects the request.
    ///
    /// `DELETE customers/{customer_id}.json`
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the request fails.
    pub async fn delete(&self, customer_id: u64) -> Result<(), Error> {
        let request =
            Request::builder(Method::Delete, format!("customers/{customer_id}")).build()?;
        self.client.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_without_id_fails_before_any_request() {
        let service =
            CustomerService::with_client(ApiClient::with_base_url("http://127.0.0.1:1", ""));
        let customer = Customer {
            first_name: Some("Bob".to_string()),
            ..Default::default()
        };

        let result = service.update(&customer).await;
        assert!(matches!(
            result,
            Err(Error::MissingId {
                resource: "customer"
            })
        ));
    }
}
