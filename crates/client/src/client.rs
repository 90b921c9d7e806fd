//! The HTTP transport: one POST endpoint, a JSON envelope, typed payloads.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, error};
use url::Url;

use wms_core::{AccountType, Email, ProductCandidate, SupplierCandidate};

use crate::api::{
    CreateProductPayload, LoginPayload, MarketplaceApi, RegisterPayload, UpdateUserPayload,
};
use crate::config::{ClientConfig, ConfigError, USER_AGENT};
use crate::operations::Operation;
use crate::{ClientError, GraphQlError};

/// Request envelope: `{query, variables}`.
#[derive(Serialize)]
struct RequestBody<'a> {
    query: &'static str,
    variables: &'a Value,
}

/// Response envelope: `{data}` or `{errors}` (or, on partial failure, both).
#[derive(serde::Deserialize)]
struct ResponseEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlError>>,
}

/// Client for the marketplace GraphQL API.
///
/// Stateless across calls; the underlying `reqwest` client reuses
/// connections as an optimization but no session state lives here. Cheap to
/// clone.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GraphqlClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Execute an operation and return the raw `data` object.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] on connection failure or timeout
    /// - [`ClientError::Http`] on any non-200 status
    /// - [`ClientError::Malformed`] when the body is not valid JSON
    /// - [`ClientError::GraphQl`] when the body carries a top-level
    ///   `errors` array or no `data` object
    pub async fn execute(
        &self,
        operation: Operation,
        variables: &Value,
        auth_token: Option<&str>,
    ) -> Result<Value, ClientError> {
        let body = RequestBody {
            query: operation.query(),
            variables,
        };

        debug!(operation = operation.name(), "Sending GraphQL request");

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(&body);

        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ClientError::Network)?;

        let status = response.status();

        // Body as text first for better error diagnostics
        let response_text = response.text().await.map_err(ClientError::Network)?;

        if status != StatusCode::OK {
            error!(
                operation = operation.name(),
                status = %status,
                body = %truncate(&response_text, 500),
                "Backend returned non-200 status"
            );
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let envelope: ResponseEnvelope = match serde_json::from_str(&response_text) {
            Ok(e) => e,
            Err(source) => {
                error!(
                    operation = operation.name(),
                    error = %source,
                    body = %truncate(&response_text, 500),
                    "Failed to parse GraphQL response"
                );
                return Err(ClientError::Malformed {
                    body: response_text,
                    source,
                });
            }
        };

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            debug!(
                operation = operation.name(),
                errors = ?errors,
                "GraphQL errors in response"
            );
            return Err(ClientError::GraphQl(errors));
        }

        envelope.data.ok_or_else(|| {
            error!(
                operation = operation.name(),
                body = %truncate(&response_text, 500),
                "GraphQL response has no data and no errors"
            );
            ClientError::GraphQl(vec![GraphQlError::message("No data in response")])
        })
    }

    /// Execute an operation and deserialize its payload field.
    async fn execute_payload<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: &Value,
        auth_token: Option<&str>,
    ) -> Result<T, ClientError> {
        let mut data = self.execute(operation, variables, auth_token).await?;

        // `data` may not even be an object if the backend is broken; indexing
        // would panic, so look the field up instead.
        let payload = data
            .get_mut(operation.payload_field())
            .map_or(Value::Null, Value::take);
        if payload.is_null() {
            return Err(ClientError::GraphQl(vec![GraphQlError::message(format!(
                "No {} payload in response",
                operation.payload_field()
            ))]));
        }

        serde_json::from_value(payload).map_err(|source| ClientError::Malformed {
            body: data.to_string(),
            source,
        })
    }

    /// Register a new supplier account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or payload failure. A returned
    /// payload with `success: false` (or a missing token) is NOT an error at
    /// this level; callers decide via [`RegisterPayload::session_token`].
    pub async fn register(
        &self,
        candidate: &SupplierCandidate,
    ) -> Result<RegisterPayload, ClientError> {
        candidate.validate()?;

        let variables = json!({
            "firstName": candidate.first_name,
            "lastName": candidate.last_name,
            "password1": candidate.password,
            "password2": candidate.password,
            "email": candidate.email,
            "accountType": AccountType::Supplier,
            "termsAccepted": true,
        });

        self.execute_payload(Operation::Register, &variables, None)
            .await
    }

    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or payload failure.
    pub async fn login(&self, email: &Email, password: &str) -> Result<LoginPayload, ClientError> {
        let variables = json!({
            "email": email,
            "password": password,
        });

        self.execute_payload(Operation::Login, &variables, None)
            .await
    }

    /// Create a product under the supplier owning `token`.
    ///
    /// The optional fields the mobile app can send (`subcategory`, `tags`,
    /// `specifications`, ...) are sent as explicit nulls, matching its wire
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when the candidate fails local
    /// checks, otherwise [`ClientError`] on transport or payload failure.
    pub async fn create_product(
        &self,
        token: &str,
        candidate: &ProductCandidate,
    ) -> Result<CreateProductPayload, ClientError> {
        candidate.validate()?;

        let variables = json!({
            "name": candidate.name,
            "description": candidate.description,
            "price": candidate.price,
            "discountPrice": candidate.discount_price,
            "imagesUrl": candidate.images_url,
            "category": candidate.category,
            "subcategory": Value::Null,
            "stockQuantity": candidate.stock_quantity,
            "tags": Value::Null,
            "specifications": Value::Null,
            "dimensions": Value::Null,
            "weight": Value::Null,
            "materials": Value::Null,
            "careInstructions": Value::Null,
        });

        self.execute_payload(Operation::CreateProduct, &variables, Some(token))
            .await
    }

    /// Change the authenticated account's type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or payload failure.
    pub async fn update_account_type(
        &self,
        token: &str,
        account_type: AccountType,
    ) -> Result<UpdateUserPayload, ClientError> {
        let variables = json!({ "accountType": account_type });

        self.execute_payload(Operation::UpdateAccountType, &variables, Some(token))
            .await
    }
}

impl MarketplaceApi for GraphqlClient {
    async fn register(&self, candidate: &SupplierCandidate) -> Result<RegisterPayload, ClientError> {
        Self::register(self, candidate).await
    }

    async fn login(&self, email: &Email, password: &str) -> Result<LoginPayload, ClientError> {
        Self::login(self, email, password).await
    }

    async fn create_product(
        &self,
        token: &str,
        candidate: &ProductCandidate,
    ) -> Result<CreateProductPayload, ClientError> {
        Self::create_product(self, token, candidate).await
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
