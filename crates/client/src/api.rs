//! Typed mutation payloads and the API seam the pipeline is written against.

use serde::Deserialize;

use wms_core::{AccountType, Email, ProductCandidate, SupplierCandidate};

use crate::ClientError;

/// Payload of the `register` mutation.
///
/// `success` alone is not proof of a usable account: the backend has been
/// observed reporting success with a missing token. Callers must check
/// [`RegisterPayload::session_token`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    /// Raw error detail, shape varies by failure (list or field map).
    pub errors: Option<serde_json::Value>,
}

impl RegisterPayload {
    /// The session token, only when registration genuinely succeeded.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Payload of the `login` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl LoginPayload {
    /// The session token, only when it is present and non-empty.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// User details embedded in login and updateUser payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_type: Option<AccountType>,
}

/// Payload of the `createProduct` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub product: Option<ProductSummary>,
}

/// The created product, as echoed back by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Payload of the `updateUser` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<UserInfo>,
}

/// The mutations the provisioning pipeline needs.
///
/// [`crate::GraphqlClient`] is the production implementation; tests drive
/// the pipeline with a scripted fake instead of a live backend.
#[allow(async_fn_in_trait)]
pub trait MarketplaceApi {
    /// Register a new supplier account.
    async fn register(&self, candidate: &SupplierCandidate) -> Result<RegisterPayload, ClientError>;

    /// Exchange credentials for a session token.
    async fn login(&self, email: &Email, password: &str) -> Result<LoginPayload, ClientError>;

    /// Create a product under the supplier owning `token`.
    async fn create_product(
        &self,
        token: &str,
        candidate: &ProductCandidate,
    ) -> Result<CreateProductPayload, ClientError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_token_requires_success() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "success": false,
            "token": "abc",
            "refreshToken": null,
            "errors": ["Email already exists"]
        }))
        .unwrap();
        assert!(payload.session_token().is_none());
    }

    #[test]
    fn test_register_empty_token_is_not_a_session() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "success": true,
            "token": "",
        }))
        .unwrap();
        assert!(payload.session_token().is_none());
    }

    #[test]
    fn test_register_success_with_token() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "success": true,
            "token": "abc",
            "refreshToken": "def",
            "errors": null
        }))
        .unwrap();
        assert_eq!(payload.session_token(), Some("abc"));
    }

    #[test]
    fn test_login_payload_deserializes_user() {
        let payload: LoginPayload = serde_json::from_value(serde_json::json!({
            "token": "tok",
            "refreshToken": "ref",
            "user": {
                "id": "42",
                "email": "user@example.com",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "accountType": "SUPPLIER"
            }
        }))
        .unwrap();
        assert_eq!(payload.session_token(), Some("tok"));
        let user = payload.user.unwrap();
        assert_eq!(user.account_type, Some(AccountType::Supplier));
    }
}
