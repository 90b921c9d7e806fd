//! Auth sessions and account types.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Marketplace account classification.
///
/// The backend stores these as uppercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Customer,
    Supplier,
}

impl AccountType {
    /// Wire name of the account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Supplier => "SUPPLIER",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bearer session obtained from a successful register or login exchange.
///
/// Held in memory only for the duration of one supplier's product-creation
/// loop; there is no renewal, the session dies with the process.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Opaque bearer token for authenticated mutations.
    pub token: String,
    /// Refresh token, carried but never exercised by these tools.
    pub refresh_token: Option<String>,
    /// Email of the account the session belongs to.
    pub owner_email: Email,
}

impl AuthSession {
    /// Build a session, rejecting empty tokens.
    ///
    /// The backend has been observed reporting `success: true` with a
    /// missing token; callers must treat that as a failed authentication,
    /// which this constructor enforces.
    #[must_use]
    pub fn new(token: String, refresh_token: Option<String>, owner_email: Email) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token,
            refresh_token,
            owner_email,
        })
    }
}
