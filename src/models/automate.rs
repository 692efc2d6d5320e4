//! Automate items. Field names follow the API's PascalCase.

use serde::{Deserialize, Serialize};

/// A contact (`Contacts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutomateContact {
    /// Contact id.
    pub id: i64,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Client the contact belongs to.
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Location within the client.
    #[serde(default)]
    pub location_id: Option<i64>,
}

/// Response of `POST apitoken`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenResult {
    /// Bearer token; absent when the exchange was refused.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Expiry timestamp as sent by the server.
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// Response of `GET apitoken`: the identity behind the current token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthInformation {
    /// Id of the authenticated user.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Name of the authenticated user.
    #[serde(default)]
    pub user_name: Option<String>,
    /// True for super admins.
    #[serde(default)]
    pub is_super_admin: Option<bool>,
}
