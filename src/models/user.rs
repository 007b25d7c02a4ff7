//! User model

use serde::{Deserialize, Serialize};

/// Account record returned by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Provider-assigned user id
    pub id: String,
    pub email: String,
}
