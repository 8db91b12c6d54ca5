// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Account models: the signed-in user, its derived identity view, and sessions.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Appwrite account record as returned by `GET /account`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct User {
    /// User ID (empty when the backend returned a placeholder)
    #[serde(rename = "$id", default)]
    pub id: String,
    /// Creation time (ISO 8601)
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Account enabled
    #[serde(default)]
    pub status: bool,
    #[serde(rename = "emailVerification", default)]
    pub email_verification: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Free-form user preferences
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, unknown>"))]
    pub prefs: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Whether the record carries a usable identifier.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// The current user augmented with an avatar URL derived from the name.
///
/// Serializes flat, i.e. the user fields plus `avatar`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct Identity {
    #[serde(flatten)]
    pub user: User,
    /// Initials avatar URL
    pub avatar: String,
}

/// Session created from an OAuth token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Expiry (ISO 8601)
    #[serde(default)]
    pub expire: String,
    /// OAuth provider name, or `token` for token-based sessions
    #[serde(default)]
    pub provider: String,
    /// Whether this is the session used by the request
    #[serde(default)]
    pub current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_serializes_flat() {
        let user: User = serde_json::from_value(json!({
            "$id": "u1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "status": true
        }))
        .unwrap();

        let identity = Identity {
            user,
            avatar: "https://example.com/avatars/initials?name=Ada".to_string(),
        };
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["$id"], "u1");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["avatar"], "https://example.com/avatars/initials?name=Ada");
        assert!(value.get("user").is_none());
    }

    #[test]
    fn test_user_without_id() {
        let user: User = serde_json::from_value(json!({ "name": "Ghost" })).unwrap();
        assert!(!user.has_id());
    }
}
