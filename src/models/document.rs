// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Database document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schema-flexible document from an Appwrite collection.
///
/// System attributes (`$`-prefixed) are typed; everything else lands in
/// `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,
    #[serde(rename = "$databaseId", default)]
    pub database_id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
    /// User-defined attributes
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Get a string attribute, if present and a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(|v| v.as_str())
    }
}

/// Response of a list-documents call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    /// Total number of matching documents (ignores limit)
    #[serde(default)]
    pub total: u64,
    pub documents: Vec<Document>,
}
