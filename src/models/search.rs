// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Listing search parameters.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Filter value meaning "any property type".
pub const ALL_FILTER: &str = "All";

/// Caller-supplied criteria for a listing search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct SearchParams {
    /// Property type to match exactly; `None`, empty or `"All"` disables it
    #[serde(default)]
    pub filter: Option<String>,
    /// Free-text search over name, address and type
    #[serde(default)]
    pub query: String,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn new(filter: impl Into<String>, query: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            filter: Some(filter.into()),
            query: query.into(),
            limit,
        }
    }

    /// The type filter to apply, if any.
    pub fn type_filter(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .filter(|f| !f.is_empty() && *f != ALL_FILTER)
    }

    /// The search text to apply, if any.
    pub fn search_text(&self) -> Option<&str> {
        Some(self.query.as_str()).filter(|q| !q.is_empty())
    }

    /// The result cap to apply, if any. Zero means no cap.
    pub fn effective_limit(&self) -> Option<u32> {
        self.limit.filter(|&l| l > 0)
    }
}
