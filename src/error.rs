// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for Appwrite calls and the OAuth flow.

use serde::Deserialize;

/// Runtime error from a backend operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Appwrite API error ({status}, {kind}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("OAuth flow failed: {0}")]
    OAuth(String),

    #[error("Session was not created")]
    SessionNotCreated,

    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Error body returned by Appwrite on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl AppError {
    /// Build an API error from a status code and the raw response body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => AppError::Api {
                status: if parsed.code == 0 { status } else { parsed.code },
                kind: parsed.kind,
                message: parsed.message,
            },
            Err(_) => AppError::Api {
                status,
                kind: String::new(),
                message: body.to_string(),
            },
        }
    }

    /// True for 404 responses and locally detected missing resources.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotFound(_) => true,
            AppError::Api { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// True when the caller has no (or an expired) session.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            AppError::Api { status, kind, .. } => {
                *status == 401 || kind.starts_with("general_unauthorized")
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Http(e.to_string())
        }
    }
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, AppError>;
