// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend connection configuration loaded from environment variables.
//!
//! Read once at startup and passed to [`crate::services::Backend`]; nothing
//! in the crate reads the environment after that.

use std::env;

use crate::services::platform::{BuildMode, RedirectTargets};

/// Redirect used by native development builds (Expo dev server).
pub const DEFAULT_DEV_REDIRECT_URI: &str = "exp://192.168.68.204:8081/--/";
/// Redirect used by native production builds (app URL scheme).
pub const DEFAULT_SCHEME_REDIRECT_URI: &str = "jikmunn-real-estate://";

/// Backend configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Appwrite API endpoint, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: String,
    /// Appwrite project ID
    pub project_id: String,
    /// Registered platform identifier (bundle ID / package name)
    pub platform: String,
    /// Database ID
    pub database_id: String,

    // --- Collections ---
    pub properties_collection_id: String,
    pub reviews_collection_id: String,
    pub agents_collection_id: String,
    pub galleries_collection_id: String,

    /// Storage bucket for property images
    pub bucket_id: Option<String>,

    /// OAuth redirect targets for native builds
    pub redirects: RedirectTargets,
    pub build_mode: BuildMode,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let endpoint = required("APPWRITE_API_ENDPOINT")?;
        url::Url::parse(&endpoint).map_err(|e| ConfigError::InvalidEndpoint(e.to_string()))?;

        let build_mode = match env::var("APP_BUILD_MODE") {
            Ok(mode) => mode
                .parse::<BuildMode>()
                .map_err(|_| ConfigError::InvalidBuildMode(mode))?,
            Err(_) => BuildMode::default(),
        };

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: required("APPWRITE_PROJECT_ID")?,
            platform: required("APPWRITE_PLATFORM")?,
            database_id: required("APPWRITE_DB_ID")?,
            properties_collection_id: required("APPWRITE_DB_PROPERTIES_COLLECTION_ID")?,
            reviews_collection_id: optional("APPWRITE_DB_REVIEWS_COLLECTION_ID").unwrap_or_default(),
            agents_collection_id: optional("APPWRITE_DB_AGENTS_COLLECTION_ID").unwrap_or_default(),
            galleries_collection_id: optional("APPWRITE_DB_GALLERIES_COLLECTION_ID")
                .unwrap_or_default(),
            bucket_id: optional("APPWRITE_DB_STORAGE_BUCKET_ID"),
            redirects: RedirectTargets {
                development: optional("APP_DEV_REDIRECT_URI")
                    .unwrap_or_else(|| DEFAULT_DEV_REDIRECT_URI.to_string()),
                production: optional("APP_SCHEME_REDIRECT_URI")
                    .unwrap_or_else(|| DEFAULT_SCHEME_REDIRECT_URI.to_string()),
            },
            build_mode,
        })
    }

    /// Fully-populated config for tests.
    pub fn test_default() -> Self {
        Self::for_endpoint("http://localhost:8080/v1")
    }

    /// Test config targeting a specific endpoint (e.g. a mock server).
    pub fn for_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: "test-project".to_string(),
            platform: "com.example.realestate".to_string(),
            database_id: "test-db".to_string(),
            properties_collection_id: "properties".to_string(),
            reviews_collection_id: "reviews".to_string(),
            agents_collection_id: "agents".to_string(),
            galleries_collection_id: "galleries".to_string(),
            bucket_id: Some("property-images".to_string()),
            redirects: RedirectTargets::default(),
            build_mode: BuildMode::Production,
        }
    }
}

/// Read a required variable; empty or whitespace-only counts as missing.
fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid APPWRITE_API_ENDPOINT: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid APP_BUILD_MODE: {0} (expected development or production)")]
    InvalidBuildMode(String),
}
