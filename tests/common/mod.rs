// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use realty_backend::config::Config;
use realty_backend::error::Result;
use realty_backend::services::{AuthBrowser, BrowserResult, BuildMode, Platform};
use realty_backend::Backend;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use url::Url;
use wiremock::MockServer;

/// Path prefix the mock server serves the API under.
#[allow(dead_code)]
pub const API: &str = "/v1";

/// Path of the properties collection for `Config::for_endpoint`.
#[allow(dead_code)]
pub const PROPERTIES_PATH: &str = "/v1/databases/test-db/collections/properties/documents";

/// Browser stand-in that returns a canned result and records calls.
pub struct ScriptedBrowser {
    result: BrowserResult,
    pub navigated: Mutex<Vec<Url>>,
    pub sessions: Mutex<Vec<(Url, String)>>,
}

#[allow(dead_code)]
impl ScriptedBrowser {
    pub fn returning(result: BrowserResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            navigated: Mutex::new(Vec::new()),
            sessions: Mutex::new(Vec::new()),
        })
    }

    pub fn success(callback: &str) -> Arc<Self> {
        Self::returning(BrowserResult::Success {
            url: callback.to_string(),
        })
    }

    pub fn cancel() -> Arc<Self> {
        Self::returning(BrowserResult::Cancel)
    }
}

#[async_trait]
impl AuthBrowser for ScriptedBrowser {
    async fn navigate(&self, url: &Url) -> Result<()> {
        self.navigated.lock().unwrap().push(url.clone());
        Ok(())
    }

    async fn open_auth_session(&self, url: &Url, redirect_prefix: &str) -> Result<BrowserResult> {
        self.sessions
            .lock()
            .unwrap()
            .push((url.clone(), redirect_prefix.to_string()));
        Ok(self.result.clone())
    }
}

/// Config pointed at a mock server.
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> Config {
    Config::for_endpoint(&format!("{}{}", server.uri(), API))
}

/// Native production backend against a mock server.
#[allow(dead_code)]
pub fn native_backend(server: &MockServer, browser: Arc<ScriptedBrowser>) -> Backend {
    Backend::with_build_mode(
        mock_config(server),
        Platform::Native,
        BuildMode::Production,
        browser,
    )
}

/// Backend whose endpoint refuses connections.
#[allow(dead_code)]
pub fn unreachable_backend() -> Backend {
    Backend::new(
        Config::for_endpoint("http://127.0.0.1:1/v1"),
        Platform::Native,
        ScriptedBrowser::cancel(),
    )
}

#[allow(dead_code)]
pub fn property_json(id: &str, name: &str, kind: &str, created_at: &str) -> Value {
    json!({
        "$id": id,
        "$collectionId": "properties",
        "$databaseId": "test-db",
        "$createdAt": created_at,
        "$updatedAt": created_at,
        "$permissions": [],
        "name": name,
        "address": "12 Admiralty Way, Lekki, Lagos",
        "type": kind,
        "price": 250000
    })
}

#[allow(dead_code)]
pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "$id": id,
        "$createdAt": "2024-01-10T09:00:00.000+00:00",
        "$updatedAt": "2024-01-10T09:00:00.000+00:00",
        "name": name,
        "email": "ada@example.com",
        "status": true,
        "emailVerification": true,
        "labels": [],
        "prefs": {}
    })
}

#[allow(dead_code)]
pub fn session_json(id: &str, user_id: &str) -> Value {
    json!({
        "$id": id,
        "$createdAt": "2024-01-10T09:00:00.000+00:00",
        "userId": user_id,
        "expire": "2025-01-10T09:00:00.000+00:00",
        "provider": "google",
        "current": true
    })
}

/// Decode the `queries[]` parameters of a recorded request.
#[allow(dead_code)]
pub fn sent_queries(request: &wiremock::Request) -> Vec<Value> {
    request
        .url
        .query_pairs()
        .filter(|(k, _)| k == "queries[]")
        .map(|(_, v)| serde_json::from_str(&v).expect("query is JSON"))
        .collect()
}
