// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Low-level Appwrite REST client.
//!
//! Handles:
//! - Project/platform headers on every request
//! - Session credential persistence via the fallback-cookie header
//! - Mapping non-2xx responses to [`AppError::Api`]

use crate::error::{AppError, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

const RESPONSE_FORMAT: &str = "1.6.0";
const HEADER_PROJECT: &str = "X-Appwrite-Project";
const HEADER_PLATFORM: &str = "X-Appwrite-Platform";
const HEADER_RESPONSE_FORMAT: &str = "X-Appwrite-Response-Format";
/// Session cookies travel in this header for clients without a cookie jar.
pub(crate) const HEADER_FALLBACK_COOKIES: &str = "X-Fallback-Cookies";

/// Shared connection to one Appwrite project.
///
/// Cloning is cheap; clones share the HTTP pool and the session credential.
#[derive(Clone)]
pub struct AppwriteClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    platform: String,
    /// Opaque session credential from the last response that set one.
    session: Arc<RwLock<Option<String>>>,
}

impl AppwriteClient {
    /// Connect to `endpoint` (e.g. `https://cloud.appwrite.io/v1`).
    pub fn new(endpoint: &str, project_id: &str, platform: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            platform: platform.to_string(),
            session: Arc::new(RwLock::new(None)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Whether a session credential is currently held.
    pub async fn has_session(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub(crate) async fn clear_session(&self) {
        *self.session.write().await = None;
    }

    /// Absolute URL for an API path (path must start with `/`).
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.endpoint, path))?)
    }

    /// URL for a resource fetched directly by a browser or image view,
    /// which can't send headers, so the project goes in the query string.
    pub(crate) fn public_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("project", &self.project_id);
        }
        Ok(url)
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(HEADER_PROJECT, &self.project_id)
            .header(HEADER_PLATFORM, &self.platform)
            .header(HEADER_RESPONSE_FORMAT, RESPONSE_FORMAT);

        if let Some(cookie) = self.session.read().await.as_deref() {
            builder = builder.header(HEADER_FALLBACK_COOKIES, cookie);
        }
        Ok(builder)
    }

    /// Send a request, remember any session credential, and check status.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;

        if let Some(cookie) = response
            .headers()
            .get(HEADER_FALLBACK_COOKIES)
            .and_then(|h| h.to_str().ok())
        {
            *self.session.write().await = Some(cookie.to_string());
        }

        self.check_response(response).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let err = AppError::from_response(status, &body);

        if status >= 500 {
            tracing::warn!(status, error = %err, "Appwrite server error");
        } else {
            tracing::debug!(status, error = %err, "Appwrite request rejected");
        }
        Err(err)
    }

    /// Generic GET request with JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.request(Method::GET, path).await?.query(query);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and parse the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).await?.json(body);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// DELETE a resource; the response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path).await?;
        self.send(builder).await?;
        Ok(())
    }
}

/// Percent-encode a single path segment (IDs, provider names).
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
