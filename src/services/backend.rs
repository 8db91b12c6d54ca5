// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend facade used by application code.
//!
//! Every public operation returns a plain value and never an error:
//! `false`, `None` or an empty list means "could not complete", and the
//! cause is logged. The `try_*` variants return the underlying
//! [`AppError`] for callers that need to tell causes apart.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Document, Identity, SearchParams};
use crate::services::appwrite::{
    Account, AppwriteClient, Avatars, Databases, OAuthProvider, Query, Storage, CREATED_AT,
    CURRENT_SESSION,
};
use crate::services::browser::{parse_oauth_callback, AuthBrowser, BrowserResult};
use crate::services::platform::{redirect_uri, BuildMode, Platform};
use std::sync::Arc;

/// Number of listings in the "latest" strip.
pub const LATEST_LIMIT: u32 = 5;

/// Searchable listing attributes.
const SEARCH_FIELDS: [&str; 3] = ["name", "address", "type"];

/// Build the query for a listing search.
///
/// Always newest first; adds a type match, an any-field text search and a
/// result cap only when the corresponding parameter is set.
pub fn search_queries(params: &SearchParams) -> Vec<Query> {
    let mut queries = vec![Query::order_desc(CREATED_AT)];

    if let Some(filter) = params.type_filter() {
        queries.push(Query::equal("type", filter));
    }

    if let Some(text) = params.search_text() {
        queries.push(Query::or(
            SEARCH_FIELDS
                .iter()
                .map(|field| Query::search(field, text))
                .collect(),
        ));
    }

    if let Some(limit) = params.effective_limit() {
        queries.push(Query::limit(limit));
    }

    queries
}

/// Query for the latest-listings strip.
pub fn latest_queries() -> Vec<Query> {
    vec![Query::order_asc(CREATED_AT), Query::limit(LATEST_LIMIT)]
}

/// Client facade for the listings backend.
///
/// Built once at startup and shared; holds no mutable state of its own.
#[derive(Clone)]
pub struct Backend {
    config: Config,
    platform: Platform,
    build_mode: BuildMode,
    client: AppwriteClient,
    account: Account,
    avatars: Avatars,
    databases: Databases,
    storage: Storage,
    browser: Arc<dyn AuthBrowser>,
}

impl Backend {
    /// Connect using `config`; the build mode comes from the config.
    pub fn new(config: Config, platform: Platform, browser: Arc<dyn AuthBrowser>) -> Self {
        let build_mode = config.build_mode;
        Self::with_build_mode(config, platform, build_mode, browser)
    }

    pub fn with_build_mode(
        config: Config,
        platform: Platform,
        build_mode: BuildMode,
        browser: Arc<dyn AuthBrowser>,
    ) -> Self {
        let client = AppwriteClient::new(&config.endpoint, &config.project_id, &config.platform);

        tracing::info!(
            endpoint = %config.endpoint,
            project = %config.project_id,
            web = platform.is_web(),
            build_mode = ?build_mode,
            "Backend client initialized"
        );

        Self {
            account: Account::new(client.clone()),
            avatars: Avatars::new(client.clone()),
            databases: Databases::new(client.clone()),
            storage: Storage::new(client.clone()),
            client,
            config,
            platform,
            build_mode,
            browser,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared Appwrite handle.
    pub fn client(&self) -> &AppwriteClient {
        &self.client
    }

    /// OAuth redirect for this environment.
    pub fn redirect_uri(&self) -> String {
        redirect_uri(&self.platform, self.build_mode, &self.config.redirects)
    }

    // ─── Authentication ──────────────────────────────────────────────────

    /// Sign in with Google. Returns `true` once a session exists (native) or
    /// the page has been sent to the provider (web).
    pub async fn authenticate(&self) -> bool {
        match self.try_authenticate().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                false
            }
        }
    }

    pub async fn try_authenticate(&self) -> Result<()> {
        let redirect = self.redirect_uri();
        tracing::debug!(redirect = %redirect, "Starting OAuth flow");

        let token_url = self
            .account
            .create_oauth2_token(OAuthProvider::Google, Some(&redirect), None, &[])
            .ok_or_else(|| AppError::OAuth("Create OAuth2 token failed".to_string()))?;

        if self.platform.is_web() {
            self.browser.navigate(&token_url).await?;
            return Ok(());
        }

        let callback = match self
            .browser
            .open_auth_session(&token_url, &redirect)
            .await?
        {
            BrowserResult::Success { url } => url,
            other => {
                return Err(AppError::OAuth(format!(
                    "Browser session did not complete: {:?}",
                    other
                )))
            }
        };

        let params = parse_oauth_callback(&callback).ok_or_else(|| {
            AppError::OAuth("Callback URL is missing userId or secret".to_string())
        })?;

        let session = self
            .account
            .create_session(&params.user_id, &params.secret)
            .await?;
        if session.id.is_empty() {
            return Err(AppError::SessionNotCreated);
        }

        tracing::info!(user_id = %session.user_id, "Signed in");
        Ok(())
    }

    /// Delete the current session.
    pub async fn deauthenticate(&self) -> bool {
        match self.try_deauthenticate().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Logout failed");
                false
            }
        }
    }

    pub async fn try_deauthenticate(&self) -> Result<()> {
        self.account.delete_session(CURRENT_SESSION).await?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// The signed-in user with an initials avatar, or `None` when signed out
    /// or on any failure.
    pub async fn current_identity(&self) -> Option<Identity> {
        match self.try_current_identity().await {
            Ok(identity) => identity,
            Err(e) if e.is_unauthorized() => {
                tracing::debug!(error = %e, "No signed-in user");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch current user");
                None
            }
        }
    }

    pub async fn try_current_identity(&self) -> Result<Option<Identity>> {
        let user = self.account.get().await?;
        if !user.has_id() {
            return Ok(None);
        }

        let avatar = self.avatars.get_initials(&user.name)?.to_string();
        Ok(Some(Identity { user, avatar }))
    }

    // ─── Listings ────────────────────────────────────────────────────────

    /// First five listings by ascending creation time; empty on failure.
    pub async fn latest_records(&self) -> Vec<Document> {
        self.try_latest_records().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch latest properties");
            Vec::new()
        })
    }

    pub async fn try_latest_records(&self) -> Result<Vec<Document>> {
        self.list_properties(&latest_queries()).await
    }

    /// Listings matching `params`, newest first; empty on failure.
    pub async fn search_records(&self, params: &SearchParams) -> Vec<Document> {
        self.try_search_records(params).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, ?params, "Failed to search properties");
            Vec::new()
        })
    }

    pub async fn try_search_records(&self, params: &SearchParams) -> Result<Vec<Document>> {
        self.list_properties(&search_queries(params)).await
    }

    /// One listing by ID; `None` if missing or on failure.
    pub async fn record_by_id(&self, id: &str) -> Option<Document> {
        match self.try_record_by_id(id).await {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to fetch property");
                None
            }
        }
    }

    pub async fn try_record_by_id(&self, id: &str) -> Result<Document> {
        if id.trim().is_empty() {
            return Err(AppError::NotFound("empty property id".to_string()));
        }
        self.databases
            .get_document(
                &self.config.database_id,
                &self.config.properties_collection_id,
                id,
            )
            .await
    }

    /// View URL for a property image in the configured bucket.
    pub fn property_image_url(&self, file_id: &str) -> Option<String> {
        let bucket = self.config.bucket_id.as_deref()?;
        match self.storage.get_file_view(bucket, file_id) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::error!(error = %e, file_id, "Failed to build image URL");
                None
            }
        }
    }

    async fn list_properties(&self, queries: &[Query]) -> Result<Vec<Document>> {
        let list = self
            .databases
            .list_documents(
                &self.config.database_id,
                &self.config.properties_collection_id,
                queries,
            )
            .await?;
        Ok(list.documents)
    }
}
