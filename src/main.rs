// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Realty backend smoke client
//!
//! Prints the latest listings, or the results of a search when a query is
//! given as the first argument, as JSON.

use async_trait::async_trait;
use realty_backend::{
    config::Config,
    error::Result,
    logging,
    models::SearchParams,
    services::{AuthBrowser, BrowserResult, Platform},
    Backend,
};
use std::sync::Arc;
use url::Url;

/// No interactive browser from a terminal; every sign-in is cancelled.
struct HeadlessBrowser;

#[async_trait]
impl AuthBrowser for HeadlessBrowser {
    async fn navigate(&self, url: &Url) -> Result<()> {
        tracing::info!(url = %url, "Open this URL in a browser to sign in");
        Ok(())
    }

    async fn open_auth_session(&self, url: &Url, _redirect_prefix: &str) -> Result<BrowserResult> {
        tracing::info!(url = %url, "Interactive sign-in is not available");
        Ok(BrowserResult::Cancel)
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Config::from_env()?;
    let backend = Backend::new(config, Platform::Native, Arc::new(HeadlessBrowser));

    let documents = match std::env::args().nth(1) {
        Some(query) => {
            let params = SearchParams {
                query,
                ..Default::default()
            };
            backend.search_records(&params).await
        }
        None => backend.latest_records().await,
    };

    tracing::info!(count = documents.len(), "Fetched properties");
    println!("{}", serde_json::to_string_pretty(&documents)?);
    Ok(())
}
