// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive browser collaborator for the OAuth flow.

use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Outcome of an in-app authentication browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserResult {
    /// The flow reached the redirect prefix; `url` is the full callback URL.
    Success { url: String },
    /// The user closed the browser.
    Cancel,
    /// The system dismissed the browser.
    Dismiss,
}

/// Host-provided browser used to complete OAuth sign-in.
#[async_trait]
pub trait AuthBrowser: Send + Sync {
    /// Send the current web page to `url`.
    async fn navigate(&self, url: &Url) -> Result<()>;

    /// Open an auth session at `url` and wait until the browser is
    /// redirected to a URL starting with `redirect_prefix`, or closed.
    async fn open_auth_session(&self, url: &Url, redirect_prefix: &str) -> Result<BrowserResult>;
}

/// `userId`/`secret` pair handed back by the OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCallback {
    pub user_id: String,
    pub secret: String,
}

/// Extract the token pair from a callback URL. Both parameters must be
/// present and non-empty.
pub fn parse_oauth_callback(callback: &str) -> Option<OAuthCallback> {
    let url = Url::parse(callback).ok()?;

    let mut user_id = None;
    let mut secret = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "userId" => user_id = Some(value.into_owned()),
            "secret" => secret = Some(value.into_owned()),
            _ => {}
        }
    }

    match (user_id, secret) {
        (Some(user_id), Some(secret)) if !user_id.is_empty() && !secret.is_empty() => {
            Some(OAuthCallback { user_id, secret })
        }
        _ => None,
    }
}
