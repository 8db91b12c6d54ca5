// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account API: OAuth tokens, sessions and the current user.

use super::client::{segment, AppwriteClient};
use crate::error::Result;
use crate::models::{Session, User};
use std::fmt;
use url::Url;

/// Session marker for "the session making this request".
pub const CURRENT_SESSION: &str = "current";

/// OAuth2 providers enabled for the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
    Apple,
    Facebook,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
            OAuthProvider::Apple => "apple",
            OAuthProvider::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account service bound to a client.
#[derive(Clone)]
pub struct Account {
    client: AppwriteClient,
}

impl Account {
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    /// Build the URL that starts an OAuth2 token flow.
    ///
    /// The browser is sent here; after the provider authorizes the user,
    /// Appwrite redirects to `success` with `userId` and `secret` query
    /// parameters. Nothing is sent to the server. Returns `None` when the
    /// URL can't be built.
    pub fn create_oauth2_token(
        &self,
        provider: OAuthProvider,
        success: Option<&str>,
        failure: Option<&str>,
        scopes: &[&str],
    ) -> Option<Url> {
        let path = format!("/account/tokens/oauth2/{}", segment(provider.as_str()));

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(success) = success {
            params.push(("success", success));
        }
        if let Some(failure) = failure {
            params.push(("failure", failure));
        }
        for scope in scopes {
            params.push(("scopes[]", *scope));
        }

        match self.client.public_url(&path, &params) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, provider = %provider, "Failed to build OAuth2 token URL");
                None
            }
        }
    }

    /// Exchange a `userId`/`secret` pair for a session.
    pub async fn create_session(&self, user_id: &str, secret: &str) -> Result<Session> {
        let body = serde_json::json!({
            "userId": user_id,
            "secret": secret,
        });
        let session: Session = self
            .client
            .post_json("/account/sessions/token", &body)
            .await?;

        tracing::info!(user_id = %session.user_id, session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Delete a session by ID, or [`CURRENT_SESSION`].
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let path = format!("/account/sessions/{}", segment(session_id));
        self.client.delete(&path).await?;

        if session_id == CURRENT_SESSION {
            self.client.clear_session().await;
        }
        Ok(())
    }

    /// Get the signed-in user.
    pub async fn get(&self) -> Result<User> {
        self.client.get_json("/account", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth2_token_url() {
        let client = AppwriteClient::new("https://cloud.appwrite.io/v1", "proj", "com.example");
        let account = Account::new(client);

        let url = account
            .create_oauth2_token(
                OAuthProvider::Google,
                Some("jikmunn-real-estate://"),
                None,
                &[],
            )
            .expect("url");

        assert_eq!(url.path(), "/v1/account/tokens/oauth2/google");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("success".to_string(), "jikmunn-real-estate://".to_string()),
                ("project".to_string(), "proj".to_string()),
            ]
        );
    }

    #[test]
    fn test_oauth2_token_url_invalid_endpoint() {
        let client = AppwriteClient::new("not a url", "proj", "com.example");
        let account = Account::new(client);
        assert!(account
            .create_oauth2_token(OAuthProvider::Github, None, None, &[])
            .is_none());
    }
}
