// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Execution environment and OAuth redirect selection.

use crate::config::{DEFAULT_DEV_REDIRECT_URI, DEFAULT_SCHEME_REDIRECT_URI};
use std::str::FromStr;

/// Where the app is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Browser page; `origin` is the page origin, e.g. `https://app.example.com`.
    Web { origin: String },
    /// iOS/Android process.
    Native,
}

impl Platform {
    pub fn is_web(&self) -> bool {
        matches!(self, Platform::Web { .. })
    }
}

/// Build flavor of a native app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl Default for BuildMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl FromStr for BuildMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(()),
        }
    }
}

/// Fixed redirect targets for native builds. Both must be registered as
/// allowed redirects in the Appwrite console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Dev-server deep link
    pub development: String,
    /// App URL scheme
    pub production: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            development: DEFAULT_DEV_REDIRECT_URI.to_string(),
            production: DEFAULT_SCHEME_REDIRECT_URI.to_string(),
        }
    }
}

/// Pick the OAuth redirect for an environment.
pub fn redirect_uri(platform: &Platform, mode: BuildMode, targets: &RedirectTargets) -> String {
    match (platform, mode) {
        (Platform::Web { origin }, _) => origin.clone(),
        (Platform::Native, BuildMode::Development) => targets.development.clone(),
        (Platform::Native, BuildMode::Production) => targets.production.clone(),
    }
}
