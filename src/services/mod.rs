// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Appwrite client and the backend facade.

pub mod appwrite;
pub mod backend;
pub mod browser;
pub mod platform;

pub use backend::{latest_queries, search_queries, Backend};
pub use browser::{parse_oauth_callback, AuthBrowser, BrowserResult, OAuthCallback};
pub use platform::{redirect_uri, BuildMode, Platform, RedirectTargets};
