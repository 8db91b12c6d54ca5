// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed Appwrite REST client.

pub mod account;
pub mod assets;
pub mod client;
pub mod databases;
pub mod query;

pub use account::{Account, OAuthProvider, CURRENT_SESSION};
pub use assets::{Avatars, Storage};
pub use client::AppwriteClient;
pub use databases::Databases;
pub use query::{Query, QueryMethod, CREATED_AT};
