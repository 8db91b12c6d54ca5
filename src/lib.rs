// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Realty backend: client layer between the real-estate app and its
//! Appwrite project.
//!
//! This crate provides OAuth sign-in/out, current-user lookup and the
//! property listing queries used by the app, on top of a small typed
//! Appwrite REST client.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::Backend;
