// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod document;
pub mod search;
pub mod user;

pub use document::{Document, DocumentList};
pub use search::{SearchParams, ALL_FILTER};
pub use user::{Identity, Session, User};
