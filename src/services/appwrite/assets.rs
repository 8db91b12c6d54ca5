// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! URL-only services: avatars and storage file views.
//!
//! These endpoints are loaded directly by image views, so the helpers only
//! build URLs and never hit the network.

use super::client::{segment, AppwriteClient};
use crate::error::Result;
use url::Url;

/// Avatars service.
#[derive(Clone)]
pub struct Avatars {
    client: AppwriteClient,
}

impl Avatars {
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    /// Initials image for `name`. Same name, same URL.
    pub fn get_initials(&self, name: &str) -> Result<Url> {
        self.client
            .public_url("/avatars/initials", &[("name", name)])
    }
}

/// Storage service.
#[derive(Clone)]
pub struct Storage {
    client: AppwriteClient,
}

impl Storage {
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    /// Direct view URL for a file in a bucket.
    pub fn get_file_view(&self, bucket_id: &str, file_id: &str) -> Result<Url> {
        let path = format!(
            "/storage/buckets/{}/files/{}/view",
            segment(bucket_id),
            segment(file_id)
        );
        self.client.public_url(&path, &[])
    }
}
