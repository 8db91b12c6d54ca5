// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Databases API: list and fetch documents.

use super::client::{segment, AppwriteClient};
use super::query::Query;
use crate::error::Result;
use crate::models::{Document, DocumentList};

/// Databases service bound to a client.
#[derive(Clone)]
pub struct Databases {
    client: AppwriteClient,
}

impl Databases {
    pub fn new(client: AppwriteClient) -> Self {
        Self { client }
    }

    fn documents_path(database_id: &str, collection_id: &str) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            segment(database_id),
            segment(collection_id)
        )
    }

    /// List documents matching `queries`, applied in order.
    pub async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList> {
        let path = Self::documents_path(database_id, collection_id);
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|q| ("queries[]", q.to_string()))
            .collect();

        let list: DocumentList = self.client.get_json(&path, &params).await?;
        tracing::debug!(
            collection = collection_id,
            total = list.total,
            returned = list.documents.len(),
            "Listed documents"
        );
        Ok(list)
    }

    /// Fetch one document by ID.
    pub async fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Document> {
        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            segment(document_id)
        );
        self.client.get_json(&path, &[]).await
    }
}
