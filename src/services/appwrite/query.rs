// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Appwrite query clauses.
//!
//! Each clause is sent as a JSON string in a repeated `queries[]`
//! parameter, e.g. `{"method":"equal","attribute":"type","values":["House"]}`.
//! `attribute` and `values` are omitted when unset.

use serde_json::{Map, Value};
use std::fmt;

/// System attribute holding a document's creation time.
pub const CREATED_AT: &str = "$createdAt";

/// Query method names as understood by the Appwrite API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMethod {
    Equal,
    Search,
    OrderAsc,
    OrderDesc,
    Limit,
    Or,
}

impl QueryMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryMethod::Equal => "equal",
            QueryMethod::Search => "search",
            QueryMethod::OrderAsc => "orderAsc",
            QueryMethod::OrderDesc => "orderDesc",
            QueryMethod::Limit => "limit",
            QueryMethod::Or => "or",
        }
    }
}

/// A single query clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub method: QueryMethod,
    pub attribute: Option<String>,
    pub values: Option<Vec<Value>>,
}

impl Query {
    fn new(method: QueryMethod, attribute: Option<&str>, values: Option<Vec<Value>>) -> Self {
        Self {
            method,
            attribute: attribute.map(str::to_string),
            values,
        }
    }

    /// Ascending sort by `attribute`.
    pub fn order_asc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderAsc, Some(attribute), None)
    }

    /// Descending sort by `attribute`.
    pub fn order_desc(attribute: &str) -> Self {
        Self::new(QueryMethod::OrderDesc, Some(attribute), None)
    }

    /// Exact match of `attribute` against `value`.
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::new(QueryMethod::Equal, Some(attribute), Some(vec![value.into()]))
    }

    /// Full-text search of `attribute` (needs a fulltext index server-side).
    pub fn search(attribute: &str, text: &str) -> Self {
        Self::new(
            QueryMethod::Search,
            Some(attribute),
            Some(vec![Value::from(text)]),
        )
    }

    /// Cap the number of returned documents.
    pub fn limit(limit: u32) -> Self {
        Self::new(QueryMethod::Limit, None, Some(vec![Value::from(limit)]))
    }

    /// Match if any of `queries` matches. Nested clauses are embedded as
    /// objects, not strings.
    pub fn or(queries: Vec<Query>) -> Self {
        let nested = queries.iter().map(Query::to_value).collect();
        Self::new(QueryMethod::Or, None, Some(nested))
    }

    /// JSON object form of this clause.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("method".to_string(), Value::from(self.method.as_str()));
        if let Some(attribute) = &self.attribute {
            obj.insert("attribute".to_string(), Value::from(attribute.as_str()));
        }
        if let Some(values) = &self.values {
            obj.insert("values".to_string(), Value::Array(values.clone()));
        }
        Value::Object(obj)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
