use serde::Serialize;

use crate::body::Body;
use crate::params::{self, ParamValue, StringParams};

/// A transport-agnostic HTTP request as seen by the engine.
///
/// Header names keep the case the transport delivered; use
/// [`RawRequest::header`] for case-insensitive access.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRequest {
    pub method: String,
    pub path: String,
    pub query: StringParams,
    pub headers: StringParams,
    #[serde(skip_serializing_if = "Body::is_absent")]
    pub body: Body,
}

impl RawRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Get a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&ParamValue> {
        params::lookup(&self.headers, name)
    }

    /// Get a query parameter by exact name.
    pub fn query_param(&self, name: &str) -> Option<&ParamValue> {
        self.query.get(name)
    }
}
