//! Per-request context passed through the dispatcher and validators

use axum::http::{HeaderMap, Method};
use serde_json::Value;
use std::collections::HashMap;

/// Everything the dispatcher needs to know about one HTTP call.
///
/// Transient: built per request, never persisted or shared across
/// calls. The full context is handed to validators so they can read
/// ambient request information (caller identity headers, query
/// parameters) without the core knowing its shape.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP verb of the request
    pub method: Method,

    /// Item identifier when the URL addressed a single item
    pub id: Option<i64>,

    /// Raw query parameters
    pub query: HashMap<String, String>,

    /// Request headers, available to validators
    pub headers: HeaderMap,

    /// Decoded JSON body, `None` when the request carried no body
    pub body: Option<Value>,
}

impl RequestContext {
    pub fn new(method: Method, id: Option<i64>) -> Self {
        Self {
            method,
            id,
            query: HashMap::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_builders() {
        let ctx = RequestContext::new(Method::POST, None)
            .with_query("p", "2")
            .with_body(json!({"name": "x"}));

        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.id, None);
        assert_eq!(ctx.query.get("p").map(String::as_str), Some("2"));
        assert_eq!(ctx.body, Some(json!({"name": "x"})));
    }
}
