use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::ParamValue;

/// A transport-agnostic HTTP response produced by the engine.
///
/// The status code is not range-checked. A `None` body means the engine
/// produced no body at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, ParamValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RawResponse {
    /// Create a response with no headers and no body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Create a response carrying a JSON body.
    pub fn json(status_code: u16, body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(status_code)
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.headers.insert(name.into(), value.into());
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
    fn new_has_no_body() {
        let res = RawResponse::new(204);
        assert_eq!(res.status_code, 204);
        assert!(res.headers.is_empty());
        assert!(res.body.is_none());
    }

    #[test]
    fn json_sets_body() {
        let res = RawResponse::json(200, json!({"ok": true})).with_header("X-Id", "42");
        assert_eq!(res.body, Some(json!({"ok": true})));
        assert_eq!(res.headers.get("X-Id"), Some(&ParamValue::from("42")));
    }

    #[test]
    fn deserializes_engine_shape() {
        let res: RawResponse = serde_json::from_value(json!({
            "statusCode": 201,
            "headers": {"Location": "/pets/1", "Set-Cookie": ["a=1", "b=2"]},
            "body": {"id": 1}
        }))
        .unwrap();

        assert_eq!(res.status_code, 201);
        assert_eq!(res.headers["Location"], ParamValue::from("/pets/1"));
        assert_eq!(res.headers["Set-Cookie"], ParamValue::from(vec!["a=1", "b=2"]));
        assert_eq!(res.body, Some(json!({"id": 1})));
    }

    #[test]
    fn missing_headers_and_body_default() {
        let res: RawResponse = serde_json::from_value(json!({"statusCode": 204})).unwrap();
        assert!(res.headers.is_empty());
        assert!(res.body.is_none());
    }
}
