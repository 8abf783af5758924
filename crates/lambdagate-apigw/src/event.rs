//! API Gateway REST proxy wire types.
//!
//! Field names follow the camelCase JSON API Gateway delivers and expects.
//! Maps are `Option` because API Gateway sends `null` instead of `{}` when
//! a request has no query string or headers, and map values are `Option`
//! because individual entries may be `null` too.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single-value parameter map as delivered by the platform.
pub type SingleValueMap = BTreeMap<String, Option<String>>;

/// Multi-value parameter map as delivered by the platform.
pub type MultiValueMap = BTreeMap<String, Option<Vec<String>>>;

/// An inbound API Gateway proxy event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<SingleValueMap>,
    #[serde(default)]
    pub multi_value_query_string_parameters: Option<MultiValueMap>,
    #[serde(default)]
    pub headers: Option<SingleValueMap>,
    #[serde(default)]
    pub multi_value_headers: Option<MultiValueMap>,
    #[serde(default)]
    pub path_parameters: Option<SingleValueMap>,
    #[serde(default)]
    pub stage_variables: Option<SingleValueMap>,
    #[serde(default)]
    pub request_context: Value,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyEvent {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
            ..Self::default()
        }
    }
}

/// The result handed back to API Gateway.
///
/// A header name appears in at most one of `headers` and
/// `multi_value_headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResult {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub multi_value_headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

/// Per-invocation context supplied by the Lambda runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    pub aws_request_id: String,
    pub function_name: String,
    pub function_version: String,
    pub invoked_function_arn: String,
    pub memory_limit_in_mb: i32,
    pub log_group_name: String,
    pub log_stream_name: String,
    /// Invocation deadline in milliseconds since the Unix epoch.
    pub deadline_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xray_trace_id: Option<String>,
}

impl InvocationContext {
    /// Milliseconds left before the deadline, saturating at zero.
    pub fn remaining_time_millis(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_null_maps() {
        let event: ApiGatewayProxyEvent = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/",
            "queryStringParameters": null,
            "multiValueQueryStringParameters": null,
            "headers": null,
            "multiValueHeaders": null,
            "body": null,
            "isBase64Encoded": false
        }))
        .unwrap();

        assert_eq!(event, ApiGatewayProxyEvent::new("GET", "/"));
    }

    #[test]
    fn deserializes_null_entries() {
        let event: ApiGatewayProxyEvent = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/",
            "queryStringParameters": {"a": "1", "b": null},
            "multiValueQueryStringParameters": {"a": ["1"], "b": null}
        }))
        .unwrap();

        let single = event.query_string_parameters.unwrap();
        assert_eq!(single["a"], Some("1".to_string()));
        assert_eq!(single["b"], None);

        let multi = event.multi_value_query_string_parameters.unwrap();
        assert_eq!(multi["a"], Some(vec!["1".to_string()]));
        assert_eq!(multi["b"], None);
    }

    #[test]
    fn keeps_request_context_opaque() {
        let event: ApiGatewayProxyEvent = serde_json::from_value(json!({
            "httpMethod": "POST",
            "path": "/pets",
            "requestContext": {"stage": "prod", "identity": {"sourceIp": "10.0.0.1"}}
        }))
        .unwrap();

        assert_eq!(event.request_context["identity"]["sourceIp"], "10.0.0.1");
        let round_tripped = serde_json::to_value(&event).unwrap();
        assert_eq!(round_tripped["requestContext"]["stage"], "prod");
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ApiGatewayProxyResult {
            status_code: 200,
            body: "{}".into(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({"statusCode": 200, "headers": {}, "multiValueHeaders": {}, "body": "{}"})
        );
    }

    #[test]
    fn remaining_time_saturates() {
        let ctx = InvocationContext {
            deadline_ms: 10_000,
            ..Default::default()
        };
        assert_eq!(ctx.remaining_time_millis(7_500), 2_500);
        assert_eq!(ctx.remaining_time_millis(12_000), 0);
    }
}
