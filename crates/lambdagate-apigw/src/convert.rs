//! Conversions between API Gateway proxy types and lambdagate records.
//!
//! Both directions are total: a well-formed event always yields a request
//! and a response always yields a result.

use std::collections::BTreeMap;

use lambdagate_core::{Body, ParamValue, RawRequest, RawResponse, StringParams};

use crate::event::{ApiGatewayProxyEvent, ApiGatewayProxyResult, MultiValueMap, SingleValueMap};

/// Convert an inbound API Gateway event into a [`RawRequest`].
///
/// Query parameters and headers merge the single-value map with the
/// multi-value map; the multi-value entry wins on a key collision.
pub fn from_lambda_event(event: &ApiGatewayProxyEvent) -> RawRequest {
    RawRequest {
        method: event.http_method.clone(),
        path: event.path.clone(),
        query: to_string_params(
            event.query_string_parameters.as_ref(),
            event.multi_value_query_string_parameters.as_ref(),
        ),
        headers: to_string_params(event.headers.as_ref(), event.multi_value_headers.as_ref()),
        body: Body::parse(event.body.as_deref()),
    }
}

/// Convert an engine [`RawResponse`] into an API Gateway result.
///
/// The body is always JSON-encoded, so a string body is quoted and an
/// absent body becomes `null`. Multi-valued headers go to
/// `multiValueHeaders`, everything else to `headers`.
pub fn to_lambda_result(res: RawResponse) -> ApiGatewayProxyResult {
    let mut headers = BTreeMap::new();
    let mut multi_value_headers = BTreeMap::new();

    for (name, value) in res.headers {
        match value {
            ParamValue::Single(value) => {
                headers.insert(name, value);
            }
            ParamValue::Multi(values) => {
                multi_value_headers.insert(name, values);
            }
        }
    }

    let body = match res.body {
        Some(value) => value.to_string(),
        None => serde_json::Value::Null.to_string(),
    };

    ApiGatewayProxyResult {
        status_code: res.status_code,
        headers,
        multi_value_headers,
        body,
    }
}

/// Merge a single-value and a multi-value map.
///
/// Entries from `multi` overwrite entries from `single`, even when the
/// multi-value entry is `null`. `null` entries are then dropped and
/// one-element lists collapse to a single string.
pub(crate) fn to_string_params(
    single: Option<&SingleValueMap>,
    multi: Option<&MultiValueMap>,
) -> StringParams {
    let mut merged: BTreeMap<&str, Option<ParamValue>> = BTreeMap::new();

    for (name, value) in single.into_iter().flatten() {
        merged.insert(name, value.clone().map(ParamValue::Single));
    }
    for (name, values) in multi.into_iter().flatten() {
        merged.insert(name, values.clone().map(ParamValue::from_values));
    }

    merged
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name.to_string(), value)))
        .collect()
}
