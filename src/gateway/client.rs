//! Outbound forwarding client.
//!
//! # Responsibilities
//! - Translate a `ForwardRequest` into exactly one outbound HTTP call
//! - Attach a JSON body only for POST, PUT and PATCH, matched case-sensitively
//!   against the verb as the caller sent it
//! - Buffer the upstream response and flatten it into a `ForwardResult`
//! - Convert every transport failure into `ApiError::TransportFailure`
//!
//! # Design Decisions
//! - Any status code is a successful round trip; 4xx/5xx are relayed
//! - No retry, no timeout, default redirect policy of the client
//! - Any target URL is accepted: this is an open relay for API testing
//! - No logging or history recording here; callers own both

use std::collections::BTreeMap;
use std::error::Error as StdError;

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::gateway::types::{ForwardRequest, ForwardResult};

/// Relays caller-described requests to arbitrary upstreams.
#[derive(Debug, Clone, Default)]
pub struct ForwardingGateway {
    client: reqwest::Client,
}

impl ForwardingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (e.g. one that bypasses system proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue the outbound call and relay whatever comes back.
    pub async fn forward(&self, request: ForwardRequest) -> ApiResult<ForwardResult> {
        let method = parse_method(&request.method)?;
        let url = Url::parse(&request.url).map_err(|e| {
            ApiError::TransportFailure(format!("Invalid URL '{}': {}", request.url, e))
        })?;
        let headers = build_headers(&request.headers)?;

        let mut outbound = self.client.request(method, url).headers(headers);
        if let Some(body) = outbound_body(&request.method, request.body.as_ref())? {
            outbound = outbound.body(body);
        }

        let response = outbound.send().await.map_err(transport_failure)?;
        let status = response.status();
        let status_text = reason_phrase(&response);
        let headers = flatten_headers(response.headers());
        let body = response.text().await.map_err(transport_failure)?;

        Ok(ForwardResult {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}

/// Upper-case and parse the verb.
pub fn parse_method(raw: &str) -> ApiResult<Method> {
    Method::from_bytes(raw.trim().to_ascii_uppercase().as_bytes())
        .map_err(|_| ApiError::TransportFailure(format!("Invalid HTTP method '{}'", raw)))
}

fn build_headers(headers: &BTreeMap<String, String>) -> ApiResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::TransportFailure(format!("Invalid header name '{}'", name)))?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            ApiError::TransportFailure(format!("Invalid value for header '{}'", name))
        })?;
        map.append(header_name, header_value);
    }
    Ok(map)
}

/// Serialized body to send, if any.
///
/// Only the exact verbs `POST`, `PUT` and `PATCH` carry a body, and only when
/// the payload is present: `null`, `false`, `0` and `""` count as absent.
/// A lower-case `"post"` is still sent as POST, but without its body.
pub fn outbound_body(method: &str, body: Option<&Value>) -> ApiResult<Option<String>> {
    let carries_body = matches!(method, "POST" | "PUT" | "PATCH");
    match body {
        Some(value) if carries_body && is_present(value) => serde_json::to_string(value)
            .map(Some)
            .map_err(|e| ApiError::TransportFailure(format!("Failed to serialize body: {}", e))),
        _ => Ok(None),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reason phrase as sent by the upstream.
///
/// hyper records the phrase only when it differs from the canonical one for
/// the status, so the canonical phrase fills in otherwise.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Flatten headers into name → value, joining repeats with ", ".
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        flat.insert(name.as_str().to_string(), joined);
    }
    flat
}

/// Render a transport error with its full source chain.
fn transport_failure(err: reqwest::Error) -> ApiError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ApiError::TransportFailure(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_only_for_write_methods() {
        let body = json!({ "name": "widget" });
        for method in ["POST", "PUT", "PATCH"] {
            assert_eq!(
                outbound_body(method, Some(&body)).unwrap().as_deref(),
                Some(r#"{"name":"widget"}"#)
            );
        }
        for method in ["GET", "DELETE", "HEAD", "OPTIONS"] {
            assert_eq!(outbound_body(method, Some(&body)).unwrap(), None);
        }
        assert_eq!(outbound_body("POST", None).unwrap(), None);
    }

    #[test]
    fn test_body_verb_match_is_case_sensitive() {
        let body = json!({ "name": "widget" });
        for method in ["post", "Put", "patch"] {
            assert_eq!(outbound_body(method, Some(&body)).unwrap(), None, "{}", method);
        }
    }

    #[test]
    fn test_absent_payloads_are_not_sent() {
        for absent in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            assert_eq!(outbound_body("POST", Some(&absent)).unwrap(), None, "{}", absent);
        }
        for present in [json!([]), json!({}), json!(true), json!(1), json!("text")] {
            assert!(outbound_body("PUT", Some(&present)).unwrap().is_some(), "{}", present);
        }
        // Strings are JSON-encoded, quotes included.
        assert_eq!(
            outbound_body("PATCH", Some(&json!("text"))).unwrap().as_deref(),
            Some("\"text\"")
        );
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("post").unwrap(), Method::POST);
        assert_eq!(parse_method(" PATCH ").unwrap(), Method::PATCH);
        assert!(matches!(parse_method("NOT VALID"), Err(ApiError::TransportFailure(_))));
    }

    #[test]
    fn test_flatten_headers_joins_repeats() {
        let mut headers = HeaderMap::new();
        headers.append("X-Test", HeaderValue::from_static("ok"));
        headers.append("Vary", HeaderValue::from_static("Accept"));
        headers.append("Vary", HeaderValue::from_static("Origin"));

        let flat = flatten_headers(&headers);
        assert_eq!(flat.get("x-test").map(String::as_str), Some("ok"));
        assert_eq!(flat.get("vary").map(String::as_str), Some("Accept, Origin"));
        assert_eq!(flat.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_url_is_transport_failure() {
        let gateway = ForwardingGateway::new();
        let err = gateway
            .forward(ForwardRequest::new("GET", "not a url"))
            .await
            .unwrap_err();
        match err {
            ApiError::TransportFailure(msg) => assert!(msg.contains("Invalid URL")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_header_is_transport_failure() {
        let gateway = ForwardingGateway::new();
        let request =
            ForwardRequest::new("GET", "http://127.0.0.1:9/").header("bad header", "x");
        let err = gateway.forward(request).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::TransportFailure("Invalid header name 'bad header'".into())
        );
    }
}
