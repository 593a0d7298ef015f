//! Structured SOAP response model

use serde_json::Value;
use std::collections::HashMap;

/// Result of a SOAP call:
/// - HTTP status code
/// - response headers (multi-valued, HTTP allows repeats)
/// - raw XML body (always, trimmed)
/// - best-effort document view of the body
///
/// Any status code is represented here, faults included; deciding success
/// or failure against an allow-list of status codes belongs to the caller
/// ([`SoapResponse::is_success`]).
#[derive(Debug, Clone)]
pub struct SoapResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers. Names are lowercase (HTTP header names are
    /// case-insensitive); values keep their wire order.
    pub headers: HashMap<String, Vec<String>>,

    /// Raw response body, trimmed
    pub raw_body: String,

    /// Document view of the body. A transcoding failure is captured here
    /// as a value; it never fails the call, and `raw_body` keeps the
    /// untranscoded text either way.
    pub document: Result<Value, soapdoc::Error>,
}

impl SoapResponse {
    /// Classify the response against the caller's allow-list of
    /// acceptable status codes.
    pub fn is_success(&self, allowed_status_codes: &[u16]) -> bool {
        allowed_status_codes.contains(&self.status)
    }

    /// First value of a header, by lowercase name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16) -> SoapResponse {
        SoapResponse {
            status,
            headers: HashMap::new(),
            raw_body: String::new(),
            document: Ok(json!({})),
        }
    }

    #[test]
    fn test_allow_list_classification() {
        assert!(response(200).is_success(&[200, 202]));
        assert!(response(202).is_success(&[200, 202]));
        assert!(!response(500).is_success(&[200, 202]));
        assert!(!response(200).is_success(&[]));
    }

    #[test]
    fn test_header_lookup() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["text/xml".to_string(), "ignored".to_string()],
        );
        let response = SoapResponse {
            status: 200,
            headers,
            raw_body: String::new(),
            document: Ok(json!({})),
        };

        assert_eq!(response.header("content-type"), Some("text/xml"));
        assert_eq!(response.header("soapaction"), None);
    }
}
