// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use super::headers;
use crate::error::{Error, Result};

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            response_time_ms,
        }
    }

    /// 200 response with the given body, mostly for stand-in transports
    pub fn ok(url: Url, body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, HeaderMap::new(), body.into(), url, 0)
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Parse body strictly as JSON
    pub fn json(&self) -> Result<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::non_json(Some(self.status_code()), "empty body"));
        }
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::non_json(Some(self.status_code()), e.to_string()))
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(headers::CONTENT_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_json_body() {
        let resp = Response::ok(url(), r#"{"items":[1,2,3]}"#);
        assert_eq!(resp.json().unwrap()["items"][2], 3);
    }

    #[test]
    fn test_empty_body_is_not_json() {
        let err = Response::ok(url(), "  \n").json().unwrap_err();
        assert!(matches!(err, Error::NonJsonResponse { status: Some(200), .. }));
    }

    #[test]
    fn test_html_body_is_not_json() {
        let resp = Response::new(
            StatusCode::BAD_GATEWAY,
            HeaderMap::new(),
            Bytes::from_static(b"<html>bad gateway</html>"),
            url(),
            3,
        );
        let err = resp.json().unwrap_err();
        assert_eq!(err.status_code(), Some(502));
    }
}
