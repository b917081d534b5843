// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound HTTP request

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use super::headers;
use crate::error::{Error, Result};

/// Methods whose names are matched case-insensitively and sent uppercase
const NORMALIZED_METHODS: [Method; 6] = [
    Method::DELETE,
    Method::GET,
    Method::HEAD,
    Method::OPTIONS,
    Method::POST,
    Method::PUT,
];

/// HTTP request representation
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Create a new GET request
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a request from a method name as typed by the user
    pub fn with_method(method: &str, url: Url) -> Result<Self> {
        Ok(Self::new(parse_method(method)?, url))
    }

    /// Set a header, rejecting names or values that cannot be sent
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let header_name = HeaderName::try_from(name).map_err(|_| Error::InvalidHeader {
            name: name.to_string(),
        })?;
        let header_value = HeaderValue::try_from(value).map_err(|_| Error::InvalidHeader {
            name: name.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set the `Authorization` header as typed, minus surrounding HTTP whitespace
    pub fn authorization(self, value: &str) -> Result<Self> {
        let value = value.trim_matches(is_http_whitespace);
        let mut request = self.header(headers::AUTHORIZATION, value)?;
        if let Some(v) = request.headers.get_mut(headers::AUTHORIZATION) {
            v.set_sensitive(true);
        }
        Ok(request)
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a header value as text
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

}

fn is_http_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parse a method name, uppercasing the standard ones
pub(crate) fn parse_method(method: &str) -> Result<Method> {
    if let Some(m) = NORMALIZED_METHODS
        .iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(method))
    {
        return Ok(m.clone());
    }
    Method::from_bytes(method.as_bytes()).map_err(|_| Error::InvalidMethod(method.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/path").unwrap()
    }

    #[test]
    fn test_request_creation() {
        let req = Request::get(url());
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.host_str(), Some("example.com"));
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Request::with_method("post", url()).unwrap().method, Method::POST);
        assert_eq!(Request::with_method("Delete", url()).unwrap().method, Method::DELETE);
        assert_eq!(Request::with_method("PURGE", url()).unwrap().method.as_str(), "PURGE");
        assert!(matches!(
            Request::with_method("NOT VALID", url()),
            Err(Error::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_authorization_header() {
        let req = Request::get(url()).authorization("Bearer xyz").unwrap();
        assert_eq!(req.header_str("Authorization"), Some("Bearer xyz"));
        assert!(req.headers.get("authorization").unwrap().is_sensitive());

        let err = Request::get(url()).authorization("line\nbreak").unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn test_authorization_trims_surrounding_whitespace() {
        let req = Request::get(url()).authorization(" \tBearer xyz\r\n").unwrap();
        assert_eq!(req.header_str("authorization"), Some("Bearer xyz"));
    }
}
