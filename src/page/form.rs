// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request form capture

use url::Url;

use crate::error::Result;
use crate::http::Request;

/// Form field names
pub mod fields {
    pub const METHOD: &str = "method";
    pub const REQUEST_URL: &str = "request_url";
    pub const AUTH: &str = "auth";
    pub const BODY: &str = "body";
}

/// Method offered by the method selector
pub const METHODS: [&str; 2] = ["GET", "POST"];

/// Method used when the form carries none
pub const DEFAULT_METHOD: &str = "GET";

/// Submitted form fields, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One submission's worth of request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInput {
    /// Method as submitted, uninterpreted
    pub method: String,
    /// Parsed target URL
    pub url: Url,
    /// Raw `Authorization` value, present only when non-empty
    pub auth: Option<String>,
    /// Body text, present only when non-empty
    pub body: Option<String>,
}

impl RequestInput {
    /// Capture input from a submitted form and the live body text.
    ///
    /// Returns `Ok(None)` when no request URL was submitted.
    pub fn from_form(form: &FormData, body: &str) -> Result<Option<Self>> {
        let Some(raw_url) = form.get(fields::REQUEST_URL).filter(|u| !u.is_empty()) else {
            return Ok(None);
        };
        let url = Url::parse(raw_url)?;

        Ok(Some(Self {
            method: form
                .get(fields::METHOD)
                .unwrap_or(DEFAULT_METHOD)
                .to_string(),
            url,
            auth: form
                .get(fields::AUTH)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            body: Some(body).filter(|b| !b.is_empty()).map(str::to_string),
        }))
    }

    /// Build the outbound request
    pub fn to_request(&self) -> Result<Request> {
        let mut request = Request::with_method(&self.method, self.url.clone())?;
        if let Some(ref auth) = self.auth {
            request = request.authorization(auth)?;
        }
        if let Some(ref body) = self.body {
            request = request.body(body.clone());
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn form(url: &str) -> FormData {
        FormData::new().field(fields::REQUEST_URL, url)
    }

    #[test]
    fn test_missing_url_is_ignored() {
        assert!(RequestInput::from_form(&FormData::new(), "").unwrap().is_none());
        assert!(RequestInput::from_form(&form(""), "").unwrap().is_none());
    }

    #[test]
    fn test_invalid_url_fails() {
        let err = RequestInput::from_form(&form("not a url"), "").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_defaults() {
        let input = RequestInput::from_form(&form("https://api.example.com/items"), "")
            .unwrap()
            .unwrap();
        assert_eq!(input.method, "GET");
        assert!(input.auth.is_none());
        assert!(input.body.is_none());

        let request = input.to_request().unwrap();
        assert!(request.header_str("authorization").is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_auth_and_body_attached_verbatim() {
        let form = form("https://api.example.com/items")
            .field(fields::METHOD, "POST")
            .field(fields::AUTH, "Bearer xyz");
        let input = RequestInput::from_form(&form, r#"{"a":1}"#).unwrap().unwrap();
        let request = input.to_request().unwrap();

        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.header_str("authorization"), Some("Bearer xyz"));
        assert_eq!(request.body.as_deref(), Some(&br#"{"a":1}"#[..]));
    }

    #[test]
    fn test_empty_auth_sends_no_header() {
        let form = form("https://api.example.com/").field(fields::AUTH, "");
        let request = RequestInput::from_form(&form, "")
            .unwrap()
            .unwrap()
            .to_request()
            .unwrap();
        assert!(request.headers.get("authorization").is_none());
    }

    #[test]
    fn test_body_on_get_passes_through() {
        let input = RequestInput::from_form(&form("https://api.example.com/"), "payload")
            .unwrap()
            .unwrap();
        let request = input.to_request().unwrap();
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(request.body.as_deref(), Some(&b"payload"[..]));
    }

    #[test]
    fn test_body_field_in_form_is_ignored() {
        let form = form("https://api.example.com/").field(fields::BODY, "from form");
        let input = RequestInput::from_form(&form, "").unwrap().unwrap();
        assert!(input.body.is_none());
    }

    #[test]
    fn test_first_value_wins() {
        let form: FormData = vec![("method", "POST"), ("method", "GET")]
            .into_iter()
            .collect();
        assert_eq!(form.get("method"), Some("POST"));
    }
}
