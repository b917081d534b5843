// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Single-shot request execution

use serde_json::Value;

use super::request::Request;
use super::transport::Transport;
use crate::error::Result;

/// Send `request` once and parse the response body as JSON.
///
/// The status code is not inspected: an error response with a JSON body
/// is rendered like any other.
pub async fn execute(transport: &dyn Transport, request: Request) -> Result<Value> {
    let method = request.method.clone();
    let url = request.url.clone();

    let response = transport.send(request).await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "Request failed");
        e
    })?;

    response.json().map_err(|e| {
        tracing::warn!(
            %method,
            %url,
            status = response.status_code(),
            content_type = response.content_type().unwrap_or("-"),
            "Response body is not JSON"
        );
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FailureKind};
    use crate::http::{HttpClient, Response};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use url::Url;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Canned {
        body: &'static str,
        seen: Mutex<Vec<Request>>,
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, request: Request) -> Result<Response> {
            let url = request.url.clone();
            self.seen.lock().push(request);
            Ok(Response::ok(url, self.body))
        }
    }

    #[tokio::test]
    async fn test_parses_json() {
        let transport = Canned {
            body: r#"{"items":[1,2,3]}"#,
            seen: Mutex::new(Vec::new()),
        };
        let url = Url::parse("https://api.example.com/items").unwrap();

        let value = execute(&transport, Request::get(url)).await.unwrap();
        assert_eq!(value, serde_json::json!({"items": [1, 2, 3]}));
        assert_eq!(transport.seen.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let transport = Canned {
            body: "plain text",
            seen: Mutex::new(Vec::new()),
        };
        let url = Url::parse("https://api.example.com/").unwrap();

        let err = execute(&transport, Request::get(url)).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::NonJsonResponse);
    }

    #[tokio::test]
    async fn test_no_authorization_without_auth() {
        let server = MockServer::start().await;
        Mock::given(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"auth":true}"#))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"auth":false}"#))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/items", server.uri())).unwrap();
        let client = HttpClient::new().unwrap();
        let value = execute(&client, Request::get(url)).await.unwrap();
        assert_eq!(value["auth"], false);
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_rendered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"missing"}"#))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let client = HttpClient::new().unwrap();
        let value = execute(&client, Request::get(url)).await.unwrap();
        assert_eq!(value["error"], "missing");
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let client = HttpClient::new().unwrap();
        let request = Request::with_method("delete", url).unwrap();
        let err = execute(&client, request).await.unwrap_err();
        assert!(matches!(err, Error::NonJsonResponse { status: Some(204), .. }));
    }
}
