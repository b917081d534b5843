// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for reqpad
//!
//! One outbound request per submission, sent through an injectable
//! [`Transport`], with the response body parsed strictly as JSON.

mod client;
mod executor;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientConfig};
pub use executor::execute;
pub use request::Request;
pub use response::Response;
pub use transport::Transport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("reqpad/", env!("CARGO_PKG_VERSION"));

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_TYPE: &str = "content-type";
}
