// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # reqpad - Minimal HTTP Request Pad
//!
//! Pick a method, enter a URL with an optional authorization value and
//! body, send the request and read the JSON response as highlighted
//! markup. Request URLs are remembered in a local key-value store and
//! offered back as suggestions.
//!
//! ## Features
//!
//! - History: deduplicated, persisted URL history that never fails to load
//! - Request capture: method, URL, verbatim `Authorization`, optional body
//! - Strict JSON responses with distinguishable failure classes
//! - syntect-backed highlighting, replaceable through a trait
//! - Explicit response state: idle, loading, rendered or errored
//! - Local page host for using the pad from a browser
//!
//! ## Example
//!
//! ```rust,no_run
//! use reqpad::{AppConfig, FormData, Page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let page = Page::from_config(&AppConfig::from_env()?)?;
//!
//!     let form = FormData::new()
//!         .field("method", "GET")
//!         .field("request_url", "https://api.example.com/items");
//!
//!     if let Some(state) = page.submit(&form).await? {
//!         println!("{:?}", state);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod history;
pub mod http;
pub mod page;
pub mod server;
pub mod storage;

// Re-exports for convenience

// Configuration
pub use config::AppConfig;

// Errors
pub use error::{Error, FailureKind, Result};

// History and storage
pub use history::{History, HistoryStore, HISTORY_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, Transport};

// Highlighting
pub use highlight::{Highlighter, SyntaxHighlighter};

// Page
pub use page::{Failure, FormData, Page, RequestInput, ResponseState, Submission};

/// reqpad version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
