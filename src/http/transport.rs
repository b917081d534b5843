// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam between the page and the network

use std::sync::Arc;

use async_trait::async_trait;

use super::request::Request;
use super::response::Response;
use crate::error::Result;

/// Sends one request and returns its response
///
/// Implementations must not retry. A response with any status code is a
/// successful send; only failing to obtain a response is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request).await
    }
}
