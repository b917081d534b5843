// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Syntax highlighting
//!
//! The page treats highlighting as a black box: code, a language tag and
//! a theme name go in, HTML markup comes out. [`SyntaxHighlighter`] wraps
//! syntect; anything else can be plugged in through the [`Highlighter`]
//! trait.

mod syntax;

pub use syntax::SyntaxHighlighter;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "material-theme-palenight";

/// Converts source text into highlighted HTML markup
#[async_trait]
pub trait Highlighter: Send + Sync {
    async fn highlight(&self, code: &str, lang: &str, theme: &str) -> Result<String>;
}

#[async_trait]
impl<H: Highlighter + ?Sized> Highlighter for Arc<H> {
    async fn highlight(&self, code: &str, lang: &str, theme: &str) -> Result<String> {
        (**self).highlight(code, lang, theme).await
    }
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
