// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! syntect-backed highlighter

use std::io::Cursor;

use async_trait::async_trait;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::{Highlighter, DEFAULT_THEME};
use crate::error::{Error, Result};

const PALENIGHT: &str = include_str!("../../assets/themes/material-theme-palenight.tmTheme");

/// Highlighter over syntect's bundled grammars and themes.
///
/// Language tags resolve by file extension first, then by grammar name,
/// case-insensitively. Themes are syntect's defaults plus
/// `material-theme-palenight`.
pub struct SyntaxHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntaxHighlighter {
    /// Load the bundled grammars and themes
    pub fn new() -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let palenight = ThemeSet::load_from_reader(&mut Cursor::new(PALENIGHT))
            .map_err(|e| Error::highlighting(format!("cannot load {}: {}", DEFAULT_THEME, e)))?;
        themes.themes.insert(DEFAULT_THEME.to_string(), palenight);

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes,
        })
    }

    /// Names accepted as the `theme` argument
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.themes.keys().map(String::as_str)
    }

    /// Highlight synchronously
    pub fn highlight_str(&self, code: &str, lang: &str, theme: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .ok_or_else(|| Error::highlighting(format!("unsupported language: {}", lang)))?;
        let theme_def = self
            .themes
            .themes
            .get(theme)
            .ok_or_else(|| Error::highlighting(format!("unknown theme: {}", theme)))?;

        highlighted_html_for_string(code, &self.syntaxes, syntax, theme_def)
            .map_err(|e| Error::highlighting(e.to_string()))
    }
}

impl std::fmt::Debug for SyntaxHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxHighlighter")
            .field("syntaxes", &self.syntaxes.syntaxes().len())
            .field("themes", &self.themes.themes.len())
            .finish()
    }
}

#[async_trait]
impl Highlighter for SyntaxHighlighter {
    async fn highlight(&self, code: &str, lang: &str, theme: &str) -> Result<String> {
        self.highlight_str(code, lang, theme)
    }
}
