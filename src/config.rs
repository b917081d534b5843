// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Application configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::highlight::DEFAULT_THEME;
use crate::http::HttpClientConfig;

/// Default address of the page host
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7878";

/// Default location of the key-value file
pub const DEFAULT_STORAGE_PATH: &str = ".reqpad/storage.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the page host listens on
    pub bind_addr: SocketAddr,
    /// Key-value file backing the history
    pub storage_path: PathBuf,
    /// Highlighting theme
    pub theme: String,
    /// Outbound HTTP settings
    pub http: HttpClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 7878)),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            theme: DEFAULT_THEME.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `REQPAD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("REQPAD_ADDR") {
            config = config.bind_addr_str(&addr)?;
        }
        if let Some(path) = lookup("REQPAD_STORAGE") {
            config = config.storage_path(path);
        }
        if let Some(theme) = lookup("REQPAD_THEME") {
            config = config.theme(theme);
        }
        if let Some(agent) = lookup("REQPAD_USER_AGENT") {
            config.http.user_agent = agent;
        }
        if let Some(proxy) = lookup("REQPAD_PROXY").filter(|p| !p.is_empty()) {
            config.http.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Set bind address from its textual form
    pub fn bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {:?}: {}", addr, e)))?;
        Ok(self)
    }

    /// Set storage path
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Set highlighting theme
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }
}
