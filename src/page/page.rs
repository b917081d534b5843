// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page implementation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use super::form::{FormData, RequestInput};
use super::render::render;
use super::state::{Failure, ResponseState};
use super::view::{self, PageView};
use crate::config::AppConfig;
use crate::error::{FailureKind, Result};
use crate::highlight::{Highlighter, SyntaxHighlighter, DEFAULT_THEME};
use crate::history::{History, HistoryStore};
use crate::http::{execute, HttpClient, Request, Transport};
use crate::storage::{FileStore, KeyValueStore};

/// A submission that has been accepted and is waiting to run
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    input: RequestInput,
    request: Request,
}

impl Submission {
    /// Sequence number; only the latest may settle the page
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url(&self) -> &Url {
        &self.input.url
    }
}

/// The request page: history, live body text and the response panel
pub struct Page {
    history_store: HistoryStore<Arc<dyn KeyValueStore>>,
    history: RwLock<History>,
    body: RwLock<String>,
    state: RwLock<ResponseState>,
    generation: AtomicU64,
    transport: Arc<dyn Transport>,
    highlighter: Arc<dyn Highlighter>,
    theme: String,
}

impl Page {
    /// Create a page, loading the stored history once
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        transport: Arc<dyn Transport>,
        highlighter: Arc<dyn Highlighter>,
    ) -> Self {
        let history_store = HistoryStore::new(store);
        let history = history_store.load();
        tracing::debug!(entries = history.len(), "History loaded");

        Self {
            history_store,
            history: RwLock::new(history),
            body: RwLock::new(String::new()),
            state: RwLock::new(ResponseState::Idle),
            generation: AtomicU64::new(0),
            transport,
            highlighter,
            theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Page backed by the file store, reqwest and syntect
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_path));
        let transport: Arc<dyn Transport> = Arc::new(HttpClient::with_config(config.http.clone())?);
        let highlighter: Arc<dyn Highlighter> = Arc::new(SyntaxHighlighter::new()?);
        Ok(Self::new(store, transport, highlighter).theme(config.theme.clone()))
    }

    /// Set highlighting theme
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Snapshot of the history
    pub fn history(&self) -> History {
        self.history.read().clone()
    }

    /// Current body text
    pub fn body(&self) -> String {
        self.body.read().clone()
    }

    /// Replace the body text
    pub fn set_body(&self, body: impl Into<String>) {
        *self.body.write() = body.into();
    }

    /// Snapshot of the response panel
    pub fn state(&self) -> ResponseState {
        self.state.read().clone()
    }

    /// Accept a form submission.
    ///
    /// An invalid URL leaves history and state untouched. Once the URL
    /// parses it is recorded, even if the method or authorization value is
    /// then rejected. On success the panel moves to `Loading` and the
    /// returned [`Submission`] must be passed to [`Page::run`].
    pub fn begin(&self, form: &FormData) -> Result<Option<Submission>> {
        let body = self.body();
        let Some(input) = RequestInput::from_form(form, &body)? else {
            tracing::debug!("Submission without request URL ignored");
            return Ok(None);
        };

        self.remember(&input.url);
        let request = input.to_request()?;

        let generation = {
            let mut state = self.state.write();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ResponseState::Loading;
            generation
        };

        tracing::info!(
            generation,
            method = %input.method,
            url = %input.url,
            has_auth = input.auth.is_some(),
            has_body = input.body.is_some(),
            "Submission accepted"
        );

        Ok(Some(Submission {
            generation,
            input,
            request,
        }))
    }

    /// Execute and render an accepted submission, then settle the panel
    pub async fn run(&self, submission: Submission) -> ResponseState {
        let guard = InFlight {
            page: self,
            generation: submission.generation,
            settled: false,
        };

        let outcome = self.fetch_and_render(submission.request).await;
        if let Err(ref e) = outcome {
            tracing::warn!(generation = submission.generation, error = %e, "Submission failed");
        }

        let state = ResponseState::settle(&outcome);
        guard.finish(state.clone());
        state
    }

    /// [`Page::begin`] followed by [`Page::run`]
    pub async fn submit(&self, form: &FormData) -> Result<Option<ResponseState>> {
        match self.begin(form)? {
            Some(submission) => Ok(Some(self.run(submission).await)),
            None => Ok(None),
        }
    }

    /// Full HTML document for the current state
    pub fn view(&self, notice: Option<&str>) -> String {
        let history = self.history.read();
        let body = self.body.read();
        let state = self.state.read();
        view::render_page(&PageView {
            history: &history,
            body: &body,
            state: &state,
            notice,
        })
    }

    async fn fetch_and_render(&self, request: Request) -> Result<String> {
        let value = execute(self.transport.as_ref(), request).await?;
        render(&value, self.highlighter.as_ref(), &self.theme).await
    }

    fn remember(&self, url: &Url) {
        let mut history = self.history.write();
        if !history.insert(url.clone()) {
            return;
        }
        if let Err(e) = self.history_store.save(&history) {
            tracing::warn!(url = %url, error = %e, "Failed to persist history");
        }
    }

    /// Apply a finished state if `generation` is still the latest
    fn settle(&self, generation: u64, next: ResponseState) -> bool {
        let mut state = self.state.write();
        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(generation, latest, "Discarding stale result");
            return false;
        }
        tracing::debug!(generation, state = next.name(), "Response settled");
        *state = next;
        true
    }
}

/// Settles the page as errored if a run is dropped before it finishes
struct InFlight<'a> {
    page: &'a Page,
    generation: u64,
    settled: bool,
}

impl InFlight<'_> {
    fn finish(mut self, state: ResponseState) {
        self.settled = true;
        self.page.settle(self.generation, state);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.page.settle(
                self.generation,
                ResponseState::Errored(Failure::new(
                    FailureKind::Other,
                    "Request was abandoned before it finished",
                )),
            );
        }
    }
}
