// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Local page host
//!
//! Serves the single page to a browser on a loopback address. Submissions
//! run in process on the shared [`Page`]; the browser only displays it.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::page::form::fields;
use crate::page::{FormData, Page};

/// Router for the page
pub fn app(page: Arc<Page>) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit))
        .route("/history", get(list_history))
        .with_state(page)
}

/// Serve the page until the listener fails
pub async fn serve(listener: TcpListener, page: Arc<Page>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Serving page");
    }
    axum::serve(listener, app(page)).await
}

async fn show_page(State(page): State<Arc<Page>>) -> Html<String> {
    Html(page.view(None))
}

async fn submit(
    State(page): State<Arc<Page>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form: FormData = pairs.into_iter().collect();
    if let Some(body) = form.get(fields::BODY) {
        page.set_body(body);
    }

    match page.begin(&form) {
        Ok(Some(submission)) => {
            let runner = page.clone();
            tokio::spawn(async move {
                runner.run(submission).await;
            });
            Redirect::to("/").into_response()
        }
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Submission rejected");
            let notice = e.to_string();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(page.view(Some(&notice))),
            )
                .into_response()
        }
    }
}

async fn list_history(State(page): State<Arc<Page>>) -> Json<Vec<String>> {
    Json(page.history().to_strings())
}
