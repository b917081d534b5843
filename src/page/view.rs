// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML view of the page

use super::form::{fields, METHODS};
use super::state::ResponseState;
use crate::highlight::escape_html;
use crate::history::History;

/// Seconds between reloads while a response is loading
const LOADING_REFRESH_SECS: u32 = 1;

const STYLE: &str = r#"
body {
    font-family: system-ui, sans-serif;
    margin: 0;
    padding: 1.5rem;
    background: #1b1e2b;
    color: #d0d3e8;
}
main {
    display: grid;
    gap: 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}
form section {
    display: flex;
    gap: 1rem;
    align-items: flex-end;
    margin-bottom: 1rem;
}
.form_control {
    display: flex;
    flex-direction: column;
    gap: .25rem;
    flex: 1;
}
.request_url_section .form_control:first-child {
    flex: 0 0 7rem;
}
input, select, textarea, button {
    font: inherit;
    padding: .5rem;
    border-radius: 4px;
    border: 1px solid #444a63;
    background: #292d3e;
    color: inherit;
}
textarea {
    min-height: 4rem;
    font-family: ui-monospace, monospace;
}
button {
    cursor: pointer;
    padding: .5rem 1.5rem;
}
.notice, .error {
    color: #ff5370;
}
.response pre {
    padding: 1rem;
    border-radius: 4px;
    overflow: auto;
}
"#;

/// Everything the view needs from the page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub history: &'a History,
    pub body: &'a str,
    pub state: &'a ResponseState,
    /// One-line message about a rejected submission
    pub notice: Option<&'a str>,
}

/// Render the full HTML document
pub fn render_page(view: &PageView<'_>) -> String {
    let refresh = if view.state.is_loading() {
        format!(
            r#"<meta http-equiv="refresh" content="{}">"#,
            LOADING_REFRESH_SECS
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>reqpad</title>
<style>{style}</style>
</head>
<body>
<main>
<section>
{form}
</section>
<section class="response">
{response}
</section>
</main>
</body>
</html>
"#,
        refresh = refresh,
        style = STYLE,
        form = render_form(view),
        response = render_response(view.state),
    )
}

fn render_form(view: &PageView<'_>) -> String {
    let methods: String = METHODS
        .iter()
        .map(|m| format!("<option>{}</option>", m))
        .collect();

    let options: String = view
        .history
        .iter()
        .map(|url| format!("<option>{}</option>", escape_html(url.as_str())))
        .collect();

    let current_url = view
        .history
        .first()
        .map(|url| escape_html(url.as_str()))
        .unwrap_or_default();

    let notice = view
        .notice
        .map(|n| format!(r#"<p class="notice" role="alert">{}</p>"#, escape_html(n)))
        .unwrap_or_default();

    format!(
        r#"<form method="post" action="/" autocomplete="on">
{notice}<section class="request_url_section">
<div class="form_control">
<label for="{method}">Method</label>
<select id="{method}" name="{method}">{methods}</select>
</div>
<div class="form_control">
<label for="{url}">Request URL</label>
<input type="text" id="{url}" name="{url}" list="request_history" value="{current_url}" required>
<datalist id="request_history">{options}</datalist>
</div>
<button type="submit">Go</button>
</section>
<section>
<div class="form_control">
<label for="{auth}">Authorization</label>
<textarea id="{auth}" name="{auth}"></textarea>
</div>
</section>
<section>
<div class="form_control">
<label for="{body}">Request Body</label>
<textarea id="{body}" name="{body}">{body_text}</textarea>
</div>
</section>
</form>"#,
        notice = notice,
        method = fields::METHOD,
        methods = methods,
        url = fields::REQUEST_URL,
        current_url = current_url,
        options = options,
        auth = fields::AUTH,
        body = fields::BODY,
        body_text = escape_html(view.body),
    )
}

fn render_response(state: &ResponseState) -> String {
    match state {
        ResponseState::Idle => "<p>Make a request</p>".to_string(),
        ResponseState::Loading => "<div><p>Loading...</p></div>".to_string(),
        // Highlighter output is built from escaped tokens
        ResponseState::Rendered(html) => format!("<div>{}</div>", html),
        ResponseState::Errored(failure) => format!(
            r#"<div class="error" role="alert"><p><strong>{}</strong></p><p>{}</p></div>"#,
            escape_html(failure.kind.label()),
            escape_html(&failure.message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::page::state::Failure;
    use url::Url;

    fn history() -> History {
        [
            "https://api.example.com/items",
            "https://api.example.com/search?q=a&b=<c>",
        ]
        .iter()
        .map(|u| Url::parse(u).unwrap())
        .collect()
    }

    fn page(state: &ResponseState) -> String {
        let history = history();
        render_page(&PageView {
            history: &history,
            body: "",
            state,
            notice: None,
        })
    }

    #[test]
    fn test_idle_prompt() {
        let html = page(&ResponseState::Idle);
        assert!(html.contains("<p>Make a request</p>"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_history_datalist_and_default_url() {
        let html = page(&ResponseState::Idle);
        assert!(html.contains(r#"value="https://api.example.com/items""#));
        assert!(html.contains("<option>https://api.example.com/items</option>"));
        assert!(html.contains("q=a&amp;b=%3Cc%3E"));
        assert!(html.contains("<option>GET</option><option>POST</option>"));
    }

    #[test]
    fn test_loading_refreshes() {
        let html = page(&ResponseState::Loading);
        assert!(html.contains("Loading..."));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="1">"#));
    }

    #[test]
    fn test_rendered_markup_inserted_raw() {
        let html = page(&ResponseState::Rendered("<pre><code>x</code></pre>".into()));
        assert!(html.contains("<div><pre><code>x</code></pre></div>"));
    }

    #[test]
    fn test_error_message_escaped() {
        let state = ResponseState::Errored(Failure::new(
            FailureKind::NonJsonResponse,
            "unexpected <html>",
        ));
        let html = page(&state);
        assert!(html.contains("Response is not JSON"));
        assert!(html.contains("unexpected &lt;html&gt;"));
    }

    #[test]
    fn test_body_and_notice() {
        let history = History::new();
        let html = render_page(&PageView {
            history: &history,
            body: "</textarea><b>",
            state: &ResponseState::Idle,
            notice: Some("Invalid URL: relative URL without a base"),
        });
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;</textarea>"));
        assert!(html.contains(r#"<p class="notice" role="alert">Invalid URL"#));
        assert!(html.contains(r#"value="""#));
    }
}
