// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqpad CLI
//!
//! Hosts the request page for a browser, or sends a single request from
//! the terminal through the same page logic.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use reqpad::page::form::fields;
use reqpad::{AppConfig, FormData, Page, ResponseState};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reqpad=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    match args[1].as_str() {
        "serve" => {
            let config = match args.get(2) {
                Some(addr) => match config.bind_addr_str(addr) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        return ExitCode::from(1);
                    }
                },
                None => config,
            };
            match serve(config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Server failed: {:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "send" => match SendArgs::parse(&args[2..]) {
            Some(send_args) => send(config, send_args).await,
            None => {
                eprintln!("Usage: reqpad send <url> [-X method] [-H authorization] [-d body]");
                ExitCode::from(1)
            }
        },
        "history" => show_history(config),
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("reqpad {}", reqpad::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"reqpad - Minimal HTTP Request Pad

USAGE:
    reqpad <COMMAND> [OPTIONS]

COMMANDS:
    serve [addr]      Host the request page (default 127.0.0.1:7878)
    send <url>        Send one request and print the highlighted response
        -X <method>       HTTP method (default GET)
        -H <value>        Authorization header value
        -d <body>         Request body
    history           List remembered request URLs
    help              Show this help message
    version           Show version information

ENVIRONMENT:
    REQPAD_ADDR, REQPAD_STORAGE, REQPAD_THEME, REQPAD_USER_AGENT, REQPAD_PROXY
    RUST_LOG          Log filter (default reqpad=info)

EXAMPLES:
    reqpad serve
    reqpad send https://api.example.com/items
    reqpad send https://api.example.com/items -X POST -H "Bearer xyz" -d '{{"a":1}}'
"#
    );
}

/// Arguments of the `send` command
struct SendArgs {
    url: String,
    method: Option<String>,
    auth: Option<String>,
    body: Option<String>,
}

impl SendArgs {
    fn parse(args: &[String]) -> Option<Self> {
        let mut parsed = SendArgs {
            url: String::new(),
            method: None,
            auth: None,
            body: None,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-X" => parsed.method = Some(iter.next()?.clone()),
                "-H" => parsed.auth = Some(iter.next()?.clone()),
                "-d" => parsed.body = Some(iter.next()?.clone()),
                url if parsed.url.is_empty() => parsed.url = url.to_string(),
                _ => return None,
            }
        }

        (!parsed.url.is_empty()).then_some(parsed)
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let page = Page::from_config(&config).context("failed to set up page")?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    println!("reqpad listening on http://{}", config.bind_addr);
    reqpad::server::serve(listener, Arc::new(page)).await?;
    Ok(())
}

async fn send(config: AppConfig, args: SendArgs) -> ExitCode {
    let page = match Page::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to set up page: {}", e);
            return ExitCode::from(1);
        }
    };

    page.set_body(args.body.unwrap_or_default());

    let mut form = FormData::new().field(fields::REQUEST_URL, args.url);
    if let Some(method) = args.method {
        form = form.field(fields::METHOD, method);
    }
    if let Some(auth) = args.auth {
        form = form.field(fields::AUTH, auth);
    }

    match page.submit(&form).await {
        Ok(Some(ResponseState::Rendered(html))) => {
            println!("{}", html);
            ExitCode::SUCCESS
        }
        Ok(Some(ResponseState::Errored(failure))) => {
            eprintln!("{}", failure.message);
            ExitCode::from(1)
        }
        Ok(_) => {
            eprintln!("Nothing to send");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn show_history(config: AppConfig) -> ExitCode {
    let store = reqpad::FileStore::open(&config.storage_path);
    let history = reqpad::HistoryStore::new(store).load();

    if history.is_empty() {
        println!("No requests yet");
    }
    for url in &history {
        println!("{}", url);
    }
    ExitCode::SUCCESS
}
