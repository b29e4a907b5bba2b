//! `client [GET|POST] <url>`: send one request and print the response.

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use rawhttp_core::{HttpClient, Response};
use tracing_subscriber::EnvFilter;

/// Raw-socket HTTP/1.1 client
#[derive(Debug, Parser)]
#[command(name = "client", version, override_usage = "client [GET|POST] <URL>")]
struct Cli {
    /// GET or POST, or the URL itself when given alone
    first: Option<String>,
    /// URL to request when a method is given first
    second: Option<String>,
}

impl Cli {
    /// `(command, url)`, or `None` when no arguments were given.
    fn target(self) -> Option<(String, String)> {
        match (self.first, self.second) {
            (None, _) => None,
            (Some(url), None) => Some(("GET".to_string(), url)),
            (Some(command), Some(url)) => Some((command, url)),
        }
    }
}

fn run(command: &str, url: &str) -> anyhow::Result<Response> {
    HttpClient::new()
        .command(url, command, None)
        .with_context(|| format!("{command} {url} failed"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some((command, url)) = Cli::parse().target() else {
        Cli::command().print_help().ok();
        return ExitCode::FAILURE;
    };

    match run(&command, &url) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
