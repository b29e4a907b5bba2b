//! Error types for the raw HTTP client.
//!
//! # Design
//! Every failure aborts the request it happened in; nothing here is retried
//! or recovered locally. Connect failures keep the target address alongside
//! the I/O error because "which host refused" is the first thing a caller
//! prints. Failures after the socket is open collapse into `Transport`.

use std::io;

use thiserror::Error;

/// Errors returned by `HttpClient` and the free functions it is built from.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The URL could not be split into host, port and path.
    #[error("malformed URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: &'static str },

    /// Name resolution or the TCP connect itself failed.
    #[error("could not connect to {host}:{port}: {source}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Writing the request or reading the response failed mid-request.
    #[error("transport failure: {0}")]
    Transport(#[from] io::Error),

    /// The response has no blank line between header block and body.
    #[error("response has no header/body separator")]
    ResponseParse,

    /// No header line starts with `HTTP`, or its status token is not a number.
    #[error("response carries no status code")]
    MissingStatusCode,
}

impl HttpError {
    pub(crate) fn malformed_url(url: &str, reason: &'static str) -> Self {
        HttpError::MalformedUrl {
            url: url.to_string(),
            reason,
        }
    }
}
