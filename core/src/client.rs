//! One-shot HTTP/1.1 client over a raw TCP socket.
//!
//! # Design
//! `HttpClient` holds only its `ClientConfig` and carries no state between
//! calls. Each request decomposes the URL, builds the request buffer, opens a
//! fresh connection, writes, reads, and drops the socket before returning.
//! The building and parsing halves are also exposed as `build_*` methods and
//! the `response` module so they can be exercised without a network.

use std::net::Shutdown;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::HttpError;
use crate::http::{FormArgs, Method, RequestBuffer, Response};
use crate::request;
use crate::response::parse_response;
use crate::transport;
use crate::url::UrlParts;

/// Synchronous, stateless HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Decompose `url` using this client's default port.
    pub fn parse_url(&self, url: &str) -> Result<UrlParts, HttpError> {
        UrlParts::parse_with_default_port(url, self.config.default_port)
    }

    pub fn build_get(&self, url: &str) -> Result<(UrlParts, RequestBuffer), HttpError> {
        let parts = self.parse_url(url)?;
        let buffer = request::build_get(&parts, &self.config.user_agent);
        Ok((parts, buffer))
    }

    pub fn build_post(
        &self,
        url: &str,
        args: Option<&FormArgs>,
    ) -> Result<(UrlParts, RequestBuffer), HttpError> {
        let parts = self.parse_url(url)?;
        let buffer = request::build_post(&parts, &self.config.user_agent, args);
        Ok((parts, buffer))
    }

    /// GET `url`. `args` is accepted for symmetry with `post` and ignored.
    pub fn get(&self, url: &str, _args: Option<&FormArgs>) -> Result<Response, HttpError> {
        let (parts, buffer) = self.build_get(url)?;
        self.do_http(&parts, &buffer)
    }

    /// POST `args` to `url` as an urlencoded form.
    pub fn post(&self, url: &str, args: Option<&FormArgs>) -> Result<Response, HttpError> {
        let (parts, buffer) = self.build_post(url, args)?;
        self.do_http(&parts, &buffer)
    }

    /// Dispatch on a command word: `POST` posts, anything else gets.
    pub fn command(
        &self,
        url: &str,
        command: &str,
        args: Option<&FormArgs>,
    ) -> Result<Response, HttpError> {
        match Method::from_command(command) {
            Method::Post => self.post(url, args),
            Method::Get => self.get(url, args),
        }
    }

    /// Run one request over its own connection.
    ///
    /// The socket never outlives this call: it is shut down after the read
    /// loop on success and dropped on every error path.
    pub fn do_http(&self, parts: &UrlParts, buffer: &RequestBuffer) -> Result<Response, HttpError> {
        if !parts.scheme.eq_ignore_ascii_case("http") {
            warn!(scheme = %parts.scheme, "scheme is not http, speaking plain HTTP/1.1 anyway");
        }

        let raw = {
            let mut stream = transport::connect(&parts.hostname, parts.port)?;
            transport::send_all(&mut stream, buffer.as_bytes())?;
            let raw = transport::read_response(&mut stream, self.config.chunk_size)?;
            // The peer may already be gone; the socket is released on drop either way.
            let _ = stream.shutdown(Shutdown::Both);
            raw
        };

        let response = parse_response(&String::from_utf8_lossy(&raw))?;
        debug!(
            method = %buffer.method(),
            path = buffer.path(),
            status = response.status,
            "request complete"
        );
        Ok(response)
    }
}
