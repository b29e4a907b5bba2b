//! URL decomposition into the three pieces a raw request needs.
//!
//! # Design
//! Parsing is structural slicing only: split off the scheme at `://`, take
//! everything up to the first `/` as the authority, and everything from that
//! `/` on as the path. Nothing is percent-decoded or validated beyond that.
//! Inputs that cannot be sliced (no `://`, empty host, non-numeric port) are
//! rejected with `HttpError::MalformedUrl` instead of panicking.

use crate::config::DEFAULT_PORT;
use crate::error::HttpError;

/// Host, port and path extracted from a `scheme://host[:port][/path]` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Raw authority, `host[:port]`, as it goes into the `Host` header.
    pub host: String,
    /// `host` with any `:port` suffix removed, used for connecting.
    pub hostname: String,
    pub port: u16,
    pub path: String,
}

impl UrlParts {
    /// Decompose `url`, falling back to port 80 when none is given.
    pub fn parse(url: &str) -> Result<Self, HttpError> {
        Self::parse_with_default_port(url, DEFAULT_PORT)
    }

    pub fn parse_with_default_port(url: &str, default_port: u16) -> Result<Self, HttpError> {
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| HttpError::malformed_url(url, "missing \"://\""))?;

        let (host, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };

        let (hostname, port) = match host.split_once(':') {
            Some((name, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| HttpError::malformed_url(url, "port is not a number in 0..=65535"))?;
                (name, port)
            }
            None => (host, default_port),
        };

        if hostname.is_empty() {
            return Err(HttpError::malformed_url(url, "empty host"));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            hostname: hostname.to_string(),
            port,
            path: path.to_string(),
        })
    }
}
