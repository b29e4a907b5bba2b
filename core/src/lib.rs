//! Minimal HTTP/1.1 client written directly against TCP sockets.
//!
//! # Overview
//! Requests are serialized by hand and responses are parsed by hand; no HTTP
//! library sits between the caller and the socket. GET and POST (urlencoded
//! form) are supported.
//!
//! # Design
//! - `url` slices a URL into host, port and path.
//! - `request` assembles the byte-exact request buffer.
//! - `transport` connects, writes, and reads until close, stopping early
//!   when the first chunk reports a 3xx status.
//! - `response` splits headers from body and extracts the status code.
//! - `HttpClient` ties them together, one connection per request.
//!
//! Not supported: TLS, chunked transfer-encoding, keep-alive, redirect
//! following, timeouts.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::HttpError;
pub use http::{FormArgs, Method, RequestBuffer, Response};
pub use url::UrlParts;
