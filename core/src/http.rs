//! HTTP message types.
//!
//! # Design
//! These types describe requests and responses as plain owned data. The
//! builder in `request` produces a `RequestBuffer`, the parser in `response`
//! produces a `Response`, and only `transport` moves bytes between them and a
//! socket. Keeping the data types free of I/O lets both halves be tested from
//! strings alone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method for a request. Only the two verbs the client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Map a command word to a method: exactly `POST` selects POST and
    /// anything else falls back to GET.
    pub fn from_command(command: &str) -> Self {
        if command == "POST" {
            Method::Post
        } else {
            Method::Get
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields for a POST body, kept in the order they were supplied.
///
/// Serialized as `key=value` pairs joined by `&`. Keys and values are
/// concatenated raw; nothing is percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormArgs(Vec<(String, String)>);

impl FormArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `a=1&b=2`, or the empty string when there are no fields.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A fully serialized request, written to the socket verbatim.
///
/// Built once by `request::build_get` / `request::build_post` and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuffer {
    pub(crate) method: Method,
    pub(crate) host: String,
    pub(crate) path: String,
    pub(crate) text: String,
}

impl RequestBuffer {
    pub fn method(&self) -> Method {
        self.method
    }

    /// Value of the `Host` header, `host[:port]`.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for RequestBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed response. Produced once per request and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: u16,
    /// Header fields after the status line, in wire order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// True for the 3xx codes that end the read loop after the first chunk.
    pub fn is_redirect(&self) -> bool {
        crate::response::codes_early_fail(self.status)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} body: <{}>", self.status, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_from_command() {
        assert_eq!(Method::from_command("POST"), Method::Post);
        assert_eq!(Method::from_command("GET"), Method::Get);
        assert_eq!(Method::from_command("post"), Method::Get);
        assert_eq!(Method::from_command("DELETE"), Method::Get);
    }

    #[test]
    fn form_args_keep_insertion_order() {
        let mut args = FormArgs::new();
        args.push("b", "2");
        args.push("a", "1");
        assert_eq!(args.len(), 2);
        assert!(!args.is_empty());
        assert_eq!(args.encode(), "b=2&a=1");
    }

    #[test]
    fn form_args_are_not_percent_encoded() {
        let args: FormArgs = [("q", "a b&c")].into_iter().collect();
        assert_eq!(args.encode(), "q=a b&c");
    }

    #[test]
    fn empty_form_args_encode_to_nothing() {
        let args = FormArgs::new();
        assert!(args.is_empty());
        assert_eq!(args.len(), 0);
        assert_eq!(args.encode(), "");
    }

    #[test]
    fn response_display() {
        let response = Response {
            status: 200,
            headers: Vec::new(),
            body: "hello".to_string(),
        };
        assert_eq!(response.to_string(), "200 body: <hello>");
    }

    #[test]
    fn response_header_lookup_ignores_case() {
        let response = Response {
            status: 302,
            headers: vec![("Location".to_string(), "/next".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("location"), Some("/next"));
        assert_eq!(response.header("content-length"), None);
        assert!(response.is_redirect());
    }
}
