//! Request buffer assembly.
//!
//! Both builders emit CRLF line endings and a terminating blank line. The
//! POST body follows the blank line with no trailing newline, so exactly
//! `Content-Length` bytes come after the header block.

use crate::http::{FormArgs, Method, RequestBuffer};
use crate::url::UrlParts;

/// `GET <path> HTTP/1.1` with `Host`, `User-Agent` and `Accept: */*`.
pub fn build_get(url: &UrlParts, user_agent: &str) -> RequestBuffer {
    let mut text = request_head(Method::Get, url, user_agent);
    text.push_str("Accept: */*\r\n");
    text.push_str("\r\n");

    RequestBuffer {
        method: Method::Get,
        host: url.host.clone(),
        path: url.path.clone(),
        text,
    }
}

/// `POST <path> HTTP/1.1` carrying `args` as an urlencoded form body.
///
/// Absent or empty `args` produce `Content-Length: 0` and no body.
pub fn build_post(url: &UrlParts, user_agent: &str, args: Option<&FormArgs>) -> RequestBuffer {
    let payload = args.map(FormArgs::encode).unwrap_or_default();

    let mut text = request_head(Method::Post, url, user_agent);
    text.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
    text.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    text.push_str("\r\n");
    text.push_str(&payload);

    RequestBuffer {
        method: Method::Post,
        host: url.host.clone(),
        path: url.path.clone(),
        text,
    }
}

/// Request line plus the headers every method shares.
fn request_head(method: Method, url: &UrlParts, user_agent: &str) -> String {
    format!(
        "{method} {path} HTTP/1.1\r\nHost: {host}\r\nUser-Agent: {user_agent}\r\n",
        path = url.path,
        host = url.host,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(url: &str) -> UrlParts {
        UrlParts::parse(url).unwrap()
    }

    #[test]
    fn get_is_byte_exact() {
        let req = build_get(&parts("http://example.com/foo"), "test/1.0");
        assert_eq!(
            req.as_str(),
            "GET /foo HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test/1.0\r\nAccept: */*\r\n\r\n"
        );
        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.path(), "/foo");
        assert_eq!(req.len(), req.as_bytes().len());
        assert!(!req.is_empty());
    }

    #[test]
    fn host_header_keeps_explicit_port() {
        let req = build_get(&parts("http://localhost:3000"), "test/1.0");
        assert!(req.as_str().starts_with("GET / HTTP/1.1\r\nHost: localhost:3000\r\n"));
        assert_eq!(req.host(), "localhost:3000");
    }

    #[test]
    fn post_with_args() {
        let args: FormArgs = [("a", "1"), ("b", "2")].into_iter().collect();
        let req = build_post(&parts("http://example.com/submit"), "test/1.0", Some(&args));
        assert_eq!(
            req.as_str(),
            "POST /submit HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test/1.0\r\n\
             Content-Type: application/x-www-form-urlencoded\r\nContent-Length: 7\r\n\r\na=1&b=2"
        );
    }

    #[test]
    fn post_content_length_counts_bytes() {
        let args: FormArgs = [("name", "Zoë")].into_iter().collect();
        let req = build_post(&parts("http://example.com/"), "test/1.0", Some(&args));
        assert!(req.as_str().contains("Content-Length: 9\r\n"));
        assert!(req.as_str().ends_with("\r\n\r\nname=Zoë"));
    }

    #[test]
    fn post_without_args_has_zero_length() {
        let req = build_post(&parts("http://example.com/"), "test/1.0", None);
        assert!(req.as_str().contains("Content-Length: 0\r\n"));
        assert!(req.as_str().ends_with("\r\n\r\n"));

        let empty = build_post(&parts("http://example.com/"), "test/1.0", Some(&FormArgs::new()));
        assert_eq!(req, empty);
    }

    #[test]
    fn post_has_no_accept_header() {
        let req = build_post(&parts("http://example.com/"), "test/1.0", None);
        assert!(!req.as_str().contains("Accept:"));
    }
}
