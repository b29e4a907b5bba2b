//! Response parsing: header/body split and status-code extraction.
//!
//! # Design
//! Splitting is on the first `\r\n\r\n` only, so a body that itself contains
//! blank lines survives intact. A missing separator is a hard failure. The
//! status code is reported as `Option` rather than a sentinel so callers must
//! decide what "no status line" means; `parse_response` treats it as an error.

use crate::error::HttpError;
use crate::http::Response;

const SEPARATOR: &str = "\r\n\r\n";

/// Split raw response text into header lines and body.
pub fn get_headers_body(raw: &str) -> Result<(Vec<&str>, &str), HttpError> {
    let (head, body) = raw.split_once(SEPARATOR).ok_or(HttpError::ResponseParse)?;
    Ok((head.split("\r\n").collect(), body))
}

/// Status code from the first line starting with `HTTP`.
///
/// Returns `None` when no such line exists or its second whitespace token
/// is not a number.
pub fn get_code<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<u16> {
    let status_line = lines.into_iter().find(|line| line.starts_with("HTTP"))?;
    status_line.split_whitespace().nth(1)?.parse().ok()
}

/// Redirect-class codes, `300..400`, after which reading stops early.
pub fn codes_early_fail(code: u16) -> bool {
    (300..400).contains(&code)
}

/// Status code visible in a partial response, such as the first chunk off
/// the wire. Uses the header block when the separator has already arrived,
/// and otherwise scans whatever lines are present.
pub fn peek_code(partial: &str) -> Option<u16> {
    let head = partial.split_once(SEPARATOR).map_or(partial, |(head, _)| head);
    get_code(head.split("\r\n"))
}

/// Build a `Response` from the complete raw text of a response.
pub fn parse_response(raw: &str) -> Result<Response, HttpError> {
    let (lines, body) = get_headers_body(raw)?;
    let status = get_code(lines.iter().copied()).ok_or(HttpError::MissingStatusCode)?;
    let status_idx = lines.iter().position(|line| line.starts_with("HTTP"));

    let headers = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != status_idx)
        .filter_map(|(_, line)| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    Ok(Response {
        status,
        headers,
        body: body.to_string(),
    })
}
