//! Blocking socket I/O: connect, send the request, read the response.
//!
//! # Design
//! The read side is a two-state machine. `AwaitingFirst` reads one chunk and
//! inspects its status line; a redirect-class code moves straight to `Done`
//! because such peers may hold the connection open, otherwise the machine
//! enters `Streaming` and reads until the peer closes. `Content-Length` is
//! never consulted, so a non-redirect body is only complete once the peer
//! closes its side.
//!
//! `read_response` works on any `Read`, which lets the state machine be
//! driven from in-memory readers in tests.

use std::io::{self, Read, Write};
use std::net::TcpStream;

use tracing::debug;

use crate::error::HttpError;
use crate::response::{codes_early_fail, peek_code};

/// Open a blocking TCP stream to `host:port`.
pub fn connect(host: &str, port: u16) -> Result<TcpStream, HttpError> {
    debug!(host, port, "connecting");
    TcpStream::connect((host, port)).map_err(|source| HttpError::Connection {
        host: host.to_string(),
        port,
        source,
    })
}

/// Write the whole buffer, blocking until it is sent.
pub fn send_all<W: Write>(stream: &mut W, buffer: &[u8]) -> Result<(), HttpError> {
    stream.write_all(buffer)?;
    stream.flush()?;
    debug!(bytes = buffer.len(), "request sent");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    AwaitingFirst,
    Streaming,
    Done,
}

/// Read the response in `chunk_size` pieces until the peer closes the
/// stream, or until the first chunk reports a redirect-class status.
pub fn read_response<R: Read>(stream: &mut R, chunk_size: usize) -> Result<Vec<u8>, HttpError> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut chunks = 0usize;
    let mut state = ReadState::AwaitingFirst;

    while state != ReadState::Done {
        let n = match stream.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        if n == 0 {
            state = ReadState::Done;
            continue;
        }

        let part = &chunk[..n];
        buffer.extend_from_slice(part);
        chunks += 1;

        state = match state {
            ReadState::AwaitingFirst => match peek_code(&String::from_utf8_lossy(part)) {
                Some(code) if codes_early_fail(code) => {
                    debug!(code, "redirect status in first chunk, not waiting for close");
                    ReadState::Done
                }
                _ => ReadState::Streaming,
            },
            other => other,
        };
    }

    debug!(bytes = buffer.len(), chunks, "response received");
    Ok(buffer)
}
