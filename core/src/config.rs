//! Client-side knobs.

/// Port used when the URL authority carries no `:port` suffix.
pub const DEFAULT_PORT: u16 = 80;

/// Bytes requested per `read` call on the response stream.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Settings shared by every request an `HttpClient` makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    pub default_port: u16,
    /// Size of each receive chunk. The early-fail check only ever sees the
    /// first chunk, so the status line must fit inside it.
    pub chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("rawhttp/", env!("CARGO_PKG_VERSION")).to_string(),
            default_port: DEFAULT_PORT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
