use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to GloboDNS.
///
/// Validation failures are reported before any request is sent. Non-2xx
/// responses keep the raw body so callers can inspect the server's reason.
#[derive(Debug, Error)]
pub enum Error {
    #[error("globodns: URL cannot be empty")]
    EmptyBaseUrl,

    #[error("globodns: invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("globodns: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("globodns: unexpected HTTP status code: Code: {status} Body: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("globodns: failed to decode JSON object: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("globodns: no empty page after {limit} pages, giving up")]
    PageLimitExceeded { limit: u32 },

    #[error("globodns: page number overflow after page {page}")]
    PageOverflow { page: i32 },

    #[error("fake does not implement this method")]
    NotImplemented,
}

impl Error {
    /// HTTP status of an unexpected response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
