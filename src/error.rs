use thiserror::Error;

/// Failures the sync commands distinguish from plain I/O or parse errors.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },

    #[error("{service} API returned HTTP {status}: {body}")]
    Http {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} protocol error: {message}")]
    Protocol {
        service: &'static str,
        message: String,
    },

    #[error("no image data in response: {0}")]
    NoImage(String),
}
