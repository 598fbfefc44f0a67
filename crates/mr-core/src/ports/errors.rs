use thiserror::Error;

/// Failure of a single live lookup.
///
/// The resolver treats every variant as "not found" for that reference only.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum SavedItemStoreError {
    #[error("invalid user key: {0}")]
    InvalidUser(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("corrupt saved items: {0}")]
    Corrupt(String),
}
