/// Failures reported by host capabilities.
///
/// The dialog logs these and carries on; they never reach the user as a
/// second error.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// Spawning or talking to the URL handler failed.
    #[error("Failed to open URL: {0}")]
    Open(#[from] std::io::Error),

    /// The URL handler ran but refused the URL.
    #[error("URL handler rejected the request: {0}")]
    Rejected(String),
}
