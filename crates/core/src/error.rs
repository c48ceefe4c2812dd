/// Errors raised while loading report configuration from a settings tree.
///
/// Normalization and report composition never fail; only the host-facing
/// configuration loader returns these.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing configuration key: {0}")]
    MissingKey(&'static str),

    #[error("Invalid configuration key {key}: expected {expected}")]
    InvalidKey {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Invalid settings document: {0}")]
    Settings(#[from] serde_json::Error),
}
