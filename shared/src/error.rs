use thiserror::Error;

/// Failures surfaced by the identity admin API client. Both variants are
/// reported to the caller as a 500 with the message text (the gateway takes
/// no position on whose fault a backend rejection is).
#[derive(Debug, Error)]
pub enum AdminError {
    /// The request never produced an HTTP response.
    #[error("identity admin API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
}
