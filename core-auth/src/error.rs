use thiserror::Error;

/// Failure while handling an OAuth redirect.
///
/// `Display` is the user-facing message shown on the callback page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// The provider redirected back with an `error` parameter.
    #[error("Authorization error: {0}")]
    ProviderDenied(String),

    #[error("Authorization code not received")]
    MissingCode,

    /// The backend answered the code exchange with a non-2xx status.
    #[error("Connection error: {message}")]
    HttpStatus { status: u16, message: String },

    /// Token acquisition, transport or response decoding failed.
    #[error("Connection error: {0}")]
    Runtime(String),
}

impl CallbackError {
    /// `true` when the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, CallbackError::ProviderDenied(_) | CallbackError::MissingCode)
    }
}

pub type Result<T> = std::result::Result<T, CallbackError>;
