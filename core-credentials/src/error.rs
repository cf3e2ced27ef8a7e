use crate::source::CredentialSourceKind;
use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to parse FIREBASE_SERVICE_ACCOUNT JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to initialize platform app from {kind}: {source}")]
    Init {
        kind: CredentialSourceKind,
        #[source]
        source: BridgeError,
    },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl CredentialError {
    /// Stable name of the error kind, used in structured error details.
    pub fn name(&self) -> &'static str {
        match self {
            CredentialError::Parse(_) => "CredentialParseFailure",
            CredentialError::Init { .. } => "CredentialInitFailure",
            CredentialError::ServiceUnavailable(_) => "ServiceUnavailable",
        }
    }

    /// HTTP status a request handler should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CredentialError::ServiceUnavailable(_) => 503,
            CredentialError::Parse(_) | CredentialError::Init { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CredentialError>;
