use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Credential error: {0}")]
    Credentials(#[from] core_credentials::CredentialError),

    #[error("Callback error: {0}")]
    Callback(#[from] core_auth::CallbackError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
