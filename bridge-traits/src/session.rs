//! Signed-in user session.

use async_trait::async_trait;

use crate::error::Result;

/// Supplies the bearer token of the currently signed-in user.
///
/// Implementations may suspend (token refresh, storage lookup). The core
/// calls this once per backend request and never caches the result.
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    /// Current bearer token.
    ///
    /// # Errors
    ///
    /// Returns error if no user is signed in or the token cannot be obtained.
    async fn bearer_token(&self) -> Result<String>;
}
