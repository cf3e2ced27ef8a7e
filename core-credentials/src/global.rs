//! Process-wide credential context.
//!
//! Resolution happens at most once per process. Later calls to [`install`]
//! return the context that won the first call.

use std::sync::OnceLock;

use bridge_traits::env::ConfigSource;
use bridge_traits::platform::PlatformSdk;
use core_runtime::config::CredentialEnv;
use tracing::debug;

use crate::context::CredentialContext;

static CONTEXT: OnceLock<CredentialContext> = OnceLock::new();

/// Resolves credentials from `env` and installs the result, unless a context
/// is already installed.
pub fn install(env: &dyn ConfigSource, sdk: &dyn PlatformSdk) -> &'static CredentialContext {
    CONTEXT.get_or_init(|| CredentialContext::resolve(&CredentialEnv::from_source(env), sdk))
}

/// Installs an already-resolved context. Returns it back if one was
/// installed first.
pub fn set(context: CredentialContext) -> std::result::Result<(), CredentialContext> {
    let result = CONTEXT.set(context);
    if result.is_err() {
        debug!("Credential context already installed; keeping the existing one");
    }
    result
}

/// The installed context, if resolution has happened.
pub fn get() -> Option<&'static CredentialContext> {
    CONTEXT.get()
}
