//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP, platform SDK,
//! configuration, auth session, navigation) into the credential resolver and
//! the OAuth callback handler. Desktop and server hosts typically enable the
//! `desktop-shims` feature, which supplies defaults from `bridge-desktop`.
//!
//! ```ignore
//! let service = core_service::bootstrap(
//!     ServiceConfig::builder()
//!         .token_provider(session)
//!         .navigator(router)
//!         .build()?,
//! )?;
//!
//! if !service.credentials().is_storage_available() {
//!     // answer 503
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{CoreError, Result};

pub use core_auth::{CallbackOutcome, CallbackPage, CallbackParams, CallbackView};
pub use core_credentials::{AuthInfo, ConnectionInfo, CredentialContext};

use std::sync::{Arc, OnceLock};

use bridge_traits::platform::DocumentStore;
use core_auth::CallbackHandler;
use core_runtime::config::ApiConfig;
use core_runtime::logging::init_logging;
use tracing::info;

use crate::config::capability_missing;

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct ConnectService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    config: ServiceConfig,
    credentials: OnceLock<CredentialContext>,
    callback_handler: OnceLock<Arc<CallbackHandler>>,
}

impl ConnectService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                config,
                credentials: OnceLock::new(),
                callback_handler: OnceLock::new(),
            }),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    pub fn api_config(&self) -> &ApiConfig {
        &self.inner.config.api_config
    }

    /// Resolved platform credentials. Resolution runs on first access only.
    pub fn credentials(&self) -> &CredentialContext {
        self.inner.credentials.get_or_init(|| {
            CredentialContext::resolve(
                &self.inner.config.credential_env,
                self.inner.config.platform_sdk.as_ref(),
            )
        })
    }

    /// Document store for request handlers. Fails with a 503-class
    /// credential error while the platform is unavailable.
    pub fn require_store(&self) -> Result<Arc<dyn DocumentStore>> {
        let store = self.credentials().require_store()?;
        Ok(Arc::clone(store))
    }

    /// Exchanges the callback query for a Drive connection without page
    /// state. Returns the connected account email when the backend sends one.
    pub async fn connect_drive(&self, query: &str) -> Result<Option<String>> {
        let handler = self.callback_handler()?;
        let email = handler.connect(&CallbackParams::from_query(query)).await?;
        Ok(email)
    }

    /// Handler for Google Drive OAuth redirects.
    pub fn callback_handler(&self) -> Result<Arc<CallbackHandler>> {
        if let Some(handler) = self.inner.callback_handler.get() {
            return Ok(Arc::clone(handler));
        }

        let token_provider = self.inner.config.token_provider.clone().ok_or_else(|| {
            capability_missing(
                "AuthTokenProvider",
                "AuthTokenProvider implementation is required to exchange OAuth codes. \
                 Inject the signed-in session with ServiceConfigBuilder::token_provider.",
            )
        })?;

        let handler = Arc::new(CallbackHandler::new(
            &self.inner.config.api_config,
            Arc::clone(&self.inner.config.http_client),
            token_provider,
        ));

        Ok(Arc::clone(
            self.inner.callback_handler.get_or_init(|| handler),
        ))
    }

    /// Page state for one visit to the OAuth callback route.
    pub fn callback_page(&self, query: &str) -> Result<CallbackPage> {
        let navigator = self.inner.config.navigator.clone().ok_or_else(|| {
            capability_missing(
                "Navigator",
                "Navigator implementation is required to leave the callback page. \
                 Inject the host router with ServiceConfigBuilder::navigator.",
            )
        })?;

        Ok(CallbackPage::new(
            self.callback_handler()?,
            navigator,
            CallbackParams::from_query(query),
        ))
    }
}

/// Installs logging (when configured), resolves credentials and returns the
/// service.
pub fn bootstrap(mut config: ServiceConfig) -> Result<ConnectService> {
    if let Some(logging) = config.logging.take() {
        init_logging(logging)?;
    }

    let service = ConnectService::new(config);
    let credentials = service.credentials();

    info!(
        api_base_url = %service.api_config().base_url(),
        storage_available = credentials.is_storage_available(),
        auth_available = credentials.is_auth_available(),
        "Connect service ready"
    );

    Ok(service)
}
