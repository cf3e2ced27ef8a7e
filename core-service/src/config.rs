//! Service configuration and its builder.
//!
//! Bridges the host must provide are checked when the configuration is
//! built, so a misconfigured host fails at startup rather than on the first
//! request. With the `desktop-shims` feature the HTTP client and platform SDK
//! fall back to the adapters from `bridge-desktop`.

use std::fmt;
use std::sync::Arc;

use bridge_traits::{
    env::{ConfigSource, ProcessEnv},
    http::HttpClient,
    navigation::Navigator,
    platform::PlatformSdk,
    session::AuthTokenProvider,
};
use core_runtime::config::{ApiConfig, CredentialEnv};
use core_runtime::logging::LoggingConfig;

use crate::error::{CoreError, Result};

/// Everything [`ConnectService`](crate::ConnectService) needs from the host.
pub struct ServiceConfig {
    pub http_client: Arc<dyn HttpClient>,
    pub platform_sdk: Arc<dyn PlatformSdk>,
    pub config_source: Arc<dyn ConfigSource>,
    pub token_provider: Option<Arc<dyn AuthTokenProvider>>,
    pub navigator: Option<Arc<dyn Navigator>>,
    pub api_config: ApiConfig,
    pub credential_env: CredentialEnv,
    pub logging: Option<LoggingConfig>,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.api_config.validate()?;
        Ok(())
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_config", &self.api_config)
            .field("credential_env", &self.credential_env)
            .field("has_token_provider", &self.token_provider.is_some())
            .field("has_navigator", &self.navigator.is_some())
            .field("logging", &self.logging)
            .finish()
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Default)]
pub struct ServiceConfigBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    platform_sdk: Option<Arc<dyn PlatformSdk>>,
    config_source: Option<Arc<dyn ConfigSource>>,
    token_provider: Option<Arc<dyn AuthTokenProvider>>,
    navigator: Option<Arc<dyn Navigator>>,
    api_config: Option<ApiConfig>,
    fallback_project_id: Option<String>,
    logging: Option<LoggingConfig>,
}

impl ServiceConfigBuilder {
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn platform_sdk(mut self, sdk: Arc<dyn PlatformSdk>) -> Self {
        self.platform_sdk = Some(sdk);
        self
    }

    /// Where environment-style settings are read from. Defaults to the
    /// process environment.
    pub fn config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.config_source = Some(source);
        self
    }

    /// Bearer tokens for the signed-in user. Required for OAuth callbacks.
    pub fn token_provider(mut self, provider: Arc<dyn AuthTokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Router used for the post-callback redirect. Required for OAuth callbacks.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Overrides the base URL read from the config source.
    pub fn api_config(mut self, config: ApiConfig) -> Self {
        self.api_config = Some(config);
        self
    }

    /// Project for Application Default Credentials when no variable names one.
    pub fn fallback_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.fallback_project_id = Some(project_id.into());
        self
    }

    /// Installs the tracing subscriber during bootstrap.
    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = Some(config);
        self
    }

    pub fn build(self) -> Result<ServiceConfig> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => provide_default_http_client()?,
        };

        let platform_sdk = match self.platform_sdk {
            Some(sdk) => sdk,
            None => provide_default_platform_sdk()?,
        };

        let config_source = self
            .config_source
            .unwrap_or_else(|| Arc::new(ProcessEnv) as Arc<dyn ConfigSource>);

        let api_config = self
            .api_config
            .unwrap_or_else(|| ApiConfig::from_source(config_source.as_ref()));

        let mut credential_env = CredentialEnv::from_source(config_source.as_ref());
        if let Some(project_id) = self.fallback_project_id {
            credential_env = credential_env.with_fallback_project_id(project_id);
        }

        let config = ServiceConfig {
            http_client,
            platform_sdk,
            config_source,
            token_provider: self.token_provider,
            navigator: self.navigator,
            api_config,
            credential_env,
            logging: self.logging,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client() -> Result<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    let client = ReqwestHttpClient::new()
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    Ok(Arc::new(client))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client() -> Result<Arc<dyn HttpClient>> {
    Err(CoreError::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "HttpClient implementation is required for the OAuth code exchange. \
                 Desktop: enable the 'desktop-shims' feature to use ReqwestHttpClient. \
                 Other hosts: inject an HttpClient with ServiceConfigBuilder::http_client."
            .to_string(),
    })
}

#[cfg(feature = "desktop-shims")]
fn provide_default_platform_sdk() -> Result<Arc<dyn PlatformSdk>> {
    use bridge_desktop::OfflinePlatformSdk;

    Ok(Arc::new(OfflinePlatformSdk::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_platform_sdk() -> Result<Arc<dyn PlatformSdk>> {
    Err(CoreError::CapabilityMissing {
        capability: "PlatformSdk".to_string(),
        message: "PlatformSdk implementation is required for credential resolution. \
                 Inject the platform SDK adapter with ServiceConfigBuilder::platform_sdk."
            .to_string(),
    })
}

/// Error for an optional bridge that an operation turned out to need.
pub(crate) fn capability_missing(capability: &str, message: &str) -> CoreError {
    CoreError::CapabilityMissing {
        capability: capability.to_string(),
        message: message.to_string(),
    }
}
