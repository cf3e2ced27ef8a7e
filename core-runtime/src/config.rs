//! # Core Configuration Module
//!
//! Configuration snapshots read once from a [`ConfigSource`].
//!
//! ## Overview
//!
//! Two independent snapshots live here:
//!
//! - [`ApiConfig`] - the backend base URL used by client-side code
//!   (`VITE_API_BASE_URL`, `VITE_API_URL`, `VITE_BACKEND_URL`, in that order)
//! - [`CredentialEnv`] - the platform credential variables consumed by the
//!   credential resolver (`FIREBASE_*`, `GOOGLE_CLOUD_PROJECT`)
//!
//! Empty values are treated exactly like unset ones.
//!
//! ## Usage
//!
//! ```
//! use bridge_traits::MemoryEnv;
//! use core_runtime::config::ApiConfig;
//!
//! let env = MemoryEnv::new().with("VITE_API_URL", "https://api.example.com//");
//! let api = ApiConfig::from_source(&env);
//! assert_eq!(api.base_url(), "https://api.example.com");
//! ```

use crate::error::{Error, Result};
use bridge_traits::ConfigSource;
use std::fmt;
use tracing::{debug, info};

/// Candidate variables for the backend base URL, highest priority first.
pub const API_BASE_URL_KEYS: [&str; 3] = ["VITE_API_BASE_URL", "VITE_API_URL", "VITE_BACKEND_URL"];

/// Base URL used when no candidate variable is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

pub const FIREBASE_SERVICE_ACCOUNT: &str = "FIREBASE_SERVICE_ACCOUNT";
pub const FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const FIREBASE_CLIENT_EMAIL: &str = "FIREBASE_CLIENT_EMAIL";
pub const FIREBASE_PRIVATE_KEY: &str = "FIREBASE_PRIVATE_KEY";
pub const FIREBASE_USE_ADC: &str = "FIREBASE_USE_ADC";
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";

/// Project used for Application Default Credentials when neither
/// `GOOGLE_CLOUD_PROJECT` nor `FIREBASE_PROJECT_ID` is set.
pub const DEFAULT_ADC_PROJECT_ID: &str = "prompt-6a4fd";

/// Backend API location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a config from an explicit base URL. Trailing slashes are stripped.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL from the first non-empty candidate variable,
    /// falling back to [`DEFAULT_API_BASE_URL`].
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        debug!(
            vite_api_base_url = source.is_set(API_BASE_URL_KEYS[0]),
            vite_api_url = source.is_set(API_BASE_URL_KEYS[1]),
            vite_backend_url = source.is_set(API_BASE_URL_KEYS[2]),
            "API base URL candidates"
        );

        let config = API_BASE_URL_KEYS
            .iter()
            .find_map(|key| source.get_non_empty(key))
            .map(Self::new)
            .unwrap_or_else(|| Self::new(DEFAULT_API_BASE_URL));

        info!(base_url = %config.base_url, "Using API base URL");
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Checks that the base URL is a usable absolute HTTP(S) URL.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("API base URL cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Snapshot of the platform credential variables.
///
/// The `Debug` implementation never prints the service-account blob or the
/// private key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialEnv {
    pub service_account: Option<String>,
    pub project_id: Option<String>,
    pub client_email: Option<String>,
    pub private_key: Option<String>,
    pub use_adc: Option<String>,
    pub google_cloud_project: Option<String>,
    pub fallback_project_id: Option<String>,
}

/// Which credential variables are present, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvPresence {
    pub has_service_account: bool,
    pub has_project_id: bool,
    pub has_client_email: bool,
    pub has_private_key: bool,
    pub has_use_adc: bool,
    pub has_google_cloud_project: bool,
}

impl CredentialEnv {
    /// Reads every credential variable once.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            service_account: source.get_non_empty(FIREBASE_SERVICE_ACCOUNT),
            project_id: source.get_non_empty(FIREBASE_PROJECT_ID),
            client_email: source.get_non_empty(FIREBASE_CLIENT_EMAIL),
            private_key: source.get_non_empty(FIREBASE_PRIVATE_KEY),
            use_adc: source.get_non_empty(FIREBASE_USE_ADC),
            google_cloud_project: source.get_non_empty(GOOGLE_CLOUD_PROJECT),
            fallback_project_id: None,
        }
    }

    /// Overrides the project used for ADC when nothing else names one.
    pub fn with_fallback_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.fallback_project_id = Some(project_id.into());
        self
    }

    /// `FIREBASE_USE_ADC` is an explicit opt-in only when it is exactly `"true"`.
    pub fn use_adc(&self) -> bool {
        self.use_adc.as_deref() == Some("true")
    }

    /// ADC is attempted on explicit opt-in or when a cloud project marker is present.
    pub fn adc_requested(&self) -> bool {
        self.use_adc() || self.google_cloud_project.is_some()
    }

    /// Project for ADC: `GOOGLE_CLOUD_PROJECT`, then `FIREBASE_PROJECT_ID`,
    /// then the fallback.
    pub fn adc_project_id(&self) -> String {
        self.google_cloud_project
            .clone()
            .or_else(|| self.project_id.clone())
            .or_else(|| self.fallback_project_id.clone())
            .unwrap_or_else(|| DEFAULT_ADC_PROJECT_ID.to_string())
    }

    pub fn presence(&self) -> EnvPresence {
        EnvPresence {
            has_service_account: self.service_account.is_some(),
            has_project_id: self.project_id.is_some(),
            has_client_email: self.client_email.is_some(),
            has_private_key: self.private_key.is_some(),
            has_use_adc: self.use_adc(),
            has_google_cloud_project: self.google_cloud_project.is_some(),
        }
    }
}

impl fmt::Debug for CredentialEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEnv")
            .field(
                "service_account",
                &self.service_account.as_ref().map(|_| "[REDACTED]"),
            )
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("use_adc", &self.use_adc)
            .field("google_cloud_project", &self.google_cloud_project)
            .field("fallback_project_id", &self.fallback_project_id)
            .finish()
    }
}
