//! Google Drive OAuth callback handling.
//!
//! The provider redirects the browser back with either `code` or `error`.
//! [`CallbackHandler`] turns those parameters into exactly one
//! [`CallbackResolution`]: the outcome to show and how long to show it
//! before navigating on. A code is exchanged through a single backend call;
//! nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use bridge_traits::session::AuthTokenProvider;
use core_runtime::config::ApiConfig;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};

use crate::error::{CallbackError, Result};
use crate::params::CallbackParams;

/// Backend endpoint that exchanges the authorization code.
pub const CALLBACK_ENDPOINT: &str = "/api/google-drive-integration/oauth/callback";

/// Route the page navigates to once an outcome has been shown.
pub const SETTINGS_ROUTE: &str = "/settings";

pub const LOADING_MESSAGE: &str = "Processing authorization...";

/// How long an error stays on screen.
pub const ERROR_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// How long a success stays on screen.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

const SUCCESS_MESSAGE: &str = "Google Drive connected successfully";

/// State of one callback page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CallbackOutcome {
    Loading,
    Success {
        message: String,
        #[serde(rename = "accountEmail", skip_serializing_if = "Option::is_none")]
        account_email: Option<String>,
    },
    Error {
        message: String,
    },
}

impl CallbackOutcome {
    pub fn success(account_email: Option<String>) -> Self {
        let message = match &account_email {
            Some(email) => format!("{} ({})", SUCCESS_MESSAGE, email),
            None => SUCCESS_MESSAGE.to_string(),
        };

        CallbackOutcome::Success {
            message,
            account_email,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CallbackOutcome::Loading => LOADING_MESSAGE,
            CallbackOutcome::Success { message, .. } | CallbackOutcome::Error { message } => {
                message
            }
        }
    }

    /// `false` only while the exchange is still pending.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CallbackOutcome::Loading)
    }
}

impl From<&CallbackError> for CallbackOutcome {
    fn from(err: &CallbackError) -> Self {
        CallbackOutcome::Error {
            message: err.to_string(),
        }
    }
}

/// Terminal outcome plus the delay before navigating to [`SETTINGS_ROUTE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResolution {
    pub outcome: CallbackOutcome,
    #[serde(rename = "redirectAfterMs", serialize_with = "serialize_millis")]
    pub redirect_after: Duration,
}

impl CallbackResolution {
    fn from_result(result: Result<Option<String>>) -> Self {
        match result {
            Ok(email) => Self {
                outcome: CallbackOutcome::success(email),
                redirect_after: SUCCESS_REDIRECT_DELAY,
            },
            Err(err) => Self {
                outcome: CallbackOutcome::from(&err),
                redirect_after: ERROR_REDIRECT_DELAY,
            },
        }
    }
}

fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Exchanges authorization codes with the backend.
pub struct CallbackHandler {
    http_client: Arc<dyn HttpClient>,
    token_provider: Arc<dyn AuthTokenProvider>,
    endpoint: String,
}

impl CallbackHandler {
    pub fn new(
        api: &ApiConfig,
        http_client: Arc<dyn HttpClient>,
        token_provider: Arc<dyn AuthTokenProvider>,
    ) -> Self {
        Self {
            http_client,
            token_provider,
            endpoint: api.endpoint(CALLBACK_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolves one redirect. Never fails; every failure becomes an
    /// [`CallbackOutcome::Error`] with the longer redirect delay.
    #[instrument(skip_all, fields(has_code = params.code.is_some(), has_error = params.error.is_some()))]
    pub async fn handle(&self, params: &CallbackParams) -> CallbackResolution {
        let result = self.connect(params).await;

        match &result {
            Ok(email) => info!(has_email = email.is_some(), "Google Drive connected"),
            Err(err) if err.is_local() => debug!(error = %err, "OAuth redirect carried no usable code"),
            Err(err) => error!(error = %err, "Error processing Google Drive callback"),
        }

        CallbackResolution::from_result(result)
    }

    /// Validates the redirect parameters and exchanges the code.
    ///
    /// Returns the connected account email when the backend reports one.
    pub async fn connect(&self, params: &CallbackParams) -> Result<Option<String>> {
        if let Some(provider_error) = &params.error {
            return Err(CallbackError::ProviderDenied(provider_error.clone()));
        }

        let code = params.code.as_deref().ok_or(CallbackError::MissingCode)?;
        self.exchange_code(code).await
    }

    async fn exchange_code(&self, code: &str) -> Result<Option<String>> {
        let token = self
            .token_provider
            .bearer_token()
            .await
            .map_err(|e| CallbackError::Runtime(e.to_string()))?;

        let request = HttpRequest::new(HttpMethod::Post, self.endpoint.clone())
            .bearer_token(token)
            .json(&json!({ "code": code }))
            .map_err(|e| CallbackError::Runtime(e.to_string()))?;

        debug!(endpoint = %self.endpoint, "Sending authorization code to backend");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| CallbackError::Runtime(e.to_string()))?;

        if !response.is_success() {
            return Err(Self::status_error(&response));
        }

        let body: Value = response
            .json()
            .map_err(|e| CallbackError::Runtime(e.to_string()))?;

        Ok(string_field(&body, "email"))
    }

    fn status_error(response: &HttpResponse) -> CallbackError {
        let body = response.json::<Value>().unwrap_or_else(|_| json!({}));
        let message = string_field(&body, "message")
            .unwrap_or_else(|| format!("HTTP {}", response.status));

        CallbackError::HttpStatus {
            status: response.status,
            message,
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
