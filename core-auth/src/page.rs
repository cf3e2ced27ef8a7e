//! Per-visit state of the callback page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use bridge_traits::navigation::Navigator;
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::handler::{CallbackHandler, CallbackOutcome, CallbackResolution, SETTINGS_ROUTE};
use crate::params::CallbackParams;
use crate::timer::RedirectTimer;

/// Hint shown under a terminal outcome.
pub const REDIRECT_HINT: &str = "Redirecting to settings...";

/// One visit to the callback page.
///
/// The page starts in [`CallbackOutcome::Loading`], handles its parameters at
/// most once, and schedules exactly one navigation to the settings route.
/// Dropping the page cancels a navigation that has not fired yet.
pub struct CallbackPage {
    handler: Arc<CallbackHandler>,
    navigator: Arc<dyn Navigator>,
    params: CallbackParams,
    outcome: watch::Sender<CallbackOutcome>,
    started: AtomicBool,
    redirect: OnceLock<RedirectTimer>,
}

impl CallbackPage {
    pub fn new(
        handler: Arc<CallbackHandler>,
        navigator: Arc<dyn Navigator>,
        params: CallbackParams,
    ) -> Self {
        let (outcome, _) = watch::channel(CallbackOutcome::Loading);

        Self {
            handler,
            navigator,
            params,
            outcome,
            started: AtomicBool::new(false),
            redirect: OnceLock::new(),
        }
    }

    pub fn params(&self) -> &CallbackParams {
        &self.params
    }

    /// Receiver that observes every outcome change.
    pub fn subscribe(&self) -> watch::Receiver<CallbackOutcome> {
        self.outcome.subscribe()
    }

    pub fn outcome(&self) -> CallbackOutcome {
        self.outcome.borrow().clone()
    }

    pub fn view(&self) -> CallbackView {
        CallbackView::from(&*self.outcome.borrow())
    }

    /// Handles the redirect and schedules navigation.
    ///
    /// Only the first call does anything; later calls return `None`.
    pub async fn run(&self) -> Option<CallbackResolution> {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Callback page already handled; ignoring repeated run");
            return None;
        }

        let resolution = self.handler.handle(&self.params).await;
        self.outcome.send_replace(resolution.outcome.clone());

        let timer = RedirectTimer::schedule(
            self.navigator.clone(),
            SETTINGS_ROUTE,
            resolution.redirect_after,
        );
        if self.redirect.set(timer).is_err() {
            debug!("Redirect already scheduled");
        }

        Some(resolution)
    }

    /// `true` when a navigation is scheduled and has neither fired nor been cancelled.
    pub fn redirect_pending(&self) -> bool {
        self.redirect
            .get()
            .map_or(false, |timer| !timer.is_finished() && !timer.is_cancelled())
    }

    /// Cancels the scheduled navigation, if any.
    pub fn cancel_redirect(&self) {
        if let Some(timer) = self.redirect.get() {
            timer.cancel();
        }
    }

    /// Waits until the scheduled navigation has fired or been cancelled.
    ///
    /// Returns `true` if navigation was attempted.
    pub async fn redirect_finished(&self) -> bool {
        match self.redirect.get() {
            Some(timer) => timer.finished().await,
            None => false,
        }
    }
}

/// Visual state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Success,
    Error,
}

/// What the page renders for an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackView {
    pub status: ViewStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl From<&CallbackOutcome> for CallbackView {
    fn from(outcome: &CallbackOutcome) -> Self {
        let status = match outcome {
            CallbackOutcome::Loading => ViewStatus::Loading,
            CallbackOutcome::Success { .. } => ViewStatus::Success,
            CallbackOutcome::Error { .. } => ViewStatus::Error,
        };

        Self {
            status,
            message: outcome.message().to_string(),
            hint: outcome.is_terminal().then_some(REDIRECT_HINT),
        }
    }
}
