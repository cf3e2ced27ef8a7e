//! One-shot delayed navigation.

use std::sync::Arc;
use std::time::Duration;

use bridge_traits::navigation::Navigator;
use tokio::sync::watch;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Navigates to a route once, after a delay, unless cancelled first.
///
/// Dropping the timer cancels it, so a navigation can never fire for a page
/// that no longer exists.
#[derive(Debug)]
pub struct RedirectTimer {
    route: String,
    cancel: CancellationToken,
    // None while pending, then whether navigation was attempted
    done: watch::Receiver<Option<bool>>,
}

impl RedirectTimer {
    /// Spawns the timer on the current tokio runtime.
    pub fn schedule(
        navigator: Arc<dyn Navigator>,
        route: impl Into<String>,
        delay: Duration,
    ) -> Self {
        let route = route.into();
        let cancel = CancellationToken::new();
        let (done_tx, done) = watch::channel(None);

        tokio::spawn({
            let route = route.clone();
            let cancel = cancel.clone();
            async move {
                let fired = Self::run(navigator, &route, delay, cancel).await;
                done_tx.send_replace(Some(fired));
            }
        });

        debug!(route = %route, delay_ms = delay.as_millis() as u64, "Redirect scheduled");

        Self {
            route,
            cancel,
            done,
        }
    }

    async fn run(
        navigator: Arc<dyn Navigator>,
        route: &str,
        delay: Duration,
        cancel: CancellationToken,
    ) -> bool {
        let delay_sleep = sleep(delay);
        tokio::pin!(delay_sleep);
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(route = %route, "Redirect cancelled");
                return false;
            }
            _ = delay_sleep.as_mut() => {}
        }

        if let Err(err) = navigator.navigate(route) {
            warn!(route = %route, error = %err, "Redirect navigation failed");
        }
        true
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// `true` once the timer has either navigated or observed cancellation.
    pub fn is_finished(&self) -> bool {
        self.done.borrow().is_some()
    }

    /// Waits for the timer. Returns `true` if navigation was attempted.
    pub async fn finished(&self) -> bool {
        let mut done = self.done.clone();
        let fired = match done.wait_for(Option::is_some).await {
            Ok(fired) => fired.unwrap_or(false),
            // task went away without reporting
            Err(_) => false,
        };
        fired
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
