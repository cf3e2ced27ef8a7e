//! # OAuth Redirect Handling
//!
//! Completes the Google Drive authorization-code handoff.
//!
//! ## Overview
//!
//! After the user grants (or denies) access, the provider redirects the
//! browser to the callback page with either a `code` or an `error` query
//! parameter. This crate:
//!
//! - Parses those parameters ([`CallbackParams`])
//! - Sends the code to the backend once, authenticated with the signed-in
//!   user's bearer token ([`CallbackHandler`])
//! - Tracks what the page shows ([`CallbackOutcome`], [`CallbackView`])
//! - Navigates back to the settings route after a short delay, exactly once
//!   per visit ([`CallbackPage`], [`RedirectTimer`])
//!
//! Tokens are never refreshed here and failed exchanges are never retried.
//!
//! ## Usage
//!
//! ```ignore
//! let handler = Arc::new(CallbackHandler::new(&api, http_client, token_provider));
//! let page = CallbackPage::new(handler, navigator, CallbackParams::from_query(query));
//!
//! let mut updates = page.subscribe();
//! page.run().await;
//! render(page.view());
//! ```

pub mod error;
pub mod handler;
pub mod page;
pub mod params;
pub mod timer;

pub use error::{CallbackError, Result};
pub use handler::{
    CallbackHandler, CallbackOutcome, CallbackResolution, CALLBACK_ENDPOINT,
    ERROR_REDIRECT_DELAY, SETTINGS_ROUTE, SUCCESS_REDIRECT_DELAY,
};
pub use page::{CallbackPage, CallbackView, ViewStatus, REDIRECT_HINT};
pub use params::CallbackParams;
pub use timer::RedirectTimer;
