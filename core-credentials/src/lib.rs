//! # Platform Credentials
//!
//! Resolves the credential used to connect to the managed identity and
//! document-store platform, once, at process start.
//!
//! ## Overview
//!
//! Sources are tried in a fixed priority order and the first one that
//! initializes successfully wins:
//!
//! 1. `FIREBASE_SERVICE_ACCOUNT` - a complete service-account JSON blob
//! 2. `FIREBASE_PROJECT_ID` + `FIREBASE_CLIENT_EMAIL` + `FIREBASE_PRIVATE_KEY`
//! 3. Application Default Credentials, when `FIREBASE_USE_ADC=true` or
//!    `GOOGLE_CLOUD_PROJECT` is set
//!
//! A source that fails is recorded and never retried; resolution moves on to
//! the next one. When nothing is configured the platform is simply
//! unavailable, which is a valid steady state rather than an error.
//!
//! The result is an immutable [`CredentialContext`]. Hosts either pass it
//! around explicitly or install it once as the process-wide instance through
//! [`global`].
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::OfflinePlatformSdk;
//! use bridge_traits::ProcessEnv;
//! use core_credentials::global;
//!
//! let context = global::install(&ProcessEnv, &OfflinePlatformSdk::new());
//! if !context.is_storage_available() {
//!     // respond 503 to callers that need the document store
//! }
//! ```

pub mod context;
pub mod error;
pub mod global;
pub mod source;

pub use context::{AuthInfo, ConnectionInfo, ConnectionState, CredentialContext, ErrorDetails};
pub use error::{CredentialError, Result};
pub use source::{decode_private_key, CredentialSource, CredentialSourceKind, ServiceAccountKey};
