//! # Host Bridge Traits
//!
//! Capability contracts that the connect core requires from its host.
//!
//! ## Overview
//!
//! This crate defines the seam between the core logic (credential resolution,
//! OAuth callback handling) and the collaborators it does not implement
//! itself: the HTTP transport, the process configuration, the signed-in user
//! session, page navigation, and the managed platform SDK. Each trait
//! represents one capability; hosts inject concrete adapters.
//!
//! ## Traits
//!
//! ### Networking
//! - [`HttpClient`](http::HttpClient) - Single-shot async HTTP requests
//!
//! ### Configuration & Session
//! - [`ConfigSource`](env::ConfigSource) - Environment-style key lookup
//! - [`AuthTokenProvider`](session::AuthTokenProvider) - Bearer token for the signed-in user
//!
//! ### Platform Integration
//! - [`PlatformSdk`](platform::PlatformSdk) - Managed identity/document-store SDK
//! - [`Navigator`](navigation::Navigator) - Route changes in the host UI
//!
//! ### Utilities
//! - [`LoggerSink`](log::LoggerSink) - Forward structured logs to host logging
//!
//! ## Implementations
//!
//! | Capability | Desktop (`bridge-desktop`) | In-crate |
//! |------------|----------------------------|----------|
//! | `HttpClient` | `ReqwestHttpClient` | - |
//! | `PlatformSdk` | `OfflinePlatformSdk` | - |
//! | `ConfigSource` | - | `ProcessEnv`, `MemoryEnv` |
//! | `LoggerSink` | - | `ConsoleLogger` |
//!
//! `AuthTokenProvider` and `Navigator` are always host-provided.
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Adapters
//! should convert platform-specific errors into it and keep messages
//! actionable, because these messages end up in user-facing text.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so handles can be shared across
//! async tasks.

pub mod env;
pub mod error;
pub mod http;
pub mod log;
pub mod navigation;
pub mod platform;
pub mod session;

pub use error::BridgeError;

// Re-export commonly used types
pub use env::{ConfigSource, MemoryEnv, ProcessEnv};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use navigation::Navigator;
pub use platform::{
    AppCredential, AppOptions, CertificateCredential, DocumentStore, PlatformApp, PlatformSdk,
};
pub use session::AuthTokenProvider;
