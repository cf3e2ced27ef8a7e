//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for native server and desktop
//! hosts (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `HttpClient` using `reqwest`
//! - `PlatformSdk` as an offline validator that checks credential material
//!   locally and hands out in-process app/store handles
//!
//! `ConfigSource` needs no desktop adapter; use
//! [`bridge_traits::ProcessEnv`].
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{OfflinePlatformSdk, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http_client = ReqwestHttpClient::new()?;
//!     let sdk = OfflinePlatformSdk::new();
//!
//!     // Use in core-service configuration
//!     Ok(())
//! }
//! ```

mod http;
mod platform;

pub use http::ReqwestHttpClient;
pub use platform::{OfflineApp, OfflineDocumentStore, OfflinePlatformSdk};
