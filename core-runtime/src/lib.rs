//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the connect core:
//! - Logging and tracing infrastructure
//! - Configuration snapshots (API base URL, platform credential variables)
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the other core crates
//! depend on. It establishes the logging conventions and the way
//! configuration is read from a [`ConfigSource`](bridge_traits::ConfigSource).

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
