//! Workspace placeholder crate.
//!
//! This crate exposes the shared feature flags that map to the individual
//! workspace crates. Hosts can depend on `connect-workspace`, enable
//! `desktop-shims`, and reach the service façade without wiring each crate
//! individually.

#[cfg(feature = "desktop-shims")]
pub use core_service::*;
