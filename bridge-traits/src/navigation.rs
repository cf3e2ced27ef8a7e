//! Host UI navigation.

use crate::error::Result;

/// Moves the host UI to another route (e.g. `/settings`).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str) -> Result<()>;
}
