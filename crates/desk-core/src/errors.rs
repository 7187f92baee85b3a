//! Cross-cutting error types for Frontdesk.
//!
//! Domain-specific errors (`SourceError`, `ConfigError`) live in their own
//! crates. The CLI converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Frontdesk crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name any known value of an enum.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
