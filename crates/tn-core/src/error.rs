//! Workspace base error type.
//!
//! Sub-crates define their own error enums; `TnError` only covers parsing
//! the core types from user-facing strings.

use thiserror::Error;

/// The top-level error type for `tn-core`.
#[derive(Debug, Error)]
pub enum TnError {
    #[error("unknown commuter tier {0:?}")]
    UnknownTier(String),
}

/// Shorthand result type for `tn-core`.
pub type TnResult<T> = Result<T, TnError>;
