//! Error types for the outer surfaces of the crate.
//!
//! Classification itself never fails; these cover naming a grammar and
//! rendering traces.

use thiserror::Error;

/// Result type alias for grammar lookups and trace rendering.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Errors that can occur outside of classification.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The name does not match any known grammar.
    #[error("unknown grammar '{name}' (expected one of: binary, integer, float, email, password)")]
    Unknown { name: String },

    /// A trace could not be rendered as JSON.
    #[error("trace serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
