//! Error types for property access.

use thiserror::Error;

/// Failure to interpret a property value that was present in the store.
///
/// Presence and parseability are separate questions: an absent property is
/// `None`, never an error. Whether a parse failure is fatal is the caller's
/// policy; the version resolver fails open to its compiled-in default.
#[derive(Debug, Error)]
pub enum PropertyParseError {
    /// Value was present but is not a decimal or `0x`-prefixed integer.
    #[error("property '{name}' has a non-numeric value")]
    NotAnInteger {
        /// Name of the offending property.
        name: String,
        /// Raw value as read from the store.
        value: String,
    },
    /// Value parsed but does not fit the requested integer width.
    #[error("property '{name}' is out of range for a 16-bit value")]
    OutOfRange {
        /// Name of the offending property.
        name: String,
        /// Raw value as read from the store.
        value: String,
    },
}
