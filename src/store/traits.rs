//! store::traits
//!
//! Key-value persistence trait.
//!
//! # Design
//!
//! The `KvStore` trait is the persistence surface for named records. Values
//! are opaque text (JSON in practice); the store never interprets them.
//!
//! # Security
//!
//! Records may carry API tokens. Implementations must never log values or
//! include them in error messages.

use thiserror::Error;

/// Errors from key-value storage operations.
///
/// Note: error messages intentionally do not include stored values.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read from storage.
    #[error("failed to read store: {0}")]
    ReadError(String),

    /// Failed to write to storage.
    #[error("failed to write store: {0}")]
    WriteError(String),

    /// The record could not be encoded for storage.
    #[error("failed to encode record '{key}': {message}")]
    EncodeError {
        /// Record key
        key: String,
        /// Encoder message
        message: String,
    },
}

/// Trait for key-value persistence providers.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait KvStore: Send + Sync {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored under the key.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = StoreError::ReadError("disk gone".into());
        assert!(err.to_string().contains("read"));

        let err = StoreError::WriteError("read-only fs".into());
        assert!(err.to_string().contains("write"));

        let err = StoreError::EncodeError {
            key: "jiraPilotConfig".into(),
            message: "bad".into(),
        };
        assert!(err.to_string().contains("jiraPilotConfig"));
    }
}
