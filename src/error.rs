//! Error types for storage, configuration, and markup lookups.

/// Error returned by a [`crate::store::KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The host exposes no persistent store at all.
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    /// Writing a key failed (quota exceeded, storage disabled, ...).
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Error returned by [`crate::config::PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The inline config is not valid JSON for a `PageConfig`.
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid page config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// An edit control named a platform outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform id: {0:?}")]
pub struct UnknownPlatform(pub String);
