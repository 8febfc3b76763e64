//! Error types for the core stores and audio backend
//!
//! None of these escape the public store or sound APIs: they are produced by
//! backends and logged where the store absorbs them.

use thiserror::Error;

/// Storage backend failures
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted entry '{key}': {message}")]
    Corruption { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Rejected settings input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("unsupported UI scale: {0}")]
    UnsupportedScale(f64),
}

/// Audio context failures
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("audio output disabled")]
    Disabled,

    #[error("no output device available")]
    NoDevice,

    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to query output config: {0}")]
    Config(String),

    #[error("failed to build output stream: {0}")]
    Stream(String),

    #[error("failed to resume playback: {0}")]
    Resume(String),

    #[error("audio thread stopped")]
    ThreadStopped,
}
