//! # Errors
//!
//! Centralized error types for AcademicHub.
//! `StorageError` is what a persistence medium reports; `AppError` is what the
//! account flows hand back to callers. The collection operations on
//! `PersistentStore` never surface either of them.

use thiserror::Error;

/// Failure reported by a `KeyValueStore` implementation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem failure in a disk-backed medium
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the medium cannot represent
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Any other backend failure (e.g., poisoned lock)
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// The primary error type for account operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Entity not found (e.g., User, Resource)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., malformed email, short password)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Credentials did not match
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Entity already exists (e.g., duplicate email)
    #[error("conflict: {0}")]
    Conflict(String),
}

/// A specialized Result type for AcademicHub logic.
pub type Result<T> = std::result::Result<T, AppError>;
