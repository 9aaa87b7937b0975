//! Unified application error type.
//! All modules (db, core, api, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Client errors (rejected before any write)
    // ---------------------------
    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidRange(String),

    #[error("{0}")]
    InvalidTarget(String),

    // ---------------------------
    // Corrupted stored configuration
    // ---------------------------
    #[error("invalid settings in database: {0}")]
    InternalInconsistency(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
