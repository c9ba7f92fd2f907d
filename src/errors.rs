//! Unified application error type.
//! All modules (api, core, cli, config) return AppError to keep the error
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
    // HTTP transport
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid spot id: {0}")]
    InvalidSpot(String),

    // ---------------------------
    // Reservation workflow errors
    // ---------------------------
    #[error("Invalid reservation dates: {0}")]
    Validation(String),

    #[error("Spot {0} is not available for the requested dates")]
    SpotUnavailable(String),

    #[error("An active reservation already exists on spot {0}")]
    AlreadyReserved(String),

    #[error("No active reservation to cancel")]
    NoReservation,

    #[error("Session not ready: {0}")]
    NotReady(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
