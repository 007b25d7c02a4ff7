//! Error types for the Atheneum client core

use thiserror::Error;

/// Main application error type
///
/// One variant per failure class the core can surface: provider
/// authentication failures, catalog fetch failures, borrow-request
/// submission failures, and the client-side guard rejection raised when a
/// borrow is attempted without a session. `SignInRequired` never reaches the
/// document store; it is produced and handled entirely on this side of the
/// boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    #[error("Borrow request failed: {0}")]
    Submit(String),

    #[error("Sign-in required")]
    SignInRequired,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
