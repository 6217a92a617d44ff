//! Crate-wide error type.
//!
//! The HTTP status each variant maps to lives in `http::error`.

use sea_orm::DbErr;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("bcrypt error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed or incomplete input. The message is returned to the client.
    #[error("{0}")]
    Validation(String),

    /// A looked-up row does not exist. The message is returned to the client.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("please login")]
    Unauthenticated,
}
