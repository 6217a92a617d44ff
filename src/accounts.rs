//! Signup and password login.
//!
//! Passwords are stored as bcrypt hashes. Hashing and verification are CPU
//! bound, so both run on tokio's blocking pool.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    SqlErr,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::entity::user;
use crate::error::{Error, Result};

/// Username and password, as posted to `/signup` and `/login`.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub async fn hash_password(password: String, cost: u32) -> Result<String> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// `Ok(false)` on mismatch; `Err` only when `hashed` is not a bcrypt hash.
pub async fn verify_password(password: String, hashed: String) -> Result<bool> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
    Ok(matches)
}

pub async fn username_taken<C: ConnectionTrait>(db: &C, username: &str) -> Result<bool> {
    let count = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Registers a new account.
pub async fn sign_up<C: ConnectionTrait>(db: &C, creds: Credentials, cost: u32) -> Result<()> {
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(Error::Validation(
            "username and password are required".into(),
        ));
    }

    if username_taken(db, &creds.username).await? {
        return Err(taken(&creds.username));
    }

    let hashed_pass = hash_password(creds.password, cost).await?;

    // A concurrent signup can win between the check above and this insert.
    user::ActiveModel {
        username: Set(creds.username.clone()),
        hashed_pass: Set(hashed_pass),
    }
    .insert(db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => taken(&creds.username),
        _ => Error::Database(e),
    })?;

    info!(username = %creds.username, "account created");
    Ok(())
}

fn taken(username: &str) -> Error {
    Error::Conflict(format!("username {username} is already taken"))
}

/// Checks a login attempt and returns the matching account.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
pub async fn authenticate<C: ConnectionTrait>(db: &C, creds: Credentials) -> Result<user::Model> {
    let Some(account) = user::Entity::find_by_id(creds.username.clone()).one(db).await? else {
        warn!(username = %creds.username, "login for unknown user");
        return Err(Error::InvalidCredentials);
    };

    if !verify_password(creds.password, account.hashed_pass.clone()).await? {
        warn!(username = %creds.username, "login with wrong password");
        return Err(Error::InvalidCredentials);
    }

    Ok(account)
}
