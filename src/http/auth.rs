//! Session-backed login state.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::Session;

use super::extract::CurrentUser;
use crate::error::{Error, Result};

/// Session key holding the logged-in username.
pub const USER_KEY: &str = "userName";

/// Rejects requests whose session carries no user; otherwise exposes the
/// user to handlers as a [`CurrentUser`] extension.
pub async fn require_login(session: Session, mut req: Request, next: Next) -> Result<Response> {
    let username: String = session.get(USER_KEY).await?.ok_or(Error::Unauthenticated)?;

    req.extensions_mut().insert(CurrentUser(username));
    Ok(next.run(req).await)
}

/// Binds the session to `username` under a fresh session id.
pub async fn log_in(session: &Session, username: &str) -> Result<()> {
    session.cycle_id().await?;
    session.insert(USER_KEY, username).await?;
    Ok(())
}

/// Drops the session row and expires the cookie.
pub async fn log_out(session: &Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}
