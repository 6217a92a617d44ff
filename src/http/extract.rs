//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use crate::accounts::Credentials;
use crate::error::Error;

/// The logged-in user, placed in request extensions by
/// [`require_login`](super::auth::require_login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Credentials are accepted either url-encoded or as JSON.
impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let creds = if is_form {
            Form::<Credentials>::from_request(req, state)
                .await
                .map(|Form(creds)| creds)
                .map_err(|_| Error::Validation("Bad request".into()))?
        } else {
            Json::<Credentials>::from_request(req, state)
                .await
                .map(|Json(creds)| creds)
                .map_err(|_| Error::Validation("Bad request".into()))?
        };

        Ok(creds)
    }
}
