//! Status codes and bodies for [`Error`].
//!
//! Bodies are plain text. Client errors echo the error message; server-side
//! failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            // Lookups of unknown cities/countries have always answered 400.
            Self::NotFound(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            Self::InvalidCredentials => StatusCode::FORBIDDEN.into_response(),
            Self::Unauthenticated => (StatusCode::FORBIDDEN, "please login").into_response(),
            Self::Database(_)
            | Self::Hash(_)
            | Self::Session(_)
            | Self::Join(_)
            | Self::Config(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use sea_orm::DbErr;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_400_with_message() {
        let response = Error::NotFound("no city found").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "no city found");
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let response = Error::Conflict("taken".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn bad_credentials_are_403_without_body() {
        let response = Error::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn unauthenticated_asks_for_login() {
        let response = Error::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(response).await, "please login");
    }

    #[tokio::test]
    async fn database_errors_are_not_leaked() {
        let response = Error::Database(DbErr::Custom("secret table".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(response).await.contains("secret"));
    }
}
