//! HTTP surface: router, shared state and session configuration.
//!
//! `/ping`, `/signup`, `/login` and `/logout` are open. Everything else sits
//! behind [`auth::require_login`].

pub mod auth;
mod error;
pub mod extract;
pub mod handlers;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::session_store::DbSessionStore;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sessions";

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Inactivity window after which a session expires.
    pub ttl: time::Duration,
    pub secure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl: time::Duration::days(14),
            secure: false,
        }
    }
}

pub fn session_layer(
    store: DbSessionStore,
    settings: SessionSettings,
) -> SessionManagerLayer<DbSessionStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_path("/")
        .with_same_site(SameSite::Lax)
        .with_secure(settings.secure)
        .with_expiry(Expiry::OnInactivity(settings.ttl))
}

pub fn router(state: AppState, sessions: SessionManagerLayer<DbSessionStore>) -> Router {
    let gated = Router::new()
        .route("/whoami", get(handlers::who_am_i))
        .route("/cities", post(handlers::add_city))
        .route("/cities/{city_name}", get(handlers::city_info))
        .route("/cities/{city_name}/population", get(handlers::city_population))
        .route("/countries", get(handlers::countries))
        .route("/country/{country_name}/cities", get(handlers::country_cities))
        .route_layer(middleware::from_fn(auth::require_login));

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/signup", post(handlers::sign_up))
        .route("/login", post(handlers::log_in))
        .route("/logout", post(handlers::log_out))
        .merge(gated)
        .with_state(state)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
}
