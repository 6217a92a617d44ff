use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;
use tower_sessions::Session;
use tracing::info;

use super::auth;
use super::extract::CurrentUser;
use super::AppState;
use crate::accounts::{self, Credentials};
use crate::error::{Error, Result};
use crate::world::{self, City, CityPopulation, NameEntry, NewCity};

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub username: String,
}

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn sign_up(State(state): State<AppState>, creds: Credentials) -> Result<StatusCode> {
    accounts::sign_up(&state.db, creds, state.bcrypt_cost).await?;
    Ok(StatusCode::CREATED)
}

pub async fn log_in(
    State(state): State<AppState>,
    session: Session,
    creds: Credentials,
) -> Result<StatusCode> {
    let account = accounts::authenticate(&state.db, creds).await?;
    auth::log_in(&session, &account.username).await?;

    info!(username = %account.username, "logged in");
    Ok(StatusCode::OK)
}

pub async fn log_out(session: Session) -> Result<StatusCode> {
    auth::log_out(&session).await?;
    Ok(StatusCode::OK)
}

pub async fn who_am_i(Extension(CurrentUser(username)): Extension<CurrentUser>) -> Json<WhoAmI> {
    Json(WhoAmI { username })
}

pub async fn city_info(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> Result<Json<City>> {
    Ok(Json(world::find_city(&state.db, &city_name).await?))
}

pub async fn city_population(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> Result<Json<CityPopulation>> {
    Ok(Json(world::city_population(&state.db, &city_name).await?))
}

pub async fn add_city(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewCity>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(new_city) = body.map_err(|_| Error::Validation("Bad request".into()))?;
    let city = world::insert_city(&state.db, new_city).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

pub async fn countries(State(state): State<AppState>) -> Result<Json<Vec<NameEntry>>> {
    Ok(Json(world::list_country_names(&state.db).await?))
}

pub async fn country_cities(
    State(state): State<AppState>,
    Path(country_name): Path<String>,
) -> Result<Json<Vec<NameEntry>>> {
    Ok(Json(
        world::list_city_names_in_country(&state.db, &country_name).await?,
    ))
}
