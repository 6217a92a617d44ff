#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, NotSet, Set};
use tower::ServiceExt;

use worldpop::entity::{city, country};
use worldpop::http::{router, session_layer, AppState, SessionSettings};
use worldpop::migration::{Migrator, MigratorTrait};
use worldpop::DbSessionStore;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_COST: u32 = 4;

pub async fn setup_db() -> DatabaseConnection {
    // One connection: every pooled connection would get its own in-memory database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn seed_country(db: &DatabaseConnection, code: &str, name: &str, population: i32) {
    country::ActiveModel {
        code: Set(code.into()),
        name: Set(name.into()),
        continent: Set("Asia".into()),
        region: Set(String::new()),
        surface_area: Set(Decimal::ZERO),
        indep_year: Set(None),
        population: Set(population),
        life_expectancy: Set(None),
        gnp: Set(None),
        gnp_old: Set(None),
        local_name: Set(name.into()),
        government_form: Set(String::new()),
        head_of_state: Set(None),
        capital: Set(None),
        code2: Set(code[..2].into()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_city(
    db: &DatabaseConnection,
    name: &str,
    country_code: &str,
    district: &str,
    population: i32,
) -> city::Model {
    city::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        country_code: Set(country_code.into()),
        district: Set(district.into()),
        population: Set(population),
    }
    .insert(db)
    .await
    .unwrap()
}

/// Japan (two cities), the Netherlands (one city) and an empty Antarctica.
pub async fn seed_world(db: &DatabaseConnection) {
    seed_country(db, "JPN", "Japan", 126_714_000).await;
    seed_country(db, "NLD", "Netherlands", 15_864_000).await;
    seed_country(db, "ATA", "Antarctica", 0).await;

    seed_city(db, "Tokyo", "JPN", "Tokyo-to", 7_980_230).await;
    seed_city(db, "Osaka", "JPN", "Osaka", 2_595_674).await;
    seed_city(db, "Amsterdam", "NLD", "Noord-Holland", 731_200).await;
}

pub async fn app() -> (Router, DatabaseConnection) {
    let db = setup_db().await;
    seed_world(&db).await;

    let sessions = session_layer(DbSessionStore::new(db.clone()), SessionSettings::default());
    let app = router(AppState::new(db.clone(), TEST_COST), sessions);
    (app, db)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// The `name=value` part of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("sessions="))
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

/// Signs up and logs in `username`, returning the session cookie.
pub async fn logged_in(app: &Router, username: &str) -> String {
    let creds = serde_json::json!({ "username": username, "password": "correct horse" });

    let response = send(app, post_json("/signup", creds.clone(), None)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(app, post_json("/login", creds, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("login sets the session cookie")
}
