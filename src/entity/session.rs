//! Server-side session rows.

use sea_orm::entity::prelude::*;

/// A persisted `tower-sessions` record.
///
/// Rows are written and read only by
/// [`DbSessionStore`](crate::DbSessionStore); handlers work with
/// `tower_sessions::Session` instead.
///
/// | Column      | Type               | Description                         |
/// |-------------|--------------------|-------------------------------------|
/// | id          | TEXT (Primary Key) | Session ID carried by the cookie    |
/// | data        | BLOB               | MessagePack-encoded session record  |
/// | expiry_date | TIMESTAMPTZ        | Instant after which the row is dead |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// The session id, as carried by the `sessions` cookie.
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    /// The whole `tower_sessions::session::Record`, MessagePack-encoded.
    pub data: Vec<u8>,

    /// Rows at or past this instant are ignored by `load` and removed by
    /// `delete_expired`.
    pub expiry_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
