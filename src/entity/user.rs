//! Registered accounts.

use sea_orm::entity::prelude::*;

/// An account row. `hashed_pass` is a bcrypt hash string and never leaves
/// the server.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Username")]
    pub username: String,
    #[sea_orm(column_name = "HashedPass")]
    pub hashed_pass: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
