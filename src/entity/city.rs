//! The `city` table of the world schema.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A city row, serialized as the API's city document.
///
/// `district` is omitted from JSON when empty and `population` when zero.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "city")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "CountryCode")]
    pub country_code: String,
    #[sea_orm(column_name = "District")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub district: String,
    #[sea_orm(column_name = "Population")]
    #[serde(skip_serializing_if = "is_zero")]
    pub population: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryCode",
        to = "super::country::Column::Code"
    )]
    Country,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
