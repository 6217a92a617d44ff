//! The `country` table of the world schema.

use sea_orm::entity::prelude::*;

/// A country row. Nullable columns in the world schema are `Option`s here;
/// the DECIMAL columns of the world dump map to [`Decimal`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Code")]
    pub code: String,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Continent")]
    pub continent: String,
    #[sea_orm(column_name = "Region")]
    pub region: String,
    #[sea_orm(column_name = "SurfaceArea", column_type = "Decimal(Some((10, 2)))")]
    pub surface_area: Decimal,
    #[sea_orm(column_name = "IndepYear")]
    pub indep_year: Option<i16>,
    #[sea_orm(column_name = "Population")]
    pub population: i32,
    #[sea_orm(column_name = "LifeExpectancy", column_type = "Decimal(Some((3, 1)))")]
    pub life_expectancy: Option<Decimal>,
    #[sea_orm(column_name = "GNP", column_type = "Decimal(Some((10, 2)))")]
    pub gnp: Option<Decimal>,
    #[sea_orm(column_name = "GNPOld", column_type = "Decimal(Some((10, 2)))")]
    pub gnp_old: Option<Decimal>,
    #[sea_orm(column_name = "LocalName")]
    pub local_name: String,
    #[sea_orm(column_name = "GovernmentForm")]
    pub government_form: String,
    #[sea_orm(column_name = "HeadOfState")]
    pub head_of_state: Option<String>,
    #[sea_orm(column_name = "Capital")]
    pub capital: Option<i32>,
    #[sea_orm(column_name = "Code2")]
    pub code2: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::city::Entity")]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
