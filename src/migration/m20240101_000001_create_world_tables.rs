use sea_orm_migration::prelude::*;

/// Creates `country` and `city` when they are missing. A database already
/// loaded with the world dump is left untouched.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Country::Code)
                            .char_len(3)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Country::Name).char_len(52).not_null().default(""))
                    .col(
                        ColumnDef::new(Country::Continent)
                            .string_len(16)
                            .not_null()
                            .default("Asia"),
                    )
                    .col(ColumnDef::new(Country::Region).char_len(26).not_null().default(""))
                    .col(
                        ColumnDef::new(Country::SurfaceArea)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Country::IndepYear).small_integer().null())
                    .col(ColumnDef::new(Country::Population).integer().not_null().default(0))
                    .col(ColumnDef::new(Country::LifeExpectancy).decimal_len(3, 1).null())
                    .col(ColumnDef::new(Country::Gnp).decimal_len(10, 2).null())
                    .col(ColumnDef::new(Country::GnpOld).decimal_len(10, 2).null())
                    .col(ColumnDef::new(Country::LocalName).char_len(45).not_null().default(""))
                    .col(
                        ColumnDef::new(Country::GovernmentForm)
                            .char_len(45)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Country::HeadOfState).char_len(60).null())
                    .col(ColumnDef::new(Country::Capital).integer().null())
                    .col(ColumnDef::new(Country::Code2).char_len(2).not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(City::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(City::Name).char_len(35).not_null().default(""))
                    .col(ColumnDef::new(City::CountryCode).char_len(3).not_null().default(""))
                    .col(ColumnDef::new(City::District).char_len(20).not_null().default(""))
                    .col(ColumnDef::new(City::Population).integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_city_country_code")
                    .table(City::Table)
                    .col(City::CountryCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Country::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Country {
    Table,
    #[sea_orm(iden = "Code")]
    Code,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Continent")]
    Continent,
    #[sea_orm(iden = "Region")]
    Region,
    #[sea_orm(iden = "SurfaceArea")]
    SurfaceArea,
    #[sea_orm(iden = "IndepYear")]
    IndepYear,
    #[sea_orm(iden = "Population")]
    Population,
    #[sea_orm(iden = "LifeExpectancy")]
    LifeExpectancy,
    #[sea_orm(iden = "GNP")]
    Gnp,
    #[sea_orm(iden = "GNPOld")]
    GnpOld,
    #[sea_orm(iden = "LocalName")]
    LocalName,
    #[sea_orm(iden = "GovernmentForm")]
    GovernmentForm,
    #[sea_orm(iden = "HeadOfState")]
    HeadOfState,
    #[sea_orm(iden = "Capital")]
    Capital,
    #[sea_orm(iden = "Code2")]
    Code2,
}

#[derive(DeriveIden)]
enum City {
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "CountryCode")]
    CountryCode,
    #[sea_orm(iden = "District")]
    District,
    #[sea_orm(iden = "Population")]
    Population,
}
