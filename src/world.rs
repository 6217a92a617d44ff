//! Queries against the world schema.
//!
//! Each function is one parameterized statement plus the mapping into the
//! shape the API returns.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QuerySelect,
    Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entity::{city, country};
use crate::error::{Error, Result};

pub type City = city::Model;

/// Code, name and population of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub population: i32,
}

/// A city's population and its share of its country's population.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityPopulation {
    pub name: String,
    pub population: i32,
    pub ratio: f64,
}

/// One entry of a name listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameEntry {
    pub name: String,
}

/// Body of a city insert. The id is always assigned by the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub population: i32,
}

impl NewCity {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("city name is required".into()));
        }
        if self.country_code.chars().count() != 3 {
            return Err(Error::Validation(
                "countryCode must be a three-letter code".into(),
            ));
        }
        if self.population < 0 {
            return Err(Error::Validation("population cannot be negative".into()));
        }
        Ok(())
    }
}

pub async fn find_city<C: ConnectionTrait>(db: &C, name: &str) -> Result<City> {
    city::Entity::find()
        .filter(city::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| {
            info!(city = name, "no such city");
            Error::NotFound("no city found")
        })
}

pub async fn country_summary<C: ConnectionTrait>(db: &C, code: &str) -> Result<CountrySummary> {
    summary_where(db, country::Column::Code.eq(code))
        .await?
        .ok_or_else(|| {
            info!(country_code = code, "no such country code");
            Error::NotFound("no country found")
        })
}

// Only the columns the API needs; the world dump's DECIMAL columns stay unread.
async fn summary_where<C: ConnectionTrait>(
    db: &C,
    condition: sea_orm::sea_query::SimpleExpr,
) -> Result<Option<CountrySummary>> {
    let row: Option<(String, String, i32)> = country::Entity::find()
        .select_only()
        .column(country::Column::Code)
        .column(country::Column::Name)
        .column(country::Column::Population)
        .filter(condition)
        .into_tuple()
        .one(db)
        .await?;

    Ok(row.map(|(code, name, population)| CountrySummary {
        code,
        name,
        population,
    }))
}

/// Share of `country_population` living in a city of `city_population`.
/// An empty country yields 0 rather than a non-finite ratio.
pub fn population_ratio(city_population: i32, country_population: i32) -> f64 {
    if country_population == 0 {
        return 0.0;
    }
    f64::from(city_population) / f64::from(country_population)
}

/// The two-line population summary printed by the `city` command.
pub fn population_report(city: &City, country: &CountrySummary) -> String {
    let ratio = population_ratio(city.population, country.population);
    format!(
        "{} has a population of {}\n{} holds {:.4}% of the population of {}",
        city.name,
        city.population,
        city.name,
        ratio * 100.0,
        country.name
    )
}

pub async fn city_population<C: ConnectionTrait>(db: &C, name: &str) -> Result<CityPopulation> {
    let city = find_city(db, name).await?;
    let country = country_summary(db, &city.country_code).await?;

    Ok(CityPopulation {
        ratio: population_ratio(city.population, country.population),
        name: city.name,
        population: city.population,
    })
}

pub async fn find_country_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<CountrySummary> {
    summary_where(db, country::Column::Name.eq(name))
        .await?
        .ok_or_else(|| {
            info!(country = name, "no such country");
            Error::NotFound("no cities found")
        })
}

/// Sorts by byte order, independent of the database collation.
fn sorted_entries(mut names: Vec<String>) -> Vec<NameEntry> {
    names.sort();
    names.into_iter().map(|name| NameEntry { name }).collect()
}

/// Every country name, ascending.
pub async fn list_country_names<C: ConnectionTrait>(db: &C) -> Result<Vec<NameEntry>> {
    let names: Vec<String> = country::Entity::find()
        .select_only()
        .column(country::Column::Name)
        .into_tuple()
        .all(db)
        .await?;

    Ok(sorted_entries(names))
}

/// Names of the cities in the named country, ascending. A country without
/// cities yields an empty list; an unknown country is `NotFound`.
pub async fn list_city_names_in_country<C: ConnectionTrait>(
    db: &C,
    country_name: &str,
) -> Result<Vec<NameEntry>> {
    let country = find_country_by_name(db, country_name).await?;

    let names: Vec<String> = city::Entity::find()
        .select_only()
        .column(city::Column::Name)
        .filter(city::Column::CountryCode.eq(country.code.as_str()))
        .into_tuple()
        .all(db)
        .await?;

    Ok(sorted_entries(names))
}

pub async fn insert_city<C: ConnectionTrait>(db: &C, new_city: NewCity) -> Result<City> {
    new_city.validate()?;

    let inserted = city::ActiveModel {
        id: NotSet,
        name: Set(new_city.name),
        country_code: Set(new_city.country_code),
        district: Set(new_city.district),
        population: Set(new_city.population),
    }
    .insert(db)
    .await?;

    info!(id = inserted.id, city = %inserted.name, "city added");
    Ok(inserted)
}
