//! Planet repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::planets_sea::{self as planets_adapter, PlanetCreate, PlanetUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::favorites::{self, FavoriteTarget};

/// Planet domain model. Serializes to the flat public JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: i32,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
}

/// Partial update: `None` keeps the stored value, `Some(v)` replaces it
/// (including `Some(None)`, which clears the column).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetPatch {
    pub name: Option<Option<String>>,
    pub climate: Option<Option<String>>,
    pub population: Option<Option<String>>,
}

impl Planet {
    fn apply(self, patch: PlanetPatch) -> PlanetUpdate {
        PlanetUpdate {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            climate: patch.climate.unwrap_or(self.climate),
            population: patch.population.unwrap_or(self.population),
        }
    }
}

fn not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Planet, NotFoundKind::Planet.message())
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Planet>, DomainError> {
    let planets = planets_adapter::find_all(conn).await?;
    Ok(planets.into_iter().map(Planet::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
) -> Result<Option<Planet>, DomainError> {
    let planet = planets_adapter::find_by_id(conn, planet_id).await?;
    Ok(planet.map(Planet::from))
}

/// Like `find_by_id`, but a missing row is a `NotFound` error.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
) -> Result<Planet, DomainError> {
    find_by_id(conn, planet_id).await?.ok_or_else(not_found)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetCreate,
) -> Result<Planet, DomainError> {
    let planet = planets_adapter::create_planet(conn, dto).await?;
    Ok(Planet::from(planet))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
    patch: PlanetPatch,
) -> Result<Planet, DomainError> {
    let existing = require_by_id(conn, planet_id).await?;
    let planet = planets_adapter::update_planet(conn, existing.apply(patch)).await?;
    Ok(Planet::from(planet))
}

/// Delete the row and every favorite pointing at it. Run inside a
/// transaction so neither half is left behind on failure.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
) -> Result<u64, DomainError> {
    let existing = require_by_id(conn, planet_id).await?;
    let favorites_removed =
        favorites::delete_for_target(conn, FavoriteTarget::Planet(existing.id)).await?;
    planets_adapter::delete_planet(conn, existing.id).await?;
    Ok(favorites_removed)
}

impl From<crate::entities::planets::Model> for Planet {
    fn from(model: crate::entities::planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            population: model.population,
        }
    }
}
