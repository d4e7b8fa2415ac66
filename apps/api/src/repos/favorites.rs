//! Favorite repository functions.
//!
//! A favorite points at exactly one planet or one person. The two nullable
//! columns are only ever written through `FavoriteTarget`, so rows created
//! here never carry both or neither.
//!
//! Referenced ids are not checked on insert and the store has no foreign
//! keys. Deleting a planet or person removes its favorites through
//! `delete_for_target`, inside the caller's transaction.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::favorites_sea::{self as favorites_adapter, FavoriteCreate};
use crate::entities::favorites;
use crate::errors::domain::{DomainError, NotFoundKind};

/// What a favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Person(i32),
}

impl FavoriteTarget {
    fn column(self) -> (favorites::Column, i32) {
        match self {
            FavoriteTarget::Planet(id) => (favorites::Column::PlanetId, id),
            FavoriteTarget::Person(id) => (favorites::Column::PeopleId, id),
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Person(_) => "people",
        }
    }

    pub fn id(self) -> i32 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => id,
        }
    }
}

/// Favorite domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Favorite>, DomainError> {
    let favorites = favorites_adapter::find_all(conn).await?;
    Ok(favorites.into_iter().map(Favorite::from).collect())
}

pub async fn find_by_user_and_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Option<Favorite>, DomainError> {
    let (column, target_id) = target.column();
    let favorite =
        favorites_adapter::find_first_by_user_and_column(conn, user_id, column, target_id).await?;
    Ok(favorite.map(Favorite::from))
}

/// Insert a favorite. The referenced user and target are not checked here;
/// the store's foreign keys are the only guard.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Favorite, DomainError> {
    let dto = match target {
        FavoriteTarget::Planet(planet_id) => FavoriteCreate {
            user_id,
            planet_id: Some(planet_id),
            people_id: None,
        },
        FavoriteTarget::Person(people_id) => FavoriteCreate {
            user_id,
            planet_id: None,
            people_id: Some(people_id),
        },
    };
    let favorite = favorites_adapter::create_favorite(conn, dto).await?;
    Ok(Favorite::from(favorite))
}

/// Delete the first favorite matching (user, target).
pub async fn delete_by_user_and_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Favorite, DomainError> {
    let favorite = find_by_user_and_target(conn, user_id, target)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Favorite, NotFoundKind::Favorite.message())
        })?;
    favorites_adapter::delete_favorite(conn, favorite.id).await?;
    Ok(favorite)
}

/// Remove every favorite pointing at `target`. Returns the number removed.
pub async fn delete_for_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    target: FavoriteTarget,
) -> Result<u64, DomainError> {
    let (column, target_id) = target.column();
    let result = favorites_adapter::delete_by_column(conn, column, target_id).await?;
    Ok(result.rows_affected)
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
            people_id: model.people_id,
        }
    }
}
