//! Person (character) repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::people_sea::{self as people_adapter, PersonCreate, PersonUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::favorites::{self, FavoriteTarget};

/// Person domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: i32,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
}

/// Partial update; same semantics as `PlanetPatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<Option<String>>,
    pub gender: Option<Option<String>>,
    pub height: Option<Option<String>>,
}

impl Person {
    fn apply(self, patch: PersonPatch) -> PersonUpdate {
        PersonUpdate {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            gender: patch.gender.unwrap_or(self.gender),
            height: patch.height.unwrap_or(self.height),
        }
    }
}

fn not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Person, NotFoundKind::Person.message())
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Person>, DomainError> {
    let people = people_adapter::find_all(conn).await?;
    Ok(people.into_iter().map(Person::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
) -> Result<Option<Person>, DomainError> {
    let person = people_adapter::find_by_id(conn, person_id).await?;
    Ok(person.map(Person::from))
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
) -> Result<Person, DomainError> {
    find_by_id(conn, person_id).await?.ok_or_else(not_found)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PersonCreate,
) -> Result<Person, DomainError> {
    let person = people_adapter::create_person(conn, dto).await?;
    Ok(Person::from(person))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
    patch: PersonPatch,
) -> Result<Person, DomainError> {
    let existing = require_by_id(conn, person_id).await?;
    let person = people_adapter::update_person(conn, existing.apply(patch)).await?;
    Ok(Person::from(person))
}

/// Delete the row and every favorite pointing at it. Run inside a
/// transaction so neither half is left behind on failure.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
) -> Result<u64, DomainError> {
    let existing = require_by_id(conn, person_id).await?;
    let favorites_removed =
        favorites::delete_for_target(conn, FavoriteTarget::Person(existing.id)).await?;
    people_adapter::delete_person(conn, existing.id).await?;
    Ok(favorites_removed)
}

impl From<crate::entities::people::Model> for Person {
    fn from(model: crate::entities::people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            height: model.height,
        }
    }
}
