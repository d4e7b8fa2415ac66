//! Direct-to-store seeding helpers, bypassing HTTP.

use galaxy_api::adapters::people_sea::PersonCreate;
use galaxy_api::adapters::planets_sea::PlanetCreate;
use galaxy_api::adapters::users_sea::UserCreate;
use galaxy_api::repos::favorites::{self, Favorite, FavoriteTarget};
use galaxy_api::repos::people::{self, Person};
use galaxy_api::repos::planets::{self, Planet};
use galaxy_api::repos::users::{self, User};
use galaxy_api::AppError;
use sea_orm::ConnectionTrait;

/// Seed a user. Emails are unique, so pass a distinct one per test.
pub async fn seed_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<User, AppError> {
    let user = users::create(
        conn,
        UserCreate::new(email, "123").with_names("Luke", "Skywalker"),
    )
    .await?;
    Ok(user)
}

pub async fn seed_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    climate: &str,
    population: &str,
) -> Result<Planet, AppError> {
    let planet = planets::create(
        conn,
        PlanetCreate {
            name: Some(name.to_string()),
            climate: Some(climate.to_string()),
            population: Some(population.to_string()),
        },
    )
    .await?;
    Ok(planet)
}

pub async fn seed_person<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    gender: &str,
    height: &str,
) -> Result<Person, AppError> {
    let person = people::create(
        conn,
        PersonCreate {
            name: Some(name.to_string()),
            gender: Some(gender.to_string()),
            height: Some(height.to_string()),
        },
    )
    .await?;
    Ok(person)
}

pub async fn seed_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Favorite, AppError> {
    let favorite = favorites::create(conn, user_id, target).await?;
    Ok(favorite)
}
