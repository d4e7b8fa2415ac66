//! SeaORM adapter for the planets table.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DeleteResult, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::planets;

pub mod dto;

pub use dto::{PlanetCreate, PlanetUpdate};

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find()
        .order_by_asc(planets::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
) -> Result<Option<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find_by_id(planet_id).one(conn).await
}

pub async fn create_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetCreate,
) -> Result<planets::Model, sea_orm::DbErr> {
    let planet_active = planets::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        climate: Set(dto.climate),
        population: Set(dto.population),
    };

    planet_active.insert(conn).await
}

pub async fn update_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetUpdate,
) -> Result<planets::Model, sea_orm::DbErr> {
    let planet_active = planets::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        climate: Set(dto.climate),
        population: Set(dto.population),
    };

    planet_active.update(conn).await
}

pub async fn delete_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i32,
) -> Result<DeleteResult, sea_orm::DbErr> {
    planets::Entity::delete_by_id(planet_id).exec(conn).await
}
