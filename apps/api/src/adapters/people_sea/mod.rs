//! SeaORM adapter for the people table.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DeleteResult, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::entities::people;

pub mod dto;

pub use dto::{PersonCreate, PersonUpdate};

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<people::Model>, sea_orm::DbErr> {
    people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
) -> Result<Option<people::Model>, sea_orm::DbErr> {
    people::Entity::find_by_id(person_id).one(conn).await
}

pub async fn create_person<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PersonCreate,
) -> Result<people::Model, sea_orm::DbErr> {
    let person_active = people::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        gender: Set(dto.gender),
        height: Set(dto.height),
    };

    person_active.insert(conn).await
}

pub async fn update_person<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PersonUpdate,
) -> Result<people::Model, sea_orm::DbErr> {
    let person_active = people::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        gender: Set(dto.gender),
        height: Set(dto.height),
    };

    person_active.update(conn).await
}

pub async fn delete_person<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i32,
) -> Result<DeleteResult, sea_orm::DbErr> {
    people::Entity::delete_by_id(person_id).exec(conn).await
}
