//! SeaORM adapter for the favorites table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::favorites;

pub mod dto;

pub use dto::FavoriteCreate;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<favorites::Model>, sea_orm::DbErr> {
    favorites::Entity::find()
        .order_by_asc(favorites::Column::Id)
        .all(conn)
        .await
}

/// First favorite of `user_id` whose `target_column` equals `target_id`.
pub async fn find_first_by_user_and_column<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    target_column: favorites::Column,
    target_id: i32,
) -> Result<Option<favorites::Model>, sea_orm::DbErr> {
    favorites::Entity::find()
        .filter(favorites::Column::UserId.eq(user_id))
        .filter(target_column.eq(target_id))
        .order_by_asc(favorites::Column::Id)
        .one(conn)
        .await
}

pub async fn create_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FavoriteCreate,
) -> Result<favorites::Model, sea_orm::DbErr> {
    let favorite_active = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        planet_id: Set(dto.planet_id),
        people_id: Set(dto.people_id),
    };

    favorite_active.insert(conn).await
}

pub async fn delete_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    favorite_id: i32,
) -> Result<DeleteResult, sea_orm::DbErr> {
    favorites::Entity::delete_by_id(favorite_id).exec(conn).await
}

/// Delete every favorite whose `target_column` equals `target_id`.
pub async fn delete_by_column<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    target_column: favorites::Column,
    target_id: i32,
) -> Result<DeleteResult, sea_orm::DbErr> {
    favorites::Entity::delete_many()
        .filter(target_column.eq(target_id))
        .exec(conn)
        .await
}
