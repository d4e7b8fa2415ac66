//! SeaORM adapter for the users table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        password: Set(dto.password),
        is_active: Set(dto.is_active),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
    };

    user_active.insert(conn).await
}
