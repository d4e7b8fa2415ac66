//! User repository functions. Users are read-only through the HTTP API;
//! `create` exists for seeding/admin tooling.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::users_sea::{self as users_adapter, UserCreate};
use crate::errors::domain::DomainError;

/// User domain model.
///
/// The password is stored as plain text by the existing schema and is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::find_all(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password: model.password,
            is_active: model.is_active,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}
