use actix_web::http::Method;
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::repos::{favorites, users};
use crate::routes::sitemap::ApiRoute;
use crate::state::app_state::AppState;

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = users::find_all(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Every favorite in the store, across all users.
async fn list_favorites(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let favorites = favorites::find_all(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(favorites))
}

pub fn routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new(Method::GET, "/users", list_users),
        ApiRoute::new(Method::GET, "/users/favorites", list_favorites),
    ]
}
