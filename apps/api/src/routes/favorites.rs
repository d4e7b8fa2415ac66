//! Favorite create/delete handlers, one pair per target kind.

use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::NotFoundKind;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::favorites::{self, FavoriteTarget};
use crate::routes::sitemap::ApiRoute;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
}

async fn add_favorite(
    app_state: &AppState,
    body: FavoriteRequest,
    target: FavoriteTarget,
) -> Result<HttpResponse, AppError> {
    // 0 is not a valid id and is rejected like a missing one
    let user_id = match body.user_id {
        Some(user_id) if user_id != 0 => user_id,
        _ => return Err(AppError::invalid(ErrorCode::UserIdRequired, "User ID required")),
    };

    let favorite = with_txn(app_state, move |txn| {
        Box::pin(async move {
            favorites::create(txn, user_id, target)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(
        favorite_id = favorite.id,
        user_id,
        target = target.kind(),
        target_id = target.id(),
        "favorite.created"
    );
    Ok(HttpResponse::Created().json(favorite))
}

async fn remove_favorite(
    app_state: &AppState,
    body: FavoriteRequest,
    target: FavoriteTarget,
) -> Result<HttpResponse, AppError> {
    let Some(user_id) = body.user_id else {
        return Err(AppError::not_found(
            ErrorCode::FavoriteNotFound,
            NotFoundKind::Favorite.message(),
        ));
    };

    let favorite = with_txn(app_state, move |txn| {
        Box::pin(async move {
            favorites::delete_by_user_and_target(txn, user_id, target)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(
        favorite_id = favorite.id,
        user_id,
        target = target.kind(),
        target_id = target.id(),
        "favorite.deleted"
    );
    Ok(HttpResponse::Ok().json(json!({ "msg": "Favorite deleted" })))
}

async fn add_favorite_planet(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    add_favorite(
        &app_state,
        body.into_inner(),
        FavoriteTarget::Planet(path.into_inner()),
    )
    .await
}

async fn add_favorite_person(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    add_favorite(
        &app_state,
        body.into_inner(),
        FavoriteTarget::Person(path.into_inner()),
    )
    .await
}

async fn remove_favorite_planet(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    remove_favorite(
        &app_state,
        body.into_inner(),
        FavoriteTarget::Planet(path.into_inner()),
    )
    .await
}

async fn remove_favorite_person(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<FavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    remove_favorite(
        &app_state,
        body.into_inner(),
        FavoriteTarget::Person(path.into_inner()),
    )
    .await
}

pub fn routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new(Method::POST, "/favorite/planet/{planet_id}", add_favorite_planet),
        ApiRoute::new(Method::DELETE, "/favorite/planet/{planet_id}", remove_favorite_planet),
        ApiRoute::new(Method::POST, "/favorite/people/{people_id}", add_favorite_person),
        ApiRoute::new(Method::DELETE, "/favorite/people/{people_id}", remove_favorite_person),
    ]
}
