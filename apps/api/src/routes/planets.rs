use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use serde_with::rust::double_option;
use tracing::info;

use crate::adapters::planets_sea::PlanetCreate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::planets::{self, PlanetPatch};
use crate::routes::body::{patch_text, text, FreeText};
use crate::routes::sitemap::ApiRoute;
use crate::state::app_state::AppState;

/// Body of `POST /planets`. Absent and `null` fields are both stored as null.
#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub population: Option<FreeText>,
}

impl From<CreatePlanetRequest> for PlanetCreate {
    fn from(body: CreatePlanetRequest) -> Self {
        Self {
            name: body.name,
            climate: body.climate,
            population: text(body.population),
        }
    }
}

/// Body of `PUT /planets/{id}`.
///
/// Each field is `Option<Option<_>>`:
/// - None = not sent (keep stored value)
/// - Some(None) = sent as null (clear)
/// - Some(Some(v)) = replace
#[derive(Debug, Deserialize)]
pub struct UpdatePlanetRequest {
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub climate: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub population: Option<Option<FreeText>>,
}

impl From<UpdatePlanetRequest> for PlanetPatch {
    fn from(body: UpdatePlanetRequest) -> Self {
        Self {
            name: body.name,
            climate: body.climate,
            population: patch_text(body.population),
        }
    }
}

async fn list_planets(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let planets = planets::find_all(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(planets))
}

async fn get_planet(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let planet = planets::require_by_id(app_state.db(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(planet))
}

async fn create_planet(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlanetRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = PlanetCreate::from(body.into_inner());

    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move { planets::create(txn, dto).await.map_err(AppError::from) })
    })
    .await?;

    info!(planet_id = planet.id, "planet.created");
    Ok(HttpResponse::Created().json(planet))
}

async fn update_planet(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdatePlanetRequest>,
) -> Result<HttpResponse, AppError> {
    let planet_id = path.into_inner();
    let patch = PlanetPatch::from(body.into_inner());

    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            planets::update(txn, planet_id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(planet_id, "planet.updated");
    Ok(HttpResponse::Ok().json(planet))
}

async fn delete_planet(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let planet_id = path.into_inner();

    let favorites_removed = with_txn(&app_state, move |txn| {
        Box::pin(async move { planets::delete(txn, planet_id).await.map_err(AppError::from) })
    })
    .await?;

    info!(planet_id, favorites_removed, "planet.deleted");
    Ok(HttpResponse::Ok().json(json!({ "msg": "Planet deleted" })))
}

pub fn routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new(Method::GET, "/planets", list_planets),
        ApiRoute::new(Method::POST, "/planets", create_planet),
        ApiRoute::new(Method::GET, "/planets/{planet_id}", get_planet),
        ApiRoute::new(Method::PUT, "/planets/{planet_id}", update_planet),
        ApiRoute::new(Method::DELETE, "/planets/{planet_id}", delete_planet),
    ]
}
