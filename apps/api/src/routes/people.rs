use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use serde_with::rust::double_option;
use tracing::info;

use crate::adapters::people_sea::PersonCreate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::people::{self, PersonPatch};
use crate::routes::body::{patch_text, text, FreeText};
use crate::routes::sitemap::ApiRoute;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<FreeText>,
}

impl From<CreatePersonRequest> for PersonCreate {
    fn from(body: CreatePersonRequest) -> Self {
        Self {
            name: body.name,
            gender: body.gender,
            height: text(body.height),
        }
    }
}

/// Body of `PUT /people/{id}`; absent keeps, `null` clears.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub gender: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub height: Option<Option<FreeText>>,
}

impl From<UpdatePersonRequest> for PersonPatch {
    fn from(body: UpdatePersonRequest) -> Self {
        Self {
            name: body.name,
            gender: body.gender,
            height: patch_text(body.height),
        }
    }
}

async fn list_people(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let people = people::find_all(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(people))
}

async fn get_person(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let person = people::require_by_id(app_state.db(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(person))
}

async fn create_person(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePersonRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = PersonCreate::from(body.into_inner());

    let person = with_txn(&app_state, move |txn| {
        Box::pin(async move { people::create(txn, dto).await.map_err(AppError::from) })
    })
    .await?;

    info!(person_id = person.id, "person.created");
    Ok(HttpResponse::Created().json(person))
}

async fn update_person(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdatePersonRequest>,
) -> Result<HttpResponse, AppError> {
    let person_id = path.into_inner();
    let patch = PersonPatch::from(body.into_inner());

    let person = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            people::update(txn, person_id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(person_id, "person.updated");
    Ok(HttpResponse::Ok().json(person))
}

async fn delete_person(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let person_id = path.into_inner();

    let favorites_removed = with_txn(&app_state, move |txn| {
        Box::pin(async move { people::delete(txn, person_id).await.map_err(AppError::from) })
    })
    .await?;

    info!(person_id, favorites_removed, "person.deleted");
    Ok(HttpResponse::Ok().json(json!({ "msg": "Person deleted" })))
}

pub fn routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new(Method::GET, "/people", list_people),
        ApiRoute::new(Method::POST, "/people", create_person),
        ApiRoute::new(Method::GET, "/people/{people_id}", get_person),
        ApiRoute::new(Method::PUT, "/people/{people_id}", update_person),
        ApiRoute::new(Method::DELETE, "/people/{people_id}", delete_person),
    ]
}
