use actix_web::http::StatusCode;
use actix_web::test;
use galaxy_api::error::AppError;
use galaxy_api::infra::state::build_state;
use serde_json::json;

use crate::common::{assert_error_body, read_json};
use crate::support::factory::seed_planet;
use crate::support::test_state::IN_MEMORY_SQLITE;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_tatooine_on_fresh_store_exact_bodies() -> Result<(), AppError> {
    // Always a private store so the first id is 1
    let state = build_state()
        .with_database_url(IN_MEMORY_SQLITE)
        .build()
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let tatooine = json!({"id": 1, "name": "Tatooine", "climate": "Arid", "population": "200000"});

    let req = test::TestRequest::post()
        .uri("/planets")
        .set_json(json!({"name": "Tatooine", "climate": "Arid", "population": "200000"}))
        .to_request();
    let created = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(created, tatooine);

    let req = test::TestRequest::get().uri("/planets/1").to_request();
    let fetched = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(fetched, tatooine);

    let req = test::TestRequest::delete().uri("/planets/1").to_request();
    let deleted = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(deleted, json!({"msg": "Planet deleted"}));

    let req = test::TestRequest::get().uri("/planets/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Planet not found").await;

    Ok(())
}

#[actix_web::test]
async fn test_create_then_get_round_trip() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/planets")
        .set_json(json!({"name": "Hoth", "climate": "Frozen", "population": "0"}))
        .to_request();
    let created = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;

    let id = created["id"].as_i64().expect("id should be an integer");
    assert_eq!(
        created,
        json!({"id": id, "name": "Hoth", "climate": "Frozen", "population": "0"})
    );

    let req = test::TestRequest::get()
        .uri(&format!("/planets/{id}"))
        .to_request();
    let fetched = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(fetched, created);

    Ok(())
}

#[actix_web::test]
async fn test_create_with_missing_fields_stores_nulls() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/planets")
        .set_json(json!({"name": "Dagobah", "climate": null}))
        .to_request();
    let created = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;

    assert_eq!(created["name"], "Dagobah");
    assert!(created["climate"].is_null());
    assert!(created["population"].is_null());

    Ok(())
}

#[actix_web::test]
async fn test_numeric_population_is_stored_as_text() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/planets")
        .set_json(json!({"name": "Tatooine", "climate": "Arid", "population": 200000}))
        .to_request();
    let created = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(created["population"], "200000");

    Ok(())
}

#[actix_web::test]
async fn test_list_returns_all_planets_in_id_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let first = seed_planet(state.db(), "Alderaan", "Temperate", "2000000000").await?;
    let second = seed_planet(state.db(), "Bespin", "Temperate", "6000000").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/planets").to_request();
    let list = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    let ids: Vec<i64> = list
        .as_array()
        .expect("list should be an array")
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();
    let first_pos = ids.iter().position(|id| *id == i64::from(first.id));
    let second_pos = ids.iter().position(|id| *id == i64::from(second.id));
    assert!(first_pos.is_some() && second_pos.is_some());
    assert!(first_pos < second_pos);

    Ok(())
}

#[actix_web::test]
async fn test_partial_update_keeps_absent_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let hoth = seed_planet(state.db(), "Hoth", "Frozen", "0").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri(&format!("/planets/{}", hoth.id))
        .set_json(json!({"climate": "Icy"}))
        .to_request();
    let updated = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(
        updated,
        json!({"id": hoth.id, "name": "Hoth", "climate": "Icy", "population": "0"})
    );

    let req = test::TestRequest::get()
        .uri(&format!("/planets/{}", hoth.id))
        .to_request();
    let fetched = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(fetched, updated);

    Ok(())
}

#[actix_web::test]
async fn test_update_with_null_clears_field() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let hoth = seed_planet(state.db(), "Hoth", "Frozen", "0").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri(&format!("/planets/{}", hoth.id))
        .set_json(json!({"population": null}))
        .to_request();
    let updated = read_json(test::call_service(&app, req).await, StatusCode::OK).await;

    assert!(updated["population"].is_null());
    assert_eq!(updated["climate"], "Frozen");

    Ok(())
}

#[actix_web::test]
async fn test_update_missing_planet_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri("/planets/9999")
        .set_json(json!({"name": "Nowhere"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Planet not found").await;

    Ok(())
}

#[actix_web::test]
async fn test_delete_then_get_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let planet = seed_planet(state.db(), "Alderaan", "Temperate", "2000000000").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/planets/{}", planet.id))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body, json!({"msg": "Planet deleted"}));

    let req = test::TestRequest::get()
        .uri(&format!("/planets/{}", planet.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Planet not found").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/planets/{}", planet.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "Planet not found").await;

    Ok(())
}
