// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found_kinds() {
    let cases = [
        (NotFoundKind::Planet, "PLANET_NOT_FOUND"),
        (NotFoundKind::Person, "PERSON_NOT_FOUND"),
        (NotFoundKind::Favorite, "FAVORITE_NOT_FOUND"),
        (NotFoundKind::Other("Record".into()), "NOT_FOUND"),
    ];

    for (kind, code) in cases {
        let detail = kind.message();
        let app: AppError = DomainError::not_found(kind, detail.clone()).into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 404);
        assert_eq!(app.public_detail(), detail);
    }
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::UniqueEmail, "email exists").into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "generic").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_infra() {
    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(down.status().as_u16(), 503);

    let constraint: AppError =
        DomainError::infra(InfraErrorKind::Constraint, "Foreign key constraint violation").into();
    assert_eq!(constraint.code().as_str(), "CONSTRAINT_VIOLATION");
    assert_eq!(constraint.status().as_u16(), 500);

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
            .into();
    assert_eq!(other.code().as_str(), "DB_ERROR");
    assert_eq!(other.status().as_u16(), 500);
}

#[test]
fn config_detail_is_not_exposed() {
    let app = AppError::config("PORT must be a valid port number, got: 'x'");
    assert_eq!(app.public_detail(), "Internal server error");
    assert_eq!(app.status().as_u16(), 500);
}

#[actix_web::test]
async fn error_response_is_single_key_json() {
    let app = AppError::not_found(ErrorCode::PlanetNotFound, "Planet not found");
    let resp = app.error_response();

    assert_eq!(resp.status().as_u16(), 404);
    assert!(resp.headers().get("x-trace-id").is_some());

    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "Planet not found"}));
}
