use actix_web::{error, web};

use crate::error::AppError;

pub mod body;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

use sitemap::{ApiRoute, Sitemap};

/// Every API route, in sitemap order.
pub fn api_routes() -> Vec<ApiRoute> {
    let mut routes = sitemap::routes();
    routes.extend(users::routes());
    routes.extend(people::routes());
    routes.extend(planets::routes());
    routes.extend(favorites::routes());
    routes
}

/// Register every API route plus the JSON 404 handling shared by all of them.
///
/// Used by `main.rs` and by the integration test app builder, so both see the
/// same paths, path-parameter errors, and fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Non-integer ids fail to match a resource, they are not bad requests
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| error::Error::from(AppError::resource_not_found())),
    );

    let mounted = sitemap::register(cfg, api_routes());
    cfg.app_data(web::Data::new(Sitemap { routes: mounted }))
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::resource_not_found())
}
