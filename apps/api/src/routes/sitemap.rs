//! Route table and index routes.
//!
//! Every handler is declared once as an [`ApiRoute`]. `register` mounts the
//! table and returns what it mounted, which is what `GET /` serves, so the
//! sitemap cannot drift from the router.

use actix_web::http::Method;
use actix_web::{web, FromRequest, Handler, HttpResponse, Responder, Route};
use serde::Serialize;
use serde_json::json;

/// One entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: String,
    pub path: &'static str,
}

/// A handler bound to a method and path, not yet mounted.
pub struct ApiRoute {
    pub info: RouteInfo,
    route: Route,
}

impl ApiRoute {
    pub fn new<F, Args>(method: Method, path: &'static str, handler: F) -> Self
    where
        F: Handler<Args>,
        Args: FromRequest + 'static,
        F::Output: Responder + 'static,
    {
        Self {
            info: RouteInfo {
                method: method.to_string(),
                path,
            },
            route: web::method(method).to(handler),
        }
    }
}

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Sitemap {
    pub routes: Vec<RouteInfo>,
}

/// Mount `routes`, one resource per distinct path (so a known path with the
/// wrong method is a 405), and return the mounted entries in table order.
pub fn register(cfg: &mut web::ServiceConfig, routes: Vec<ApiRoute>) -> Vec<RouteInfo> {
    let mut mounted = Vec::with_capacity(routes.len());
    let mut by_path: Vec<(&'static str, Vec<Route>)> = Vec::new();

    for ApiRoute { info, route } in routes {
        match by_path.iter_mut().find(|(path, _)| *path == info.path) {
            Some((_, group)) => group.push(route),
            None => by_path.push((info.path, vec![route])),
        }
        mounted.push(info);
    }

    for (path, group) in by_path {
        let resource = group
            .into_iter()
            .fold(web::resource(path), |resource, route| resource.route(route));
        cfg.service(resource);
    }

    mounted
}

async fn sitemap(sitemap: web::Data<Sitemap>) -> HttpResponse {
    HttpResponse::Ok().json(sitemap.get_ref())
}

async fn hello_user() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "Hello, this is your GET /user response " }))
}

pub fn routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new(Method::GET, "/", sitemap),
        ApiRoute::new(Method::GET, "/user", hello_user),
    ]
}
