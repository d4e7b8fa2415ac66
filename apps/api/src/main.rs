use actix_web::{web, App, HttpServer};
use galaxy_api::config::server::ServerConfig;
use galaxy_api::infra::state::build_state;
use galaxy_api::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use galaxy_api::routes;
use galaxy_api::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only
    // (DATABASE_URL, HOST, PORT, RUST_LOG).
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    // Connects and applies pending migrations
    let app_state = match build_state().build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup.state_failed");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "startup.listening");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
