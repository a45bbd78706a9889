use actix_web::{web, App, HttpServer};
use scorebook::config::db::{DbKind, DbProfile};
use scorebook::config::server::ServerConfig;
use scorebook::infra::state::build_state;
use scorebook::middleware::request_trace::RequestTrace;
use scorebook::middleware::structured_logger::StructuredLogger;
use scorebook::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local development).
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database selection");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(kind, DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, ?kind, "scorebook backend starting");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(server.bind_addr())?
    .run()
    .await
}
