//! Backend entry-point: wires the REST endpoints, health probes, and
//! OpenAPI docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::RequestId;
use backend::example_data;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::{self, HttpState};
use backend::outbound::persistence::InMemoryUserStore;

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "User directory REST service")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Populate the store with example users at startup.
    #[arg(long)]
    seed: bool,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();

    let store = Arc::new(InMemoryUserStore::new());
    if args.seed {
        example_data::seed_users(store.as_ref())
            .await
            .map_err(|err| std::io::Error::other(format!("seeding failed: {err}")))?;
    }
    let state = HttpState::with_store(store);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the probe state stays shared.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let state = state.clone();
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(server_health_state.clone())
            .wrap(RequestId)
            .configure(|cfg| http::configure(cfg, state))
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }

        app
    })
    .bind((args.host.as_str(), args.port))?;

    health_state.mark_ready();
    server.run().await
}
