use std::sync::Arc;

use async_graphql_axum::GraphQL;
use axum::{Router, routing::get};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
#[cfg(not(debug_assertions))]
use tower_http::cors::{AllowHeaders, AllowMethods};

use crate::{
    database::Database,
    http_server::{graphql, state::AppState},
};

pub struct HttpServerConfig {
    pub port: u16,
    pub database: Database,
}

async fn root() -> &'static str {
    "Booking directory"
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig { port, database } = config;

    let app_state = Arc::new(AppState {
        db: Arc::new(database),
    });

    let schema = graphql::create_schema(app_state);

    #[cfg(debug_assertions)]
    let cors_layer = CorsLayer::permissive();

    // Same-origin only in release builds
    #[cfg(not(debug_assertions))]
    let cors_layer = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
        ]))
        .allow_headers(AllowHeaders::list([axum::http::header::CONTENT_TYPE]));

    let app = Router::new()
        .route("/", get(root))
        .route(
            "/graphql",
            get(graphql::graphql).post_service(GraphQL::new(schema)),
        )
        .layer(ServiceBuilder::new().layer(cors_layer));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    log::info!("Listening on {}", port);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
