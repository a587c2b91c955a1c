use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Timelike;
use tokio::sync::OnceCell;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::api;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::error::ServeError;
use super::relay;
use crate::constellation::{HttpSnapshotSource, SnapshotCache};
use crate::scene::FireMarker;
use crate::wildfire::WildfireClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub constellation: Arc<SnapshotCache<HttpSnapshotSource>>,
    pub wildfires: Arc<WildfireClient>,
    pub fires: Arc<OnceCell<Arc<Vec<FireMarker>>>>,
    pub http: reqwest::Client,
}

pub async fn run_server(config: Config) -> Result<(), ServeError> {
    let bind_addr = config.web.bind.clone();

    let source = HttpSnapshotSource::new(&config.snapshots.endpoint, config.snapshots.timeout)?;
    let constellation = Arc::new(SnapshotCache::new(source));
    let wildfires = WildfireClient::new(
        &config.wildfires.endpoint,
        config.wildfires.days,
        config.wildfires.timeout,
    )?;
    let http = reqwest::Client::builder()
        .timeout(config.snapshots.timeout)
        .build()?;

    // Warm the slot the first viewer usually lands on.
    constellation.request(chrono::Utc::now().hour());

    let state = AppState {
        config: Arc::new(config),
        constellation,
        wildfires: Arc::new(wildfires),
        fires: Arc::new(OnceCell::new()),
        http,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Relay endpoints (both upstream request forms)
        .route("/treasure", get(relay::treasure_query))
        .route("/treasure/{id}", get(relay::treasure_path))
        // Engine endpoints
        .route("/api/frame", get(api::frame))
        .route("/api/snapshot/{hour}", get(api::snapshot))
        .route("/api/fires", get(api::fires))
        .route("/api/status", get(api::status))
        // OpenAPI
        .route("/api-doc/openapi.json", get(openapi))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
