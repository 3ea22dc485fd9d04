// 🌐 Web Front-End - The comparison page over HTTP (Axum)
// The catalog loads in the background; submits are gated until it has

use crate::catalog::{load_catalog_async, Catalog, RawCreature};
use crate::config::Config;
use crate::form::FormInput;
use crate::page::{render_form_page, PageController};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Set exactly once, when the data file load finishes (even if it failed)
    pub catalog: Arc<OnceCell<Catalog>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State whose catalog is still loading
    pub fn loading(config: Config) -> Self {
        AppState {
            catalog: Arc::new(OnceCell::new()),
            config: Arc::new(config),
        }
    }

    /// State with an already loaded catalog
    pub fn ready(config: Config, catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(OnceCell::from(catalog)),
            config: Arc::new(config),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.initialized()
    }
}

/// Kick off the data file load; the server keeps accepting requests meanwhile
pub fn spawn_catalog_load(state: &AppState) -> JoinHandle<()> {
    let cell = state.catalog.clone();
    let path = state.config.data_path.clone();

    tokio::spawn(async move {
        let catalog = load_catalog_async(&path).await;
        if cell.set(catalog).is_err() {
            debug!("catalog was already set, keeping the first one");
        }
    })
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

fn api_error(message: impl Into<String>) -> ApiResponse<()> {
    ApiResponse {
        success: false,
        data: (),
        error: Some(message.into()),
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - The comparison form
async fn serve_form(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_form_page(state.is_ready()))
}

/// POST /compare - Swap the form for the tile grid
async fn compare(State(state): State<AppState>, Form(form): Form<FormInput>) -> Response {
    render_comparison(&state, &form)
}

// Kept synchronous so the thread-local rng never crosses an await
fn render_comparison(state: &AppState, form: &FormInput) -> Response {
    let Some(catalog) = state.catalog.get() else {
        info!("Submit arrived before the data finished loading");
        return (StatusCode::SERVICE_UNAVAILABLE, Html(render_form_page(false))).into_response();
    };

    let mut controller = PageController::new(&state.config);
    let mut rng = rand::thread_rng();

    if let Err(e) = controller.submit(form, catalog, &mut rng) {
        return (StatusCode::CONFLICT, e.to_string()).into_response();
    }

    Html(controller.render(true)).into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/dinos - The loaded records
async fn get_dinos(State(state): State<AppState>) -> Response {
    match state.catalog.get() {
        Some(catalog) => {
            let records: Vec<RawCreature> = catalog.creatures().iter().map(RawCreature::from).collect();
            (StatusCode::OK, Json(ApiResponse::ok(records))).into_response()
        }
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(api_error("still loading")),
        )
            .into_response(),
    }
}

/// GET /api/dinos/:species - One record by species
async fn get_dino(State(state): State<AppState>, Path(species): Path<String>) -> Response {
    let Some(catalog) = state.catalog.get() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(api_error("still loading")),
        )
            .into_response();
    };

    match catalog.find(&species) {
        Some(creature) => (StatusCode::OK, Json(ApiResponse::ok(RawCreature::from(creature)))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(api_error(format!("unknown species: {}", species))),
        )
            .into_response(),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/dinos", get(get_dinos))
        .route("/dinos/:species", get(get_dino))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_form))
        .route("/compare", post(compare))
        .with_state(state)
        .nest("/api", api_routes)
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}
