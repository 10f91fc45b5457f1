use std::path::Path;

use axum::http::Method;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::metrics::count_hits;
use crate::state::AppState;

/// Build the axum router with all Chirpy endpoints.
///
/// `static_root` is served under `/app`; every request there is counted.
pub fn build_router(state: AppState, static_root: &Path) -> Router {
    let api = Router::new()
        .route("/healthz", get(handler::health_handler))
        .route("/reset", get(handler::reset_metrics))
        .route(
            "/chirps",
            get(handler::list_chirps).post(handler::create_chirp),
        )
        .route("/chirps/:id", get(handler::get_chirp))
        .route(
            "/users",
            post(handler::create_user).put(handler::update_user),
        )
        .route("/login", post(handler::login))
        .route("/refresh", post(handler::refresh))
        .route("/revoke", post(handler::revoke));

    let admin = Router::new()
        .route("/metrics", get(handler::metrics))
        .route("/dbreset", get(handler::reset_database));

    let files = Router::new()
        .nest_service("/app", ServeDir::new(static_root))
        .layer(middleware::from_fn_with_state(state.clone(), count_hits));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .nest("/admin", admin)
        .merge(files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
