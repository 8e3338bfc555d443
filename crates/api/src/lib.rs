//! HTTP API server for the patient records service.
//!
//! Provides CRUD and sorting endpoints over a JSON-file patient store,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::PatientService;
use metrics_exporter_prometheus::PrometheusHandle;
use patient_store::PatientStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::patients::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: PatientStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::ops::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::info::root))
        .route("/about", get(routes::info::about))
        .route("/health", get(routes::ops::health::<S>))
        .route("/view", get(routes::patients::list::<S>))
        .route("/patient/{id}", get(routes::patients::get::<S>))
        .route("/sort", get(routes::patients::sort::<S>))
        .route("/create", post(routes::patients::create::<S>))
        .route("/update/{id}", put(routes::patients::update::<S>))
        .route("/delete/{id}", delete(routes::patients::delete::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over the given patient store.
pub fn create_default_state<S: PatientStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        patients: PatientService::new(store),
    })
}
