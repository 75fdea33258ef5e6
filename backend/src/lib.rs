use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;

pub mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
    pub mod security_headers;
}
pub mod models {
    pub mod lead_models;
}
pub mod utils {
    pub mod lead_log;
}

use handlers::contact_handlers;
use handlers::security_headers;
use utils::lead_log::LeadSink;

pub struct AppState {
    pub lead_sink: Box<dyn LeadSink>,
}

impl AppState {
    pub fn new(lead_sink: impl LeadSink + 'static) -> Self {
        Self {
            lead_sink: Box::new(lead_sink),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contacto", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .layer(middleware::from_fn(security_headers::apply_security_headers))
        .with_state(state)
}
