//! Axum web server for interactive title-case conversion with a per-component
//! decision trace.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use titlecaser_core::{convert_with_trace, ComponentDecision};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Canned inputs for the demo dropdown, each exercising a different rule.
const DEMO_TITLES: &[&str] = &[
    "war and peace",
    "WAR AND PEACE: THE SEQUEL",
    "a-to-z",
    "email me at John@Example.com",
    "open my_file.txt now",
    "visit http://example.com for details",
    "the SEC's apple probe: what you need to know",
];

#[derive(Deserialize)]
struct ConvertRequest {
    text: String,
}

#[derive(Serialize)]
struct ConvertResponse {
    result: String,
    components: Vec<ComponentDecision>,
    total_words: usize,
    processing_us: u128,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/convert", post(convert_handler))
        .route("/demo-titles", get(demo_titles_handler))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("titlecaser server listening on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Returns the main HTML page.
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Converts the posted text and returns the result with the decision trace.
async fn convert_handler(Json(req): Json<ConvertRequest>) -> impl IntoResponse {
    if req.text.len() > 64 * 1024 {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({"error": "text too large"})),
        )
            .into_response();
    }

    let started = std::time::Instant::now();
    let (result, components) = convert_with_trace(&req.text);
    let total_words = components
        .iter()
        .filter(|d| d.disposition.is_some())
        .count();

    Json(ConvertResponse {
        result,
        components,
        total_words,
        processing_us: started.elapsed().as_micros(),
    })
    .into_response()
}

/// Returns the demo inputs for the UI.
async fn demo_titles_handler() -> impl IntoResponse {
    Json(DEMO_TITLES)
}
