use crate::api::{self, AppState};
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/info", get(api::info::phonebook_info))
        .route("/api/persons", get(api::persons::list_persons))
        .route("/api/persons", post(api::persons::create_person))
        .route("/api/persons/:id", get(api::persons::get_person))
        .route("/api/persons/:id", put(api::persons::update_person))
        .route("/api/persons/:id", delete(api::persons::delete_person))
        .fallback(unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
