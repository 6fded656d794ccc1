use crate::api::middleware::{ApiError, ApiResult};
use crate::api::AppState;
use crate::domain::ports::person_repository::{PersonRepository, StoreError};
use crate::models::{Person, PersonPayload};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn list_persons(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.db.list_persons().await?;
    Ok(Json(persons))
}

// Not-found renders as a bare 404 with an empty body here; update and delete
// answer the same condition with a JSON error payload.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.db.find_person(&id).await {
        Ok(person) => Ok(Json(person).into_response()),
        Err(StoreError::NotFound) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(err.into()),
    }
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> ApiResult<Json<Person>> {
    let person = state
        .db
        .create_person(&payload.name, &payload.number)
        .await?;

    Ok(Json(person))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PersonPayload>,
) -> ApiResult<Json<Person>> {
    let person = state
        .db
        .update_person(&id, &payload.name, &payload.number)
        .await?;

    Ok(Json(person))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.db.delete_person(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
