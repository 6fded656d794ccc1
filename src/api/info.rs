use crate::api::middleware::ApiResult;
use crate::api::AppState;
use crate::domain::ports::person_repository::PersonRepository;
use axum::{extract::State, response::Html};
use chrono::Local;

pub async fn phonebook_info(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let count = state.db.count_persons().await?;
    let now = Local::now().to_rfc2822();

    Ok(Html(format!(
        "<p>Phonebook has info for {} people<br />{}</p>",
        count, now
    )))
}
