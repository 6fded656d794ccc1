pub mod info;
pub mod middleware;
pub mod persons;
pub mod router;

pub use middleware::*;

use crate::domain::ports::person_repository::PersonRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn PersonRepository>,
}
