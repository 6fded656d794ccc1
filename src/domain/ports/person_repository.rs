use crate::models::Person;
use crate::utils::validation::ValidationError;
use async_trait::async_trait;
use thiserror::Error;

/// Failures a store operation can surface. Everything the driver throws is
/// classified into exactly one of these kinds before it leaves the store, so
/// callers never match on message strings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The supplied identifier is not well formed for the store's addressing
    /// scheme.
    #[error("malformatted id")]
    MalformedId,
    /// The identifier is well formed but no record carries it.
    #[error("Person not found")]
    NotFound,
    /// A field constraint was violated on a write.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Any lower-layer failure not otherwise classified.
    #[error(transparent)]
    Unexpected(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list_persons(&self) -> StoreResult<Vec<Person>>;
    async fn find_person(&self, id: &str) -> StoreResult<Person>;
    async fn create_person(&self, name: &str, number: &str) -> StoreResult<Person>;
    /// Full replacement of `name`/`number`; returns the record as stored
    /// after the write.
    async fn update_person(&self, id: &str, name: &str, number: &str) -> StoreResult<Person>;
    async fn delete_person(&self, id: &str) -> StoreResult<()>;
    async fn count_persons(&self) -> StoreResult<i64>;
}
