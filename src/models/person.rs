use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub number: String,
}

// DTO for create/update request bodies. Missing fields deserialize to empty
// strings so they surface as validation errors rather than body-parse
// rejections.
#[derive(Debug, Deserialize)]
pub struct PersonPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
}

impl Person {
    pub fn new(name: String, number: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            number,
        }
    }
}
