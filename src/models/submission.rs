use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form entry. Rows are insert-only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Incoming create request. `message` is optional and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubmission {
    // Defaults let absent fields reach validation instead of a deserialize
    // rejection, so missing and blank are reported the same way.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateSubmission {
    /// Required fields that are missing or blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }
}
