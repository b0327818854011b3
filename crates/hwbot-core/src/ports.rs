use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Port for the review-tracking API.
///
/// The Practicum HTTP client is the first implementation; tests substitute
/// scripted sources behind the same interface.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch updates since the given epoch timestamp.
    ///
    /// Returns the decoded payload verbatim; schema checks live in
    /// [`crate::response`], not here.
    async fn fetch_updates(&self, since: i64) -> Result<serde_json::Value>;
}

/// Port for outbound chat messaging.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
