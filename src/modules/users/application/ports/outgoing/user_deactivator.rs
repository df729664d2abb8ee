use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserDeactivatorError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserDeactivator {
    /// Marks the user and every influencer and brand profile attached to it
    /// as deleted. Rows are kept; only their status changes.
    async fn deactivate_user(&self, user_id: i32) -> Result<(), UserDeactivatorError>;
}
