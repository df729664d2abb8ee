use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

use crate::modules::users::application::ports::outgoing::user_deactivator::{
    UserDeactivator, UserDeactivatorError,
};

#[derive(Debug, Clone)]
pub struct DeactivateUserRequest {
    pub user_id: i32,
}

impl DeactivateUserRequest {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}

#[derive(Debug, Error)]
pub enum DeactivateUserError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserDeactivatorError> for DeactivateUserError {
    fn from(err: UserDeactivatorError) -> Self {
        match err {
            UserDeactivatorError::DatabaseError(msg) => DeactivateUserError::DatabaseError(msg),
        }
    }
}

#[async_trait]
pub trait IDeactivateUserUseCase: Send + Sync {
    async fn execute(&self, request: DeactivateUserRequest) -> Result<(), DeactivateUserError>;
}

/// Soft-deletes an account. Deactivating a user that is already deleted, or
/// one that never existed, succeeds without touching any rows.
pub struct DeactivateUserUseCase<D: UserDeactivator> {
    deactivator: D,
}

impl<D: UserDeactivator> DeactivateUserUseCase<D> {
    pub fn new(deactivator: D) -> Self {
        Self { deactivator }
    }
}

#[async_trait]
impl<D: UserDeactivator + Send + Sync> IDeactivateUserUseCase for DeactivateUserUseCase<D> {
    async fn execute(&self, request: DeactivateUserRequest) -> Result<(), DeactivateUserError> {
        if let Err(err) = self.deactivator.deactivate_user(request.user_id).await {
            error!(user_id = request.user_id, error = %err, "failed to deactivate user");
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Deactivator {}

        #[async_trait]
        impl UserDeactivator for Deactivator {
            async fn deactivate_user(&self, user_id: i32) -> Result<(), UserDeactivatorError>;
        }
    }

    #[tokio::test]
    async fn passes_the_user_id_to_the_deactivator() {
        let mut deactivator = MockDeactivator::new();
        deactivator
            .expect_deactivate_user()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeactivateUserUseCase::new(deactivator);
        let result = use_case.execute(DeactivateUserRequest::new(42)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn surfaces_database_errors() {
        let mut deactivator = MockDeactivator::new();
        deactivator
            .expect_deactivate_user()
            .returning(|_| Err(UserDeactivatorError::DatabaseError("connection reset".into())));

        let use_case = DeactivateUserUseCase::new(deactivator);
        let result = use_case.execute(DeactivateUserRequest::new(7)).await;

        match result {
            Err(DeactivateUserError::DatabaseError(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("expected a database error, got {other:?}"),
        }
    }
}
