// src/modules/users/adapter/outgoing/user_deactivator_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::users::adapter::outgoing::sea_orm_entity::status::Status;
use crate::modules::users::adapter::outgoing::sea_orm_entity::{brands, influencers, users};
use crate::modules::users::application::ports::outgoing::user_deactivator::{
    UserDeactivator, UserDeactivatorError,
};

#[derive(Clone)]
pub struct UserDeactivatorPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserDeactivatorPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDeactivator for UserDeactivatorPostgres {
    async fn deactivate_user(&self, user_id: i32) -> Result<(), UserDeactivatorError> {
        // Profiles first, the owning user row last, all inside one
        // transaction. Dropping the transaction on an early return rolls
        // back whatever already ran.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        influencers::Entity::update_many()
            .col_expr(influencers::Column::Status, Expr::value(Status::Deleted.to_value()))
            .filter(influencers::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        brands::Entity::update_many()
            .col_expr(brands::Column::Status, Expr::value(Status::Deleted.to_value()))
            .filter(brands::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        users::Entity::update_many()
            .col_expr(users::Column::Status, Expr::value(Status::Deleted.to_value()))
            .filter(users::Column::Id.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> UserDeactivatorError {
    UserDeactivatorError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn drain_log(db: Arc<DatabaseConnection>) -> String {
        let Ok(conn) = Arc::try_unwrap(db) else {
            panic!("connection should have a single owner by now");
        };
        let log = conn.into_transaction_log();
        assert_eq!(log.len(), 1, "all statements should share one transaction");
        format!("{:?}", log[0])
    }

    #[tokio::test]
    async fn test_deactivate_user_success() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec_result(2), exec_result(1), exec_result(1)])
                .into_connection(),
        );
        let deactivator = UserDeactivatorPostgres::new(Arc::clone(&db));

        let res = deactivator.deactivate_user(9).await;
        assert!(res.is_ok());

        drop(deactivator);
        let stmts = drain_log(db);

        let influencers_at = stmts.find("influencers").expect("influencers update");
        let brands_at = stmts.find("brands").expect("brands update");
        let users_at = stmts.find(r#"\"users\""#).expect("users update");
        assert!(influencers_at < brands_at);
        assert!(brands_at < users_at);
        assert!(stmts.contains("BEGIN"));
        assert!(stmts.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_deactivate_user_filters_profiles_by_owner_and_user_by_id() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec_result(1), exec_result(1), exec_result(1)])
                .into_connection(),
        );
        let deactivator = UserDeactivatorPostgres::new(Arc::clone(&db));

        deactivator.deactivate_user(9).await.unwrap();

        drop(deactivator);
        let stmts = drain_log(db);

        assert!(stmts.contains(r#"\"influencers\".\"user_id\""#));
        assert!(stmts.contains(r#"\"brands\".\"user_id\""#));
        assert!(stmts.contains(r#"\"users\".\"id\""#));
    }

    #[tokio::test]
    async fn test_deactivate_user_with_no_matching_rows_still_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(0), exec_result(0), exec_result(0)])
            .into_connection();
        let deactivator = UserDeactivatorPostgres::new(Arc::new(db));

        let res = deactivator.deactivate_user(314).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_user_rolls_back_when_the_first_update_fails() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_errors([DbErr::Custom("connection error".to_string())])
                .into_connection(),
        );
        let deactivator = UserDeactivatorPostgres::new(Arc::clone(&db));

        let res = deactivator.deactivate_user(9).await;
        assert!(matches!(
            res.unwrap_err(),
            UserDeactivatorError::DatabaseError(_)
        ));

        drop(deactivator);
        let stmts = drain_log(db);

        assert!(stmts.contains("influencers"));
        assert!(stmts.contains("ROLLBACK"));
        assert!(!stmts.contains("brands"));
        assert!(!stmts.contains(r#"\"users\""#));
    }

    #[tokio::test]
    async fn test_deactivate_user_rolls_back_when_a_later_update_fails() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec_result(1)])
                .append_exec_errors([DbErr::Custom("deadlock detected".to_string())])
                .into_connection(),
        );
        let deactivator = UserDeactivatorPostgres::new(Arc::clone(&db));

        let res = deactivator.deactivate_user(9).await;
        match res {
            Err(UserDeactivatorError::DatabaseError(msg)) => {
                assert!(msg.contains("deadlock detected"))
            }
            other => panic!("expected a database error, got {other:?}"),
        }

        drop(deactivator);
        let stmts = drain_log(db);

        assert!(stmts.contains("influencers"));
        assert!(stmts.contains("brands"));
        assert!(stmts.contains("ROLLBACK"));
        assert!(!stmts.contains(r#"\"users\""#));
    }
}
