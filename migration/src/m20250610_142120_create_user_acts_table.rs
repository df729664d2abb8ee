use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Join table for the users <-> acts many-to-many (participations, as
        // opposed to the acts a user owns outright).
        manager
            .create_table(
                Table::create()
                    .table(UserActs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserActs::UserId).integer().not_null())
                    .col(ColumnDef::new(UserActs::ActId).integer().not_null())
                    .col(
                        ColumnDef::new(UserActs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserActs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_user_acts")
                            .col(UserActs::UserId)
                            .col(UserActs::ActId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_acts_user_id")
                            .from(UserActs::Table, UserActs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_acts_act_id")
                            .from(UserActs::Table, UserActs::ActId)
                            .to(Acts::Table, Acts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_acts_act_id
                ON user_acts (act_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_user_acts_updated_at
                BEFORE UPDATE ON user_acts
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_user_acts_updated_at ON user_acts")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_acts_act_id")
            .await?;

        manager
            .drop_table(Table::drop().table(UserActs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserActs {
    Table,
    UserId,
    ActId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Acts {
    Table,
    Id,
}
