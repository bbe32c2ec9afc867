use sea_orm_migration::prelude::*;

use super::m20250107_000002_create_users_profiles_posts::Profiles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The source migration never restored the table; mirror that.
        let _ = manager;
        Ok(())
    }
}
