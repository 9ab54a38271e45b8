use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 50))
                    .col(string_len(User::FirstName, 50))
                    .col(string_len(User::LastName, 50))
                    .col(string_len_uniq(User::Email, 120))
                    .col(string_len(User::Password, 80))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Email,
    Password,
    IsActive,
    CreatedAt,
}
